// SPDX-License-Identifier: MIT OR Apache-2.0
//! `dependencies { }` blocks.
//!
//! You probably want to start at [`DependenciesBlock`].

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::DslError;
use crate::container::{DslContainer, container, nested};
use crate::element::{Element, FunctionCall, LambdaBlock, LanguageSpecific, Parameter};
use crate::language::{InfixSupport, LabelSupport};

/// What a dependency points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyNotation {
	/// `"group:name:version"` coordinates
	External(String),
	/// A version catalog accessor such as `libs.acme.rocket`, unquoted
	Catalog(String),
	/// `project(":path")`
	Project {
		/// Gradle path of the project
		path: String,
		/// Outgoing configuration to depend on
		configuration: Option<String>,
	},
	/// `platform(...)` around another notation
	Platform(Box<DependencyNotation>),
	/// `files("a", "b")`
	Files(Vec<String>),
	/// `gradleApi()`
	GradleApi,
	/// `kotlin("stdlib")`, with optional version
	KotlinModule {
		/// Module name without the `kotlin-` prefix
		module: String,
		/// Module version
		version: Option<String>,
	},
}

impl DependencyNotation {
	/// External module coordinates.
	pub fn external<T: Into<String>>(coordinates: T) -> Self { Self::External(coordinates.into()) }
	/// Version catalog accessor.
	pub fn catalog<T: Into<String>>(accessor: T) -> Self { Self::Catalog(accessor.into()) }
	/// Another project's default configuration.
	pub fn project<T: Into<String>>(path: T) -> Self {
		Self::Project {
			path: path.into(),
			configuration: None,
		}
	}
	/// A specific outgoing configuration of another project.
	pub fn project_configuration<P: Into<String>, C: Into<String>>(path: P, configuration: C) -> Self {
		Self::Project {
			path: path.into(),
			configuration: Some(configuration.into()),
		}
	}
	/// A platform (BOM) of another notation.
	#[must_use]
	pub fn platform(notation: Self) -> Self { Self::Platform(Box::new(notation)) }
	/// Local files.
	pub fn files<I>(paths: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self::Files(paths.into_iter().map(Into::into).collect())
	}
	/// Kotlin module shorthand, `kotlin("stdlib")`, written as the full
	/// `org.jetbrains.kotlin:kotlin-stdlib` coordinates for Groovy.
	pub fn kotlin<T: Into<String>>(module: T) -> Self {
		Self::KotlinModule {
			module: module.into(),
			version: None,
		}
	}

	/// The notation as a node.
	pub fn to_element(&self) -> Element {
		match self {
			Self::External(coordinates) => Element::string(coordinates),
			Self::Catalog(accessor) => Element::raw(accessor),
			Self::Project {
				path,
				configuration: None,
			} => FunctionCall::new("project")
				.with_parameter(Element::string(path))
				.into(),
			Self::Project {
				path,
				configuration: Some(configuration),
			} => FunctionCall::new("project")
				.with_labeled("path", Element::string(path))
				.with_labeled("configuration", Element::string(configuration))
				.into(),
			Self::Platform(inner) => FunctionCall::new("platform")
				.with_parameter(inner.to_element())
				.into(),
			Self::Files(paths) => paths
				.iter()
				.fold(FunctionCall::new("files"), |call, path| {
					call.with_parameter(Element::string(path))
				})
				.into(),
			Self::GradleApi => FunctionCall::new("gradleApi").into(),
			Self::KotlinModule { module, version } => {
				let call = FunctionCall::new("kotlin").with_parameter(Element::string(module));
				let (coordinates, call) = match version {
					Some(version) => (
						format!("org.jetbrains.kotlin:kotlin-{module}:{version}"),
						call.with_parameter(Element::string(version)),
					),
					None => (format!("org.jetbrains.kotlin:kotlin-{module}"), call),
				};
				// `kotlin(..)` only exists in the kotlin dsl
				LanguageSpecific::new(Element::string(coordinates), call).into()
			}
		}
	}
}

/// An `exclude(group, module)` rule on a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exclusion {
	group: Option<String>,
	module: Option<String>,
}

impl Exclusion {
	/// Create an exclusion.
	/// # Errors
	/// If both `group` and `module` are missing.
	pub fn new(group: Option<String>, module: Option<String>) -> Result<Self, DslError> {
		if group.is_none() && module.is_none() {
			return Err(DslError::EmptyExclusion);
		}
		Ok(Self { group, module })
	}
	/// Exclude a whole group.
	pub fn group<T: Into<String>>(group: T) -> Self {
		Self {
			group: Some(group.into()),
			module: None,
		}
	}
	/// Exclude a module from any group.
	pub fn module<T: Into<String>>(module: T) -> Self {
		Self {
			group: None,
			module: Some(module.into()),
		}
	}
	/// Exclude one module of one group.
	pub fn both<G: Into<String>, M: Into<String>>(group: G, module: M) -> Self {
		Self {
			group: Some(group.into()),
			module: Some(module.into()),
		}
	}
	/// Excluded group.
	pub fn group_name(&self) -> Option<&str> { self.group.as_deref() }
	/// Excluded module.
	pub fn module_name(&self) -> Option<&str> { self.module.as_deref() }

	/// The `exclude` call.
	pub fn to_element(&self) -> Element {
		let mut call = FunctionCall::new("exclude")
			.with_label_support(LabelSupport::Both)
			.with_infix_support(InfixSupport::Groovy);
		if let Some(group) = &self.group {
			call = call.with_labeled("group", Element::string(group));
		}
		if let Some(module) = &self.module {
			let value = Element::string(module);
			// a lone positional argument would be taken as the group
			let parameter = if self.group.is_some() {
				Parameter::labeled("module", value)
			} else {
				Parameter::always_labeled("module", value)
			};
			call = call.with_parameter(parameter);
		}
		call.into()
	}
}

/// One `configuration(notation) { exclude(...) }` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyDeclaration {
	configuration: String,
	notation: DependencyNotation,
	exclusions: Vec<Exclusion>,
}

impl DependencyDeclaration {
	/// Create a declaration without exclusions.
	pub fn new<C: Into<String>>(configuration: C, notation: DependencyNotation) -> Self {
		Self {
			configuration: configuration.into(),
			notation,
			exclusions: Vec::new(),
		}
	}
	/// Add an exclusion rule.
	#[must_use]
	pub fn with_exclusion(mut self, exclusion: Exclusion) -> Self {
		self.exclusions.push(exclusion);
		self
	}
	/// Configuration name, such as `implementation`.
	pub fn configuration(&self) -> &str { &self.configuration }
	/// Dependency target.
	pub const fn notation(&self) -> &DependencyNotation { &self.notation }
	/// Exclusion rules, in order.
	pub fn exclusions(&self) -> &[Exclusion] { &self.exclusions }

	/// The declaration as a node.
	pub fn to_element(&self) -> Element {
		let call = FunctionCall::new(self.configuration.as_str())
			.with_infix_support(InfixSupport::Groovy)
			.with_parameter(self.notation.to_element());
		if self.exclusions.is_empty() {
			call.into()
		} else {
			call.with_lambda(LambdaBlock::new(
				self.exclusions.iter().map(Exclusion::to_element).collect(),
			))
			.into()
		}
	}
}

impl From<DependencyDeclaration> for Element {
	fn from(value: DependencyDeclaration) -> Self { value.to_element() }
}

container!(
	/// Body of a `dependencies { }` block.
	DependenciesBlock
);

macro_rules! configurations {
	($($(#[$meta:meta])* $fn:ident => $name:literal,)*) => {
		$(
			$(#[$meta])*
			fn $fn(&mut self, notation: DependencyNotation) -> &mut Self
			where
				Self: Sized,
			{
				self.add_dependency($name, notation, [])
			}
		)*
	};
}

/// Dependency declarations, implemented by [`DependenciesBlock`].
pub trait DependencyDeclarations: DslContainer {
	/// Declare a dependency in any configuration.
	fn add_dependency<C, I>(&mut self, configuration: C, notation: DependencyNotation, exclusions: I) -> &mut Self
	where
		C: Into<String>,
		I: IntoIterator<Item = Exclusion>,
		Self: Sized,
	{
		let declaration = exclusions
			.into_iter()
			.fold(DependencyDeclaration::new(configuration, notation), DependencyDeclaration::with_exclusion);
		self.add_element(declaration)
	}
	configurations! {
		/// `api(...)`
		api => "api",
		/// `implementation(...)`
		implementation => "implementation",
		/// `compileOnly(...)`
		compile_only => "compileOnly",
		/// `runtimeOnly(...)`
		runtime_only => "runtimeOnly",
		/// `testImplementation(...)`
		test_implementation => "testImplementation",
		/// `testCompileOnly(...)`
		test_compile_only => "testCompileOnly",
		/// `testRuntimeOnly(...)`
		test_runtime_only => "testRuntimeOnly",
		/// `classpath(...)`, for `buildscript` blocks
		classpath => "classpath",
		/// `kapt(...)`
		kapt => "kapt",
		/// `ksp(...)`
		ksp => "ksp",
	}
}
impl DependencyDeclarations for DependenciesBlock {}

/// Containers that can hold a `dependencies { }` block.
pub trait HasDependencies: DslContainer {
	/// Append `dependencies { ... }`.
	fn dependencies<F: FnOnce(&mut DependenciesBlock)>(&mut self, build: F) -> &mut Self
	where
		Self: Sized,
	{
		self.add_element(nested::<DependenciesBlock, _, _>("dependencies", build))
	}
}
