// SPDX-License-Identifier: MIT OR Apache-2.0
//! `plugins { }` entries.
//!
//! You probably want to start at [`PluginApplication`].

use alloc::format;
use alloc::string::String;

use crate::DslError;
use crate::container::{DslContainer, container, nested};
use crate::element::Render;
use crate::language::{Dialect, DslLanguage};


/// How a plugin is identified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PluginKind {
	/// `id("com.acme.anvil")`
	Id(String),
	/// `alias(libs.plugins.anvil)`, a version catalog accessor
	Alias(String),
	/// A precompiled script plugin from the build's own sources
	Precompiled(String),
	/// `kotlin("jvm")`, a simple name under `org.jetbrains.kotlin`
	Kotlin(String),
}

/// One plugin declaration, with optional version and apply flag.
///
/// Written as `head version "1.0" apply false` when the language uses infix
/// calls, and `head.version("1.0").apply(false)` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginApplication {
	kind: PluginKind,
	version: Option<String>,
	apply: bool,
}

impl PluginApplication {
	const fn from_kind(kind: PluginKind) -> Self {
		Self {
			kind,
			version: None,
			apply: true,
		}
	}
	/// Plugin by its fully qualified id.
	pub fn id<T: Into<String>>(id: T) -> Self { Self::from_kind(PluginKind::Id(id.into())) }
	/// Plugin by version catalog alias, written unquoted.
	pub fn alias<T: Into<String>>(accessor: T) -> Self {
		Self::from_kind(PluginKind::Alias(accessor.into()))
	}
	/// Precompiled script plugin by its script name.
	pub fn precompiled<T: Into<String>>(name: T) -> Self {
		Self::from_kind(PluginKind::Precompiled(name.into()))
	}
	/// Kotlin plugin by simple name, e.g. `jvm` or `multiplatform`.
	/// # Errors
	/// If the name contains a `.`, use [`id`](Self::id) for qualified ids.
	pub fn kotlin<T: Into<String>>(name: T) -> Result<Self, DslError> {
		let name = name.into();
		if name.contains('.') {
			return Err(DslError::QualifiedKotlinPlugin(name));
		}
		Ok(Self::from_kind(PluginKind::Kotlin(name)))
	}
	/// Request a specific version.
	#[must_use]
	pub fn with_version<T: Into<String>>(mut self, version: T) -> Self {
		self.version = Some(version.into());
		self
	}
	/// Set whether the plugin gets applied, default is `true`.
	#[must_use]
	pub const fn with_apply(mut self, apply: bool) -> Self {
		self.apply = apply;
		self
	}
	/// How the plugin is identified.
	pub const fn kind(&self) -> &PluginKind { &self.kind }
	/// Requested version.
	pub fn version(&self) -> Option<&str> { self.version.as_deref() }
	/// Whether the plugin gets applied.
	pub const fn apply(&self) -> bool { self.apply }

	fn head(&self, language: &DslLanguage) -> String {
		match (&self.kind, language.dialect()) {
			(PluginKind::Id(id), _) | (PluginKind::Precompiled(id), Dialect::Groovy) => {
				format!("id({})", language.quote(id, None))
			}
			(PluginKind::Alias(accessor), _) => format!("alias({accessor})"),
			(PluginKind::Precompiled(name), Dialect::Kotlin) => {
				if name.contains('-') {
					format!("`{name}`")
				} else {
					name.clone()
				}
			}
			(PluginKind::Kotlin(name), Dialect::Groovy) => {
				format!("id({})", language.quote(&format!("org.jetbrains.kotlin.{name}"), None))
			}
			(PluginKind::Kotlin(name), Dialect::Kotlin) => {
				format!("kotlin({})", language.quote(name, None))
			}
		}
	}
}

impl Render for PluginApplication {
	fn render(&self, language: &DslLanguage) -> String {
		let infix = language.use_infix();
		let version = match &self.version {
			Some(version) if infix => format!(" version {}", language.quote(version, None)),
			Some(version) => format!(".version({})", language.quote(version, None)),
			None => String::new(),
		};
		let apply = match (self.apply, infix) {
			(true, _) => "",
			(false, true) => " apply false",
			(false, false) => ".apply(false)",
		};
		format!("{}{version}{apply}", self.head(language))
	}
}

container!(
	/// Body of a `plugins { }` block.
	PluginsBlock
);

impl PluginsBlock {
	/// Append any plugin entry.
	pub fn plugin(&mut self, plugin: PluginApplication) -> &mut Self { self.add_element(plugin) }
	/// `id("...")`
	pub fn id<T: Into<String>>(&mut self, id: T) -> &mut Self { self.plugin(PluginApplication::id(id)) }
	/// `alias(...)`
	pub fn alias<T: Into<String>>(&mut self, accessor: T) -> &mut Self {
		self.plugin(PluginApplication::alias(accessor))
	}
	/// A precompiled script plugin.
	pub fn precompiled<T: Into<String>>(&mut self, name: T) -> &mut Self {
		self.plugin(PluginApplication::precompiled(name))
	}
	/// `kotlin("...")`
	/// # Errors
	/// If the name is qualified, see [`PluginApplication::kotlin`].
	pub fn kotlin<T: Into<String>>(&mut self, name: T) -> Result<&mut Self, DslError> {
		Ok(self.plugin(PluginApplication::kotlin(name)?))
	}
}

/// Containers that can hold a `plugins { }` block.
pub trait HasPlugins: DslContainer {
	/// Append `plugins { ... }`.
	fn plugins<F: FnOnce(&mut PluginsBlock)>(&mut self, build: F) -> &mut Self
	where
		Self: Sized,
	{
		self.add_element(nested::<PluginsBlock, _, _>("plugins", build))
	}
}
