// SPDX-License-Identifier: MIT OR Apache-2.0
//! Settings scripts.
//!
//! You probably want to start at [`SettingsFile`].

use alloc::string::String;

use crate::container::{DslContainer, container, nested};
use crate::element::{Assignment, Element, FunctionCall};
use crate::language::InfixSupport;
use crate::plugin::HasPlugins;
use crate::repositories::HasRepositories;

container!(
	/// A whole `settings.gradle(.kts)` file.
	/// ```
	/// # use kase_gradle_dsl::{DslContainer, DslLanguage, HasRepositories, SettingsFile};
	/// let mut settings = SettingsFile::default();
	/// settings
	/// 	.plugin_management(|management| {
	/// 		management.repositories(|repositories| {
	/// 			repositories.gradle_plugin_portal();
	/// 		});
	/// 	})
	/// 	.root_project_name("anvil");
	/// assert_eq!(
	/// 	settings.render(&DslLanguage::kotlin()),
	/// 	"pluginManagement {\n    repositories {\n        gradlePluginPortal()\n    }\n}\nrootProject.name = \"anvil\"",
	/// );
	/// ```
	SettingsFile
);

container!(
	/// Body of a `pluginManagement { }` block.
	PluginManagementBlock
);

container!(
	/// Body of a `dependencyResolutionManagement { }` block.
	DependencyResolutionManagementBlock
);

container!(
	/// Body of a `versionCatalogs { }` block.
	VersionCatalogsBlock
);

container!(
	/// Body of one `create("name") { }` version catalog.
	VersionCatalogBlock
);

fn include_call(name: &str, path: &str) -> FunctionCall {
	FunctionCall::new(name)
		.with_infix_support(InfixSupport::Groovy)
		.with_parameter(Element::string(path))
}

impl SettingsFile {
	/// Append `pluginManagement { ... }`.
	pub fn plugin_management<F: FnOnce(&mut PluginManagementBlock)>(&mut self, build: F) -> &mut Self {
		self.add_element(nested::<PluginManagementBlock, _, _>("pluginManagement", build))
	}
	/// Append `dependencyResolutionManagement { ... }`.
	pub fn dependency_resolution_management<F: FnOnce(&mut DependencyResolutionManagementBlock)>(
		&mut self,
		build: F,
	) -> &mut Self {
		self.add_element(nested::<DependencyResolutionManagementBlock, _, _>(
			"dependencyResolutionManagement",
			build,
		))
	}
	/// `rootProject.name = "name"`
	pub fn root_project_name<T: Into<String>>(&mut self, name: T) -> &mut Self {
		self.add_element(Assignment::direct("rootProject.name", Element::string(name)))
	}
	/// `include(":path")`
	pub fn include<T: AsRef<str>>(&mut self, path: T) -> &mut Self {
		self.add_element(include_call("include", path.as_ref()))
	}
	/// `includeBuild("path")`
	pub fn include_build<T: AsRef<str>>(&mut self, path: T) -> &mut Self {
		self.add_element(include_call("includeBuild", path.as_ref()))
	}
}
impl HasPlugins for SettingsFile {}

impl PluginManagementBlock {
	/// `includeBuild("path")`
	pub fn include_build<T: AsRef<str>>(&mut self, path: T) -> &mut Self {
		self.add_element(include_call("includeBuild", path.as_ref()))
	}
}
impl HasRepositories for PluginManagementBlock {}
impl HasPlugins for PluginManagementBlock {}

/// Values of the `repositoriesMode` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoriesMode {
	/// Project repositories win
	PreferProject,
	/// Settings repositories win
	PreferSettings,
	/// Declaring project repositories fails the build
	FailOnProjectRepos,
}

impl RepositoriesMode {
	/// The enum constant's name.
	pub const fn constant(self) -> &'static str {
		match self {
			Self::PreferProject => "RepositoriesMode.PREFER_PROJECT",
			Self::PreferSettings => "RepositoriesMode.PREFER_SETTINGS",
			Self::FailOnProjectRepos => "RepositoriesMode.FAIL_ON_PROJECT_REPOS",
		}
	}
}

impl DependencyResolutionManagementBlock {
	/// `repositoriesMode.set(RepositoriesMode.MODE)`
	pub fn repositories_mode(&mut self, mode: RepositoriesMode) -> &mut Self {
		self.set_property("repositoriesMode", Element::raw(mode.constant()))
	}
	/// Append `versionCatalogs { ... }`.
	pub fn version_catalogs<F: FnOnce(&mut VersionCatalogsBlock)>(&mut self, build: F) -> &mut Self {
		self.add_element(nested::<VersionCatalogsBlock, _, _>("versionCatalogs", build))
	}
}
impl HasRepositories for DependencyResolutionManagementBlock {}

impl VersionCatalogsBlock {
	/// Append `create("name") { ... }`.
	pub fn create<T: Into<String>, F: FnOnce(&mut VersionCatalogBlock)>(&mut self, name: T, build: F) -> &mut Self {
		let mut catalog = VersionCatalogBlock::default();
		build(&mut catalog);
		self.add_element(
			FunctionCall::new("create")
				.with_parameter(Element::string(name))
				.with_lambda(catalog.into_lambda()),
		)
	}
}

impl VersionCatalogBlock {
	fn pair(name: &str, alias: &str, value: &str) -> FunctionCall {
		FunctionCall::new(name)
			.with_parameter(Element::string(alias))
			.with_parameter(Element::string(value))
	}
	/// `from(files("path"))`, usually a `.toml` file
	pub fn from_files<T: Into<String>>(&mut self, path: T) -> &mut Self {
		let files = FunctionCall::new("files").with_parameter(Element::string(path));
		self.add_element(FunctionCall::new("from").with_parameter(Element::from(files)))
	}
	/// `version("alias", "version")`
	pub fn version(&mut self, alias: &str, version: &str) -> &mut Self {
		self.add_element(Self::pair("version", alias, version))
	}
	/// `library("alias", "group:name:version")`
	pub fn library(&mut self, alias: &str, coordinates: &str) -> &mut Self {
		self.add_element(Self::pair("library", alias, coordinates))
	}
	/// `plugin("alias", "id").version("version")`
	pub fn plugin(&mut self, alias: &str, id: &str, version: &str) -> &mut Self {
		self.add_element(
			FunctionCall::new("version")
				.with_receiver(Self::pair("plugin", alias, id))
				.with_parameter(Element::string(version)),
		)
	}
}
