// SPDX-License-Identifier: MIT OR Apache-2.0
//! Build-script text generation for the Groovy and Kotlin gradle DSLs.
//!
//! Meant for integration tests of gradle plugins: describe a settings or
//! build script once as a tree, then render it for either dialect and write
//! it into a test project.
//!
//! The pieces, bottom-up:
//! - [`DslLanguage`] is the dialect policy (quotes, labels, infix calls)
//! - [`Element`] is the node type, rendered through [`Render`]
//! - [`DslContainer`]s ([`BuildFile`], [`SettingsFile`], and the blocks inside
//!   them) collect nodes with builder methods
//! - [`GradleProject`] writes the rendered scripts into a directory
//!
//! ```
//! # use kase_gradle_dsl::*;
//! let mut build = BuildFile::default();
//! build
//! 	.plugins(|plugins| {
//! 		plugins.plugin(PluginApplication::id("com.acme.anvil").with_version("1.0.0"));
//! 	})
//! 	.dependencies(|dependencies| {
//! 		dependencies.implementation(DependencyNotation::external("com.acme:rocket:1.0.0"));
//! 	});
//! assert_eq!(
//! 	build.render(&DslLanguage::groovy()),
//! 	"plugins {
//!     id('com.acme.anvil') version '1.0.0'
//! }
//! dependencies {
//!     implementation 'com.acme:rocket:1.0.0'
//! }"
//! );
//! assert_eq!(
//! 	build.render(&DslLanguage::kotlin()),
//! 	"plugins {
//!     id(\"com.acme.anvil\") version \"1.0.0\"
//! }
//! dependencies {
//!     implementation(\"com.acme:rocket:1.0.0\")
//! }"
//! );
//! ```
//!
//! Rendering is pure: the same tree and language always give the same text,
//! and nothing is shared between trees, so build a fresh tree per test.

extern crate alloc;

use std::io;
use std::path::PathBuf;

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

pub mod build_file;
pub mod container;
pub mod dependencies;
pub mod element;
pub mod language;
pub mod plugin;
pub mod project;
pub mod repositories;
pub mod settings;

#[cfg(test)]
mod tests;

pub use build_file::{BuildFile, BuildscriptBlock};
pub use container::{Block, DslContainer};
pub use dependencies::{
	DependenciesBlock, DependencyDeclaration, DependencyDeclarations, DependencyNotation, Exclusion,
	HasDependencies,
};
pub use element::{
	Assignment, AssignmentKind, Element, FunctionCall, LambdaBlock, LanguageSpecific, Parameter,
	ParameterList, Reference, Render, SetterCall, StringLiteral,
};
pub use language::{
	Dialect, DialectSupport, DslLanguage, InfixSupport, LabelSupport, PropertyAccessSupport,
};
pub use plugin::{HasPlugins, PluginApplication, PluginKind, PluginsBlock};
pub use project::GradleProject;
pub use repositories::{ContentFilterBlock, HasRepositories, RepositoriesBlock, Repository};
pub use settings::{
	DependencyResolutionManagementBlock, PluginManagementBlock, RepositoriesMode, SettingsFile,
	VersionCatalogBlock, VersionCatalogsBlock,
};

/// Error building or writing scripts
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DslError {
	#[error("Exclusion needs a group, a module, or both")]
	#[doc = "Exclusion needs a group, a module, or both"]
	EmptyExclusion,
	#[error("Kotlin plugin shorthand takes a simple name, got {0:?}")]
	#[doc = "Kotlin plugin shorthand takes a simple name, got a qualified id"]
	QualifiedKotlinPlugin(String),
	#[error("No subproject {path:?}, available: {available:?}")]
	#[doc = "No subproject with that path, lists the ones that exist"]
	UnknownSubproject {
		/// Requested path
		path: String,
		/// Every known subproject path
		available: Vec<String>,
	},
	#[error("Subproject {0:?} already exists")]
	#[doc = "Subproject already exists"]
	DuplicateSubproject(String),
	#[error("Failed to write {}", path.display())]
	#[doc = "Failed to write a file"]
	Io {
		/// File or directory being written
		path: PathBuf,
		/// Underlying error
		#[source]
		source: io::Error,
	},
}
