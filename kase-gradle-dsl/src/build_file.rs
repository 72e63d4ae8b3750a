// SPDX-License-Identifier: MIT OR Apache-2.0
//! Project build scripts.

use alloc::string::String;

use crate::container::{Block, DslContainer, container, nested};
use crate::dependencies::HasDependencies;
use crate::element::Element;
use crate::plugin::HasPlugins;
use crate::repositories::HasRepositories;

container!(
	/// A whole `build.gradle(.kts)` file.
	BuildFile
);

container!(
	/// Body of a `buildscript { }` block.
	BuildscriptBlock
);

impl BuildFile {
	/// Append `buildscript { ... }`.
	pub fn buildscript<F: FnOnce(&mut BuildscriptBlock)>(&mut self, build: F) -> &mut Self {
		self.add_element(nested::<BuildscriptBlock, _, _>("buildscript", build))
	}
	/// `group = "group"`
	pub fn group<T: Into<String>>(&mut self, group: T) -> &mut Self {
		self.assign("group", Element::string(group))
	}
	/// `version = "version"`
	pub fn version<T: Into<String>>(&mut self, version: T) -> &mut Self {
		self.assign("version", Element::string(version))
	}
}
impl HasPlugins for BuildFile {}
impl HasRepositories for BuildFile {}
impl HasDependencies for BuildFile {}

impl HasRepositories for BuildscriptBlock {}
impl HasDependencies for BuildscriptBlock {}

impl HasRepositories for Block {}
impl HasDependencies for Block {}
