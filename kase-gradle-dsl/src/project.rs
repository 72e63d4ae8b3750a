// SPDX-License-Identifier: MIT OR Apache-2.0
//! Writing generated scripts into a project directory.
//!
//! You probably want to start at [`GradleProject`].

use std::fs;
use std::path::{Path, PathBuf};

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::DslError;
use crate::build_file::BuildFile;
use crate::container::DslContainer;
use crate::language::DslLanguage;
use crate::settings::SettingsFile;

#[cfg(test)]
mod tests;

/// A gradle project's files, plus its subprojects.
///
/// Scripts are kept as trees until [`write`](Self::write) renders them with
/// one language, so the same project can be written for both dialects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleProject {
	path: String,
	settings: Option<SettingsFile>,
	build_file: Option<BuildFile>,
	files: Vec<(PathBuf, String)>,
	subprojects: Vec<GradleProject>,
}

impl Default for GradleProject {
	fn default() -> Self { Self::root() }
}

// `lib:core` and `:lib:core` both mean the same project
fn normalize_path(path: &str) -> String {
	if path.starts_with(':') {
		String::from(path)
	} else {
		format!(":{path}")
	}
}

fn write_file(path: &Path, content: &str) -> Result<(), DslError> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).map_err(|source| DslError::Io {
			path: parent.to_path_buf(),
			source,
		})?;
	}
	fs::write(path, content).map_err(|source| DslError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	log::debug!("wrote {} bytes to {}", content.len(), path.display());
	Ok(())
}

impl GradleProject {
	/// The root project, `:`.
	pub fn root() -> Self { Self::with_path(String::from(":")) }
	const fn with_path(path: String) -> Self {
		Self {
			path,
			settings: None,
			build_file: None,
			files: Vec::new(),
			subprojects: Vec::new(),
		}
	}
	/// Gradle path, such as `:` or `:lib:core`.
	pub fn path(&self) -> &str { &self.path }
	/// Directory relative to the root project, `lib/core` for `:lib:core`.
	pub fn directory(&self) -> PathBuf {
		self.path.split(':').filter(|part| !part.is_empty()).collect()
	}
	/// The settings script, if any.
	pub const fn settings_file(&self) -> Option<&SettingsFile> { self.settings.as_ref() }
	/// The build script, if any.
	pub const fn build_script(&self) -> Option<&BuildFile> { self.build_file.as_ref() }

	/// Add to the settings script, creating it if needed.
	pub fn settings<F: FnOnce(&mut SettingsFile)>(&mut self, build: F) -> &mut Self {
		build(self.settings.get_or_insert_with(SettingsFile::default));
		self
	}
	/// Add to the build script, creating it if needed.
	pub fn build_file<F: FnOnce(&mut BuildFile)>(&mut self, build: F) -> &mut Self {
		build(self.build_file.get_or_insert_with(BuildFile::default));
		self
	}
	/// Add a file with fixed content, relative to this project's directory.
	pub fn add_file<P: Into<PathBuf>, T: Into<String>>(&mut self, path: P, content: T) -> &mut Self {
		self.files.push((path.into(), content.into()));
		self
	}
	/// Add a subproject beneath this one.
	/// # Errors
	/// If a subproject with that path, or with the path of anything `build`
	/// adds beneath it, already exists in this tree.
	pub fn add_subproject<T: AsRef<str>, F: FnOnce(&mut Self)>(&mut self, path: T, build: F) -> Result<&mut Self, DslError> {
		let path = normalize_path(path.as_ref());
		if path == self.path || self.find(&path).is_some() {
			return Err(DslError::DuplicateSubproject(path));
		}
		let mut project = Self::with_path(path);
		build(&mut project);
		// `build` may have added its own subprojects
		if let Some(clash) = project
			.subproject_paths()
			.into_iter()
			.find(|nested| *nested == self.path || self.find(nested).is_some())
		{
			return Err(DslError::DuplicateSubproject(String::from(clash)));
		}
		if let Some(clash) = project.first_duplicate() {
			return Err(DslError::DuplicateSubproject(String::from(clash)));
		}
		self.subprojects.push(project);
		Ok(self)
	}
	/// Every subproject path beneath this one, depth first.
	pub fn subproject_paths(&self) -> Vec<&str> {
		let mut out = Vec::new();
		for child in &self.subprojects {
			out.push(child.path());
			out.extend(child.subproject_paths());
		}
		out
	}
	/// Look up a subproject by path.
	/// # Errors
	/// If there isn't one, listing the paths that do exist.
	pub fn subproject(&self, path: &str) -> Result<&Self, DslError> {
		let path = normalize_path(path);
		self.find(&path).ok_or_else(|| self.unknown(path))
	}
	/// Look up a subproject by path, mutably.
	/// # Errors
	/// If there isn't one, listing the paths that do exist.
	pub fn subproject_mut(&mut self, path: &str) -> Result<&mut Self, DslError> {
		let path = normalize_path(path);
		let Some(trail) = self.trail(&path) else {
			return Err(self.unknown(path));
		};
		Ok(trail
			.into_iter()
			.fold(self, |project, index| &mut project.subprojects[index]))
	}
	fn find(&self, path: &str) -> Option<&Self> {
		self.subprojects.iter().find_map(|child| {
			if child.path == path {
				Some(child)
			} else {
				child.find(path)
			}
		})
	}
	// child indices leading from here to `path`
	fn trail(&self, path: &str) -> Option<Vec<usize>> {
		self.subprojects
			.iter()
			.enumerate()
			.find_map(|(index, child)| {
				if child.path == path {
					Some(vec![index])
				} else {
					child.trail(path).map(|mut rest| {
						rest.insert(0, index);
						rest
					})
				}
			})
	}
	// first path in this tree (including itself) that appears twice
	fn first_duplicate(&self) -> Option<&str> {
		let mut seen = BTreeSet::new();
		seen.insert(self.path());
		self.subproject_paths()
			.into_iter()
			.find(|path| !seen.insert(*path))
	}
	fn unknown(&self, path: String) -> DslError {
		let available = self
			.subproject_paths()
			.into_iter()
			.map(String::from)
			.collect::<Vec<_>>();
		log::debug!("no subproject {path} under {}, available: {available:?}", self.path);
		DslError::UnknownSubproject { path, available }
	}

	/// Render every script with `language` and write the whole tree beneath
	/// `root`, returning the written paths in order.
	/// # Errors
	/// If two projects in the tree share a path, or creating a directory or
	/// writing a file fails.
	pub fn write(&self, root: &Path, language: &DslLanguage) -> Result<Vec<PathBuf>, DslError> {
		if let Some(clash) = self.first_duplicate() {
			return Err(DslError::DuplicateSubproject(String::from(clash)));
		}
		let mut written = Vec::new();
		self.write_into(root, language, &mut written)?;
		Ok(written)
	}
	fn write_into(&self, root: &Path, language: &DslLanguage, written: &mut Vec<PathBuf>) -> Result<(), DslError> {
		let directory = root.join(self.directory());
		let scripts = [
			(language.settings_file_name(), self.settings.as_ref().map(|file| file.render(language))),
			(language.build_file_name(), self.build_file.as_ref().map(|file| file.render(language))),
		];
		for (name, text) in scripts {
			if let Some(mut text) = text {
				text.push('\n');
				let path = directory.join(name);
				write_file(&path, &text)?;
				written.push(path);
			}
		}
		for (relative, content) in &self.files {
			let path = directory.join(relative);
			write_file(&path, content)?;
			written.push(path);
		}
		for child in &self.subprojects {
			child.write_into(root, language, written)?;
		}
		Ok(())
	}
}
