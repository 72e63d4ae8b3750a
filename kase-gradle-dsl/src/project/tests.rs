// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fs;
use std::path::PathBuf;

use alloc::string::ToString;
use alloc::vec;

use crate::DslError;
use crate::build_file::BuildFile;
use crate::container::DslContainer;
use crate::dependencies::{DependencyDeclarations, DependencyNotation, HasDependencies};
use crate::language::DslLanguage;
use crate::project::GradleProject;

fn sample() -> GradleProject {
	let mut project = GradleProject::root();
	project
		.settings(|settings| {
			settings.root_project_name("anvil").include(":lib");
		})
		.build_file(|build| {
			build.group("com.acme");
		})
		.add_file("gradle.properties", "org.gradle.caching=true\n");
	project
		.add_subproject(":lib", |lib| {
			lib.build_file(|build| {
				build.dependencies(|dependencies| {
					dependencies.api(DependencyNotation::external("com.acme:rocket:1.0.0"));
				});
			});
		})
		.unwrap()
		.add_subproject("app", |_| ())
		.unwrap();
	project
}

#[test]
fn subproject_lookup() {
	let project = sample();
	assert_eq!(project.subproject(":lib").unwrap().path(), ":lib", "absolute path");
	assert_eq!(project.subproject("app").unwrap().path(), ":app", "relative path");
	assert_eq!(project.subproject_paths(), vec![":lib", ":app"], "paths");
}

#[test]
fn subproject_miss_lists_candidates() {
	let project = sample();
	let err = project.subproject(":core").unwrap_err();
	let message = err.to_string();
	assert!(
		matches!(&err, DslError::UnknownSubproject { path, available } if path == ":core" && available == &[":lib", ":app"]),
		"got {err:?}"
	);
	assert!(message.contains(":lib") && message.contains(":app"), "message: {message}");
	let mut project = project;
	let mutable_err = project.subproject_mut("core").unwrap_err();
	assert!(
		matches!(&mutable_err, DslError::UnknownSubproject { available, .. } if available == &[":lib", ":app"]),
		"mutable lookup lists candidates too, got {mutable_err:?}"
	);
}

#[test]
fn duplicate_subprojects() {
	let mut project = sample();
	let err = project.add_subproject("lib", |_| ()).unwrap_err();
	assert!(matches!(&err, DslError::DuplicateSubproject(path) if path == ":lib"), "got {err:?}");
}

#[test]
fn duplicates_added_by_nested_builder() {
	let mut project = GradleProject::root();
	project.add_subproject(":b", |_| ()).unwrap();
	let err = project
		.add_subproject(":a", |a| {
			a.add_subproject(":b", |_| ()).unwrap();
		})
		.unwrap_err();
	assert!(matches!(&err, DslError::DuplicateSubproject(path) if path == ":b"), "got {err:?}");
	assert_eq!(project.subproject_paths(), vec![":b"], "nothing was added");
	project
		.add_subproject(":c", |c| {
			let nested = c.add_subproject(":c:x", |x| {
				x.add_subproject(":c", |_| ()).unwrap();
			});
			assert!(
				matches!(nested, Err(DslError::DuplicateSubproject(path)) if path == ":c"),
				"clash with the parent is caught"
			);
		})
		.unwrap();
	assert_eq!(project.subproject_paths(), vec![":b", ":c"], "only the parent was added");
}

#[test]
fn duplicates_block_writing() {
	let dir = tempfile::tempdir().unwrap();
	let mut project = GradleProject::root();
	project
		.add_subproject(":a", |_| ())
		.unwrap()
		.add_subproject(":b", |_| ())
		.unwrap();
	// a subproject handle only sees its own subtree
	project
		.subproject_mut(":a")
		.unwrap()
		.add_subproject(":b", |_| ())
		.unwrap();
	let err = project.write(dir.path(), &DslLanguage::kotlin()).unwrap_err();
	assert!(matches!(&err, DslError::DuplicateSubproject(path) if path == ":b"), "got {err:?}");
}

#[test]
fn nested_subprojects() {
	let mut project = GradleProject::root();
	project
		.add_subproject(":lib", |lib| {
			lib.add_subproject(":lib:core", |_| ()).unwrap();
		})
		.unwrap();
	let core = project.subproject(":lib:core").unwrap();
	assert_eq!(core.directory(), PathBuf::from("lib").join("core"), "directory");
	assert_eq!(project.directory(), PathBuf::new(), "root directory");
	assert_eq!(project.subproject_paths(), vec![":lib", ":lib:core"], "depth first");
	project
		.subproject_mut("lib:core")
		.unwrap()
		.build_file(|build| {
			build.version("1.0.0");
		});
	let build = project.subproject(":lib:core").unwrap().build_script().unwrap();
	assert_eq!(build.render(&DslLanguage::groovy()), "version = '1.0.0'", "modified");
}

#[test]
fn write_kotlin() {
	let dir = tempfile::tempdir().unwrap();
	let language = DslLanguage::kotlin();
	let project = sample();
	let written = project.write(dir.path(), &language).unwrap();
	let root = dir.path();
	assert_eq!(
		written,
		vec![
			root.join("settings.gradle.kts"),
			root.join("build.gradle.kts"),
			root.join("gradle.properties"),
			root.join("lib").join("build.gradle.kts"),
		],
		"written files"
	);
	assert_eq!(
		fs::read_to_string(root.join("settings.gradle.kts")).unwrap(),
		"rootProject.name = \"anvil\"\ninclude(\":lib\")\n",
		"settings"
	);
	assert_eq!(
		fs::read_to_string(root.join("lib/build.gradle.kts")).unwrap(),
		"dependencies {\n    api(\"com.acme:rocket:1.0.0\")\n}\n",
		"subproject build"
	);
	assert_eq!(
		fs::read_to_string(root.join("gradle.properties")).unwrap(),
		"org.gradle.caching=true\n",
		"extra files are verbatim"
	);
	assert!(!root.join("app").exists(), "projects without files write nothing");
}

#[test]
fn write_groovy() {
	let dir = tempfile::tempdir().unwrap();
	let project = sample();
	project.write(dir.path(), &DslLanguage::groovy()).unwrap();
	let build = fs::read_to_string(dir.path().join("build.gradle")).unwrap();
	let expected = BuildFile::default().group("com.acme").render(&DslLanguage::groovy()) + "\n";
	assert_eq!(build, expected, "root build");
	assert_eq!(
		fs::read_to_string(dir.path().join("settings.gradle")).unwrap(),
		"rootProject.name = 'anvil'\ninclude ':lib'\n",
		"settings"
	);
}

#[test]
fn write_failure_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let blocker = dir.path().join("blocker");
	fs::write(&blocker, "").unwrap();
	let mut project = GradleProject::root();
	project.add_file("nested/file.txt", "text");
	let err = project.write(&blocker, &DslLanguage::kotlin()).unwrap_err();
	assert!(matches!(&err, DslError::Io { path, .. } if path.starts_with(&blocker)), "got {err:?}");
}
