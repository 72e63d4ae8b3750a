// SPDX-License-Identifier: MIT OR Apache-2.0
use alloc::string::String;

use crate::{
	Block, BuildFile, DependenciesBlock, DependencyDeclarations, DependencyNotation, DslContainer,
	DslError, DslLanguage, Element, Exclusion, HasDependencies, HasPlugins, HasRepositories,
	PluginApplication, RepositoriesBlock, RepositoriesMode, Repository, SettingsFile,
};

fn check<C: DslContainer>(container: &C, groovy: &str, kotlin: &str) {
	assert_eq!(container.render(&DslLanguage::groovy()), groovy, "wrong result (groovy)");
	assert_eq!(container.render(&DslLanguage::kotlin()), kotlin, "wrong result (kotlin)");
}

fn dependencies<F: FnOnce(&mut DependenciesBlock)>(build: F) -> DependenciesBlock {
	let mut block = DependenciesBlock::default();
	build(&mut block);
	block
}

mod language {
	use crate::{Dialect, DslLanguage};

	#[test]
	fn quoting() {
		let groovy = DslLanguage::groovy();
		let kotlin = DslLanguage::kotlin();
		for text in ["", "a", "com.acme:rocket:1.0.0", "it's", "say \"hi\"", "C:\\path"] {
			for language in [&groovy, &kotlin] {
				let quoted = language.quote(text, None);
				let quote = language.quote_char();
				assert!(
					quoted.starts_with(quote) && quoted.ends_with(quote) && quoted.len() >= 2,
					"{language}: {quoted}"
				);
			}
		}
		assert_eq!(groovy.quote("a", None), "'a'", "groovy default");
		assert_eq!(groovy.quote("a", Some(true)), "\"a\"", "groovy override");
		assert_eq!(kotlin.quote("a", None), "\"a\"", "kotlin default");
		assert_eq!(kotlin.quote("say \"hi\"", None), "\"say \\\"hi\\\"\"", "escaped quotes");
		assert_eq!(kotlin.quote("$version", None), "\"\\$version\"", "kotlin templates");
		assert_eq!(groovy.quote("${version}", Some(true)), "\"\\${version}\"", "groovy templates");
		assert_eq!(groovy.quote("${version}", None), "'${version}'", "single quotes don't interpolate");
		let double = DslLanguage::groovy().with_double_quotes(true);
		assert_eq!(double.quote_char(), '"', "groovy double quotes");
		let single = DslLanguage::kotlin().with_double_quotes(false);
		assert_eq!(single.quote_char(), '"', "kotlin keeps double quotes");
	}

	#[test]
	fn parens() {
		let groovy = DslLanguage::groovy();
		assert_eq!(groovy.parens("", None), "()", "blank");
		assert_eq!(groovy.parens("  ", Some(true)), "(  )", "blank with override");
		assert_eq!(groovy.parens("x", None), " x", "infix default");
		assert_eq!(groovy.parens("x", Some(false)), "(x)", "override off");
		let no_infix = DslLanguage::kotlin().with_infix(false);
		assert_eq!(no_infix.parens("x", None), "(x)", "global infix off");
		assert_eq!(no_infix.parens("x", Some(true)), " x", "override on");
		let forced = DslLanguage::kotlin().with_always_parens(true);
		assert_eq!(forced.parens("x", Some(true)), "(x)", "forced parens");
		assert!(!forced.use_infix(), "forced parens disables infix");
	}

	#[test]
	fn defaults() {
		let groovy = DslLanguage::new(Dialect::Groovy);
		assert_eq!(groovy, DslLanguage::groovy(), "groovy constructor");
		assert!(groovy.is_groovy() && groovy.use_infix() && groovy.use_labels(), "groovy flags");
		assert_eq!(groovy.label_delimiter(), ": ", "groovy labels");
		let kotlin = DslLanguage::new(Dialect::Kotlin);
		assert!(kotlin.is_kotlin() && kotlin.use_infix() && !kotlin.use_labels(), "kotlin flags");
		assert_eq!(kotlin.label_delimiter(), " = ", "kotlin labels");
		assert_eq!(groovy.build_file_name(), "build.gradle", "groovy build");
		assert_eq!(groovy.settings_file_name(), "settings.gradle", "groovy settings");
		assert_eq!(kotlin.build_file_name(), "build.gradle.kts", "kotlin build");
		assert_eq!(kotlin.settings_file_name(), "settings.gradle.kts", "kotlin settings");
	}
}

#[test]
fn external_dependency_exclusions() {
	let block = dependencies(|block| {
		block.add_dependency(
			"implementation",
			DependencyNotation::external("com.acme:rocket:1.0.0"),
			[Exclusion::both("com.acme", "fuel")],
		);
	});
	check(
		&block,
		"implementation('com.acme:rocket:1.0.0') {\n    exclude group: 'com.acme', module: 'fuel'\n}",
		"implementation(\"com.acme:rocket:1.0.0\") {\n    exclude(\"com.acme\", \"fuel\")\n}",
	);
	assert_eq!(
		block.render(&DslLanguage::kotlin().with_labels(true)),
		"implementation(\"com.acme:rocket:1.0.0\") {\n    exclude(group = \"com.acme\", module = \"fuel\")\n}",
		"kotlin labels"
	);
	assert_eq!(
		block.render(&DslLanguage::groovy().with_labels(false)),
		"implementation('com.acme:rocket:1.0.0') {\n    exclude 'com.acme', 'fuel'\n}",
		"groovy without labels"
	);
}

#[test]
fn exclusions_need_group_or_module() {
	assert!(
		matches!(Exclusion::new(None, None), Err(DslError::EmptyExclusion)),
		"empty exclusion"
	);
	let group = Exclusion::new(Some(String::from("com.acme")), None).unwrap();
	assert_eq!(group.group_name(), Some("com.acme"), "group");
	assert_eq!(group.module_name(), None, "module");
	let block = dependencies(|block| {
		block.add_dependency(
			"api",
			DependencyNotation::external("com.acme:rocket:1.0.0"),
			[Exclusion::module("fuel")],
		);
	});
	check(
		&block,
		"api('com.acme:rocket:1.0.0') {\n    exclude module: 'fuel'\n}",
		"api(\"com.acme:rocket:1.0.0\") {\n    exclude(module = \"fuel\")\n}",
	);
	assert_eq!(
		block.render(&DslLanguage::groovy().with_labels(false)),
		"api('com.acme:rocket:1.0.0') {\n    exclude module: 'fuel'\n}",
		"lone module keeps its label in groovy"
	);
	assert_eq!(
		block.render(&DslLanguage::kotlin().with_labels(true)),
		"api(\"com.acme:rocket:1.0.0\") {\n    exclude(module = \"fuel\")\n}",
		"lone module with kotlin labels"
	);
	let by_group = dependencies(|declarations| {
		declarations.add_dependency(
			"api",
			DependencyNotation::external("com.acme:rocket:1.0.0"),
			[Exclusion::group("com.acme")],
		);
	});
	assert_eq!(
		by_group.render(&DslLanguage::kotlin()),
		"api(\"com.acme:rocket:1.0.0\") {\n    exclude(\"com.acme\")\n}",
		"lone group stays positional"
	);
}

#[test]
fn project_dependencies() {
	let block = dependencies(|block| {
		block
			.implementation(DependencyNotation::project(":lib"))
			.implementation(DependencyNotation::project_configuration(":lib", "shadow"));
	});
	check(
		&block,
		"implementation project(':lib')\nimplementation project(path: ':lib', configuration: 'shadow')",
		"implementation(project(\":lib\"))\nimplementation(project(\":lib\", \"shadow\"))",
	);
	assert_eq!(
		block.render(&DslLanguage::kotlin().with_labels(true)),
		"implementation(project(\":lib\"))\nimplementation(project(path = \":lib\", configuration = \"shadow\"))",
		"kotlin labels"
	);
	assert_eq!(
		block.render(&DslLanguage::groovy().with_labels(false)),
		"implementation project(':lib')\nimplementation project(':lib', 'shadow')",
		"groovy without labels"
	);
}

#[test]
fn other_notations() {
	let block = dependencies(|block| {
		block
			.api(DependencyNotation::platform(DependencyNotation::external("com.acme:bom:1.0.0")))
			.implementation(DependencyNotation::catalog("libs.acme.rocket"))
			.compile_only(DependencyNotation::files(["a.jar", "b.jar"]))
			.implementation(DependencyNotation::GradleApi)
			.runtime_only(DependencyNotation::kotlin("stdlib"))
			.test_implementation(DependencyNotation::KotlinModule {
				module: String::from("test"),
				version: Some(String::from("2.0.0")),
			});
	});
	check(
		&block,
		"api platform('com.acme:bom:1.0.0')
implementation libs.acme.rocket
compileOnly files('a.jar', 'b.jar')
implementation gradleApi()
runtimeOnly 'org.jetbrains.kotlin:kotlin-stdlib'
testImplementation 'org.jetbrains.kotlin:kotlin-test:2.0.0'",
		"api(platform(\"com.acme:bom:1.0.0\"))
implementation(libs.acme.rocket)
compileOnly(files(\"a.jar\", \"b.jar\"))
implementation(gradleApi())
runtimeOnly(kotlin(\"stdlib\"))
testImplementation(kotlin(\"test\", \"2.0.0\"))",
	);
}

#[test]
fn configuration_helpers() {
	let coordinates = || DependencyNotation::external("g:a:1");
	let block = dependencies(|block| {
		block
			.test_compile_only(coordinates())
			.test_runtime_only(coordinates())
			.classpath(coordinates())
			.kapt(coordinates())
			.ksp(coordinates());
	});
	assert_eq!(
		block.render(&DslLanguage::kotlin()),
		"testCompileOnly(\"g:a:1\")\ntestRuntimeOnly(\"g:a:1\")\nclasspath(\"g:a:1\")\nkapt(\"g:a:1\")\nksp(\"g:a:1\")",
		"configuration names"
	);
}

#[test]
fn plugin_management_repositories() {
	let mut settings = SettingsFile::default();
	settings.plugin_management(|management| {
		management.repositories(|repositories| {
			repositories.maven_central().google().gradle_plugin_portal();
		});
	});
	let expected = "pluginManagement {
    repositories {
        mavenCentral()
        google()
        gradlePluginPortal()
    }
}";
	check(&settings, expected, expected);
}

#[test]
fn maven_repositories() {
	let mut block = RepositoriesBlock::default();
	block.maven("https://repo.acme.com").maven_local();
	check(
		&block,
		"maven {\n    url 'https://repo.acme.com'\n}\nmavenLocal()",
		"maven(\"https://repo.acme.com\")\nmavenLocal()",
	);
	assert_eq!(
		block.render(&DslLanguage::groovy().with_infix(false)),
		"maven {\n    url = 'https://repo.acme.com'\n}\nmavenLocal()",
		"groovy without infix"
	);
	let mut listed = RepositoriesBlock::default();
	listed.add_all_elements([
		Repository::MavenCentral,
		Repository::Maven(String::from("https://repo.acme.com")),
	]);
	check(
		&listed,
		"mavenCentral()\nmaven {\n    url 'https://repo.acme.com'\n}",
		"mavenCentral()\nmaven(\"https://repo.acme.com\")",
	);
}

#[test]
fn repository_content_filters() {
	let mut block = RepositoriesBlock::default();
	block
		.maven_with_content("https://repo.acme.com", |content| {
			content
				.include_group("com.acme")
				.include_module("com.acme", "rocket");
		})
		.maven_central_with_content(|content| {
			content
				.include_group_by_regex("com\\.acme.*")
				.exclude_group("com.acme")
				.exclude_module("com.acme", "fuel");
		});
	check(
		&block,
		"maven {
    url 'https://repo.acme.com'
    content {
        includeGroup 'com.acme'
        includeModule 'com.acme', 'rocket'
    }
}
mavenCentral {
    content {
        includeGroupByRegex 'com\\\\.acme.*'
        excludeGroup 'com.acme'
        excludeModule 'com.acme', 'fuel'
    }
}",
		"maven(\"https://repo.acme.com\") {
    content {
        includeGroup(\"com.acme\")
        includeModule(\"com.acme\", \"rocket\")
    }
}
mavenCentral {
    content {
        includeGroupByRegex(\"com\\\\.acme.*\")
        excludeGroup(\"com.acme\")
        excludeModule(\"com.acme\", \"fuel\")
    }
}",
	);
}

#[test]
fn dependency_resolution_management() {
	let mut settings = SettingsFile::default();
	settings.dependency_resolution_management(|management| {
		management
			.repositories_mode(RepositoriesMode::FailOnProjectRepos)
			.repositories(|repositories| {
				repositories.maven_central();
			})
			.version_catalogs(|catalogs| {
				catalogs.create("libs", |libs| {
					libs.from_files("gradle/libs.versions.toml")
						.version("kotlin", "2.0.0")
						.library("rocket", "com.acme:rocket:1.0.0")
						.plugin("anvil", "com.acme.anvil", "1.0.0");
				});
			});
	});
	check(
		&settings,
		"dependencyResolutionManagement {
    repositoriesMode.set(RepositoriesMode.FAIL_ON_PROJECT_REPOS)
    repositories {
        mavenCentral()
    }
    versionCatalogs {
        create('libs') {
            from(files('gradle/libs.versions.toml'))
            version('kotlin', '2.0.0')
            library('rocket', 'com.acme:rocket:1.0.0')
            plugin('anvil', 'com.acme.anvil').version('1.0.0')
        }
    }
}",
		"dependencyResolutionManagement {
    repositoriesMode.set(RepositoriesMode.FAIL_ON_PROJECT_REPOS)
    repositories {
        mavenCentral()
    }
    versionCatalogs {
        create(\"libs\") {
            from(files(\"gradle/libs.versions.toml\"))
            version(\"kotlin\", \"2.0.0\")
            library(\"rocket\", \"com.acme:rocket:1.0.0\")
            plugin(\"anvil\", \"com.acme.anvil\").version(\"1.0.0\")
        }
    }
}",
	);
}

#[test]
fn settings_file() {
	let mut settings = SettingsFile::default();
	settings
		.plugin_management(|management| {
			management.include_build("build-logic").plugins(|plugins| {
				plugins.plugin(PluginApplication::id("com.acme.anvil").with_version("1.0.0"));
			});
		})
		.plugins(|plugins| {
			plugins.id("com.gradle.develocity");
		})
		.add_blank_line()
		.root_project_name("anvil")
		.include(":lib")
		.include_build("../rocket");
	check(
		&settings,
		"pluginManagement {
    includeBuild 'build-logic'
    plugins {
        id('com.acme.anvil') version '1.0.0'
    }
}
plugins {
    id('com.gradle.develocity')
}

rootProject.name = 'anvil'
include ':lib'
includeBuild '../rocket'",
		"pluginManagement {
    includeBuild(\"build-logic\")
    plugins {
        id(\"com.acme.anvil\") version \"1.0.0\"
    }
}
plugins {
    id(\"com.gradle.develocity\")
}

rootProject.name = \"anvil\"
include(\":lib\")
includeBuild(\"../rocket\")",
	);
}

#[test]
fn build_file() {
	let mut build = BuildFile::default();
	build
		.buildscript(|buildscript| {
			buildscript
				.repositories(|repositories| {
					repositories.maven_central();
				})
				.dependencies(|dependencies| {
					dependencies.classpath(DependencyNotation::external("com.acme:anvil-gradle:1.0.0"));
				});
		})
		.plugins(|plugins| {
			plugins.id("java-library");
		})
		.group("com.acme")
		.version("1.0.0")
		.block("java", |java| {
			java.add_element(Element::raw("withSourcesJar()"));
		})
		.block("subprojects", |subprojects| {
			subprojects.repositories(|repositories| {
				repositories.google();
			});
		});
	check(
		&build,
		"buildscript {
    repositories {
        mavenCentral()
    }
    dependencies {
        classpath 'com.acme:anvil-gradle:1.0.0'
    }
}
plugins {
    id('java-library')
}
group = 'com.acme'
version = '1.0.0'
java {
    withSourcesJar()
}
subprojects {
    repositories {
        google()
    }
}",
		"buildscript {
    repositories {
        mavenCentral()
    }
    dependencies {
        classpath(\"com.acme:anvil-gradle:1.0.0\")
    }
}
plugins {
    id(\"java-library\")
}
group = \"com.acme\"
version = \"1.0.0\"
java {
    withSourcesJar()
}
subprojects {
    repositories {
        google()
    }
}",
	);
}

#[test]
fn insertion_order() {
	let mut block = Block::default();
	block
		.add_element(Element::raw("a"))
		.add_blank_line()
		.add_all_elements([Element::raw("b"), Element::raw("c")])
		.assign("x", Element::raw("1"))
		.set_property("y", Element::string("2"));
	check(&block, "a\n\nb\nc\nx = 1\ny.set('2')", "a\n\nb\nc\nx = 1\ny.set(\"2\")");
	assert_eq!(block.elements().len(), 6, "element count");
	assert!(Block::default().is_empty(), "empty block");
	assert_eq!(Block::default().render(&DslLanguage::kotlin()), "", "empty render");
}

#[test]
fn rendering_is_deterministic() {
	let mut build = BuildFile::default();
	build.dependencies(|dependencies| {
		dependencies.add_dependency(
			"implementation",
			DependencyNotation::external("com.acme:rocket:1.0.0"),
			[Exclusion::group("com.acme")],
		);
	});
	for language in [DslLanguage::groovy(), DslLanguage::kotlin().with_labels(true)] {
		assert_eq!(build.render(&language), build.render(&language), "{language}");
	}
}
