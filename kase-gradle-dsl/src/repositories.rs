// SPDX-License-Identifier: MIT OR Apache-2.0
//! `repositories { }` blocks and repository content filters.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::container::{DslContainer, container, nested};
use crate::element::{Element, FunctionCall, LambdaBlock, LanguageSpecific, SetterCall};
use crate::language::InfixSupport;

container!(
	/// Body of a `repositories { }` block.
	RepositoriesBlock
);

container!(
	/// Body of a repository's `content { }` filter.
	ContentFilterBlock
);

fn no_arg(name: &str) -> FunctionCall { FunctionCall::new(name) }

fn groovy_infix(name: &str) -> FunctionCall {
	FunctionCall::new(name).with_infix_support(InfixSupport::Groovy)
}

/// `maven { url '...' }` for Groovy, `maven("...")` for Kotlin, each with
/// an optional body after the url.
fn maven_repository(url: &str, body: Vec<Element>) -> Element {
	let url_setter = SetterCall::new("url", Element::string(url)).with_infix_support(InfixSupport::Groovy);
	let mut groovy_body = Vec::with_capacity(body.len() + 1);
	groovy_body.push(url_setter.into());
	groovy_body.extend(body.iter().cloned());
	let groovy = FunctionCall::new("maven").with_lambda(LambdaBlock::new(groovy_body));
	let kotlin = FunctionCall::new("maven").with_parameter(Element::string(url));
	let kotlin = if body.is_empty() {
		kotlin
	} else {
		kotlin.with_lambda(LambdaBlock::new(body))
	};
	LanguageSpecific::new(groovy, kotlin).into()
}

impl RepositoriesBlock {
	/// `mavenCentral()`
	pub fn maven_central(&mut self) -> &mut Self { self.add_element(Repository::MavenCentral) }
	/// `mavenCentral { content { ... } }`
	pub fn maven_central_with_content<F: FnOnce(&mut ContentFilterBlock)>(&mut self, build: F) -> &mut Self {
		let content = nested::<ContentFilterBlock, _, _>("content", build);
		self.add_element(FunctionCall::new("mavenCentral").with_lambda(LambdaBlock::new(vec![content.into()])))
	}
	/// `mavenLocal()`
	pub fn maven_local(&mut self) -> &mut Self { self.add_element(Repository::MavenLocal) }
	/// `google()`
	pub fn google(&mut self) -> &mut Self { self.add_element(Repository::Google) }
	/// `gradlePluginPortal()`
	pub fn gradle_plugin_portal(&mut self) -> &mut Self { self.add_element(Repository::GradlePluginPortal) }
	/// A maven repository by url.
	pub fn maven<T: Into<String>>(&mut self, url: T) -> &mut Self { self.add_element(Repository::Maven(url.into())) }
	/// A maven repository by url with a `content { }` filter.
	pub fn maven_with_content<T: AsRef<str>, F: FnOnce(&mut ContentFilterBlock)>(
		&mut self,
		url: T,
		build: F,
	) -> &mut Self {
		let content = nested::<ContentFilterBlock, _, _>("content", build);
		self.add_element(maven_repository(url.as_ref(), vec![content.into()]))
	}
}

impl ContentFilterBlock {
	fn filter(&mut self, name: &str, values: &[&str]) -> &mut Self {
		let call = values
			.iter()
			.fold(groovy_infix(name), |call, value| call.with_parameter(Element::string(*value)));
		self.add_element(call)
	}
	/// `includeGroup("group")`
	pub fn include_group(&mut self, group: &str) -> &mut Self { self.filter("includeGroup", &[group]) }
	/// `includeGroupByRegex("regex")`
	pub fn include_group_by_regex(&mut self, regex: &str) -> &mut Self {
		self.filter("includeGroupByRegex", &[regex])
	}
	/// `includeModule("group", "module")`
	pub fn include_module(&mut self, group: &str, module: &str) -> &mut Self {
		self.filter("includeModule", &[group, module])
	}
	/// `excludeGroup("group")`
	pub fn exclude_group(&mut self, group: &str) -> &mut Self { self.filter("excludeGroup", &[group]) }
	/// `excludeModule("group", "module")`
	pub fn exclude_module(&mut self, group: &str, module: &str) -> &mut Self {
		self.filter("excludeModule", &[group, module])
	}
}

/// Containers that can hold a `repositories { }` block.
pub trait HasRepositories: DslContainer {
	/// Append `repositories { ... }`.
	fn repositories<F: FnOnce(&mut RepositoriesBlock)>(&mut self, build: F) -> &mut Self
	where
		Self: Sized,
	{
		self.add_element(nested::<RepositoriesBlock, _, _>("repositories", build))
	}
}

/// Name of a repository, for callers building repository lists from data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Repository {
	/// `mavenCentral()`
	MavenCentral,
	/// `mavenLocal()`
	MavenLocal,
	/// `google()`
	Google,
	/// `gradlePluginPortal()`
	GradlePluginPortal,
	/// A maven repository by url
	Maven(String),
}

impl Repository {
	/// The repository as a node.
	pub fn to_element(&self) -> Element {
		match self {
			Self::MavenCentral => no_arg("mavenCentral").into(),
			Self::MavenLocal => no_arg("mavenLocal").into(),
			Self::Google => no_arg("google").into(),
			Self::GradlePluginPortal => no_arg("gradlePluginPortal").into(),
			Self::Maven(url) => maven_repository(url, Vec::new()),
		}
	}
}

impl From<Repository> for Element {
	fn from(value: Repository) -> Self { value.to_element() }
}
