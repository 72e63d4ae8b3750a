// SPDX-License-Identifier: MIT OR Apache-2.0
//! Deferred property references.

use alloc::boxed::Box;
use alloc::string::String;

use crate::element::{Element, FunctionCall, LambdaBlock, Render};
use crate::language::DslLanguage;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Resolution {
	/// not touched, renders the name
	Unresolved,
	Node(Box<Element>),
	Literal(String),
}

/// A reference to a named value (`libs.versions.kotlin`, `kotlinVersion`)
/// that may have had an operation applied to it.
/// ```
/// # use kase_gradle_dsl::{DslLanguage, Reference, Render};
/// let version = Reference::new("kotlinVersion").get();
/// assert_eq!(version.render(&DslLanguage::kotlin()), "kotlinVersion.get()");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
	name: String,
	resolution: Resolution,
}

impl Reference {
	/// Create an untouched reference. The name is what gets written.
	pub fn new<T: Into<String>>(name: T) -> Self {
		Self {
			name: name.into(),
			resolution: Resolution::Unresolved,
		}
	}
	/// The referenced name.
	pub fn name(&self) -> &str { &self.name }
	/// Whether an operation has been applied.
	pub const fn is_resolved(&self) -> bool { !matches!(self.resolution, Resolution::Unresolved) }
	/// Apply `.get()`.
	#[must_use]
	pub fn get(self) -> Self { self.resolved_to_call(FunctionCall::new("get")) }
	/// Apply `.map { ... }`.
	#[must_use]
	pub fn map(self, transform: LambdaBlock) -> Self {
		self.resolved_to_call(FunctionCall::new("map").with_lambda(transform))
	}
	/// Replace the rendering with fixed text.
	#[must_use]
	pub fn resolved_to<T: Into<String>>(mut self, text: T) -> Self {
		self.resolution = Resolution::Literal(text.into());
		self
	}
	/// Replace the rendering with another node.
	#[must_use]
	pub fn resolved_to_node<E: Into<Element>>(mut self, node: E) -> Self {
		self.resolution = Resolution::Node(Box::new(node.into()));
		self
	}
	fn resolved_to_call(self, call: FunctionCall) -> Self {
		let name = self.name.clone();
		Self {
			name,
			resolution: Resolution::Node(Box::new(call.with_receiver(self).into())),
		}
	}
}

impl Render for Reference {
	fn render(&self, language: &DslLanguage) -> String {
		match &self.resolution {
			Resolution::Unresolved => self.name.clone(),
			Resolution::Node(node) => node.render(language),
			Resolution::Literal(text) => text.clone(),
		}
	}
}
