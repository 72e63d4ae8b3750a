// SPDX-License-Identifier: MIT OR Apache-2.0
//! Element tree structures.
//!
//! You probably want to start at [`Element`].
//!
//! Every node renders through [`Render`], which is a pure function of the
//! node and the [`DslLanguage`] it's handed.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::language::{Dialect, DslLanguage, InfixSupport, LabelSupport, PropertyAccessSupport};
use crate::plugin::PluginApplication;

mod params;
mod reference;

pub use params::{Parameter, ParameterList};
pub use reference::Reference;


/// Render a node into dialect source text.
pub trait Render {
	/// Render against a language policy.
	fn render(&self, language: &DslLanguage) -> String;
}

/// One node of generated source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
	/// An empty line.
	BlankLine,
	/// Text emitted as-is.
	Raw(String),
	/// A quoted string.
	Str(StringLiteral),
	/// A function or method call.
	Call(FunctionCall),
	/// A `{ ... }` block.
	Lambda(LambdaBlock),
	/// `name = value` or `name.set(value)`.
	Assignment(Assignment),
	/// A java-bean setter, rendered per dialect.
	Setter(SetterCall),
	/// A different sub-tree for each dialect.
	Decide(Box<LanguageSpecific>),
	/// A possibly-resolved property reference.
	Reference(Box<Reference>),
	/// An entry of a `plugins { }` block.
	Plugin(PluginApplication),
}

impl Element {
	/// Shorthand for [`Element::Raw`].
	pub fn raw<T: Into<String>>(text: T) -> Self { Self::Raw(text.into()) }
	/// Shorthand for a string literal in the policy's quotes.
	pub fn string<T: Into<String>>(content: T) -> Self { Self::Str(StringLiteral::new(content)) }
	/// Whether this is a `{ }` block, for trailing-lambda detection.
	pub const fn is_lambda(&self) -> bool { matches!(self, Self::Lambda(_)) }
}

impl Render for Element {
	fn render(&self, language: &DslLanguage) -> String {
		match self {
			Self::BlankLine => String::new(),
			Self::Raw(text) => text.clone(),
			Self::Str(literal) => literal.render(language),
			Self::Call(call) => call.render(language),
			Self::Lambda(lambda) => lambda.render(language),
			Self::Assignment(assignment) => assignment.render(language),
			Self::Setter(setter) => setter.render(language),
			Self::Decide(decide) => decide.render(language),
			Self::Reference(reference) => reference.render(language),
			Self::Plugin(plugin) => plugin.render(language),
		}
	}
}

impl From<StringLiteral> for Element {
	fn from(value: StringLiteral) -> Self { Self::Str(value) }
}
impl From<FunctionCall> for Element {
	fn from(value: FunctionCall) -> Self { Self::Call(value) }
}
impl From<LambdaBlock> for Element {
	fn from(value: LambdaBlock) -> Self { Self::Lambda(value) }
}
impl From<Assignment> for Element {
	fn from(value: Assignment) -> Self { Self::Assignment(value) }
}
impl From<SetterCall> for Element {
	fn from(value: SetterCall) -> Self { Self::Setter(value) }
}
impl From<LanguageSpecific> for Element {
	fn from(value: LanguageSpecific) -> Self { Self::Decide(Box::new(value)) }
}
impl From<Reference> for Element {
	fn from(value: Reference) -> Self { Self::Reference(Box::new(value)) }
}
impl From<PluginApplication> for Element {
	fn from(value: PluginApplication) -> Self { Self::Plugin(value) }
}

/// A quoted string, in the policy's quotes unless overridden.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringLiteral {
	content: String,
	double_quotes: Option<bool>,
}

impl StringLiteral {
	/// Create a literal in the policy's quote style.
	pub fn new<T: Into<String>>(content: T) -> Self {
		Self {
			content: content.into(),
			double_quotes: None,
		}
	}
	/// Force double (`true`) or single (`false`) quotes.
	#[must_use]
	pub const fn with_double_quotes(mut self, double_quotes: bool) -> Self {
		self.double_quotes = Some(double_quotes);
		self
	}
	/// Unquoted content.
	pub fn content(&self) -> &str { &self.content }
}

impl Render for StringLiteral {
	fn render(&self, language: &DslLanguage) -> String {
		language.quote(&self.content, self.double_quotes)
	}
}

/// `name(params)`, optionally on a receiver (`receiver.name(params)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionCall {
	receiver: Option<Box<Element>>,
	name: String,
	parameters: ParameterList,
	labels: LabelSupport,
	infix: InfixSupport,
}

impl FunctionCall {
	/// Create a call with no parameters, labels allowed, and no infix form.
	pub fn new<T: Into<String>>(name: T) -> Self {
		Self {
			receiver: None,
			name: name.into(),
			parameters: ParameterList::new(),
			labels: LabelSupport::Both,
			infix: InfixSupport::Neither,
		}
	}
	/// Call this method on the rendering of another node.
	#[must_use]
	pub fn with_receiver<E: Into<Element>>(mut self, receiver: E) -> Self {
		self.receiver = Some(Box::new(receiver.into()));
		self
	}
	/// Add one parameter.
	#[must_use]
	pub fn with_parameter<P: Into<Parameter>>(mut self, parameter: P) -> Self {
		self.parameters.push(parameter.into());
		self
	}
	/// Add a labeled parameter.
	#[must_use]
	pub fn with_labeled<L: Into<String>, E: Into<Element>>(self, label: L, value: E) -> Self {
		self.with_parameter(Parameter::labeled(label, value))
	}
	/// Add a trailing `{ }` block.
	#[must_use]
	pub fn with_lambda(self, lambda: LambdaBlock) -> Self { self.with_parameter(Element::Lambda(lambda)) }
	/// Replace the whole parameter list.
	#[must_use]
	pub fn with_parameters(mut self, parameters: ParameterList) -> Self {
		self.parameters = parameters;
		self
	}
	/// Set which dialects render this call's labels.
	#[must_use]
	pub const fn with_label_support(mut self, labels: LabelSupport) -> Self {
		self.labels = labels;
		self
	}
	/// Set which dialects may call this without parentheses.
	#[must_use]
	pub const fn with_infix_support(mut self, infix: InfixSupport) -> Self {
		self.infix = infix;
		self
	}
	/// Method name.
	pub fn name(&self) -> &str { &self.name }
	/// The call's parameters.
	pub const fn parameters(&self) -> &ParameterList { &self.parameters }
}

impl Render for FunctionCall {
	fn render(&self, language: &DslLanguage) -> String {
		let params = self.parameters.render(
			language,
			language.supports_labels(self.labels),
			self.infix.supports(language.dialect()),
		);
		match &self.receiver {
			Some(receiver) => format!("{}.{}{params}", receiver.render(language), self.name),
			None => format!("{}{params}", self.name),
		}
	}
}

/// A `{ ... }` block, with an optional `label ->` parameter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct LambdaBlock {
	label: Option<String>,
	elements: Vec<Element>,
}

impl LambdaBlock {
	/// Create a block from its statements.
	pub const fn new(elements: Vec<Element>) -> Self {
		Self {
			label: None,
			elements,
		}
	}
	/// Name the block's parameter, rendering `{ label ->`.
	#[must_use]
	pub fn with_label<T: Into<String>>(mut self, label: T) -> Self {
		self.label = Some(label.into());
		self
	}
	/// Statements of the block.
	pub fn elements(&self) -> &[Element] { &self.elements }
}

impl Render for LambdaBlock {
	fn render(&self, language: &DslLanguage) -> String {
		let head = match &self.label {
			Some(label) => format!("{{ {label} ->"),
			None => String::from("{"),
		};
		if self.elements.is_empty() {
			return format!("{head} }}");
		}
		let mut out = head;
		for element in &self.elements {
			let text = element.render(language);
			for line in text.split('\n') {
				out.push('\n');
				if !line.is_empty() {
					out.push_str(language.indent());
					out.push_str(line);
				}
			}
		}
		out.push_str("\n}");
		out
	}
}

/// How an [`Assignment`] writes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentKind {
	/// `name = value`
	Direct,
	/// `name.set(value)`, for lazy properties
	Managed,
}

/// Property or variable assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
	name: String,
	value: Box<Element>,
	kind: AssignmentKind,
}

impl Assignment {
	/// `name = value`
	pub fn direct<N: Into<String>, E: Into<Element>>(name: N, value: E) -> Self {
		Self {
			name: name.into(),
			value: Box::new(value.into()),
			kind: AssignmentKind::Direct,
		}
	}
	/// `name.set(value)`
	pub fn managed<N: Into<String>, E: Into<Element>>(name: N, value: E) -> Self {
		Self {
			name: name.into(),
			value: Box::new(value.into()),
			kind: AssignmentKind::Managed,
		}
	}
	/// Assignment style.
	pub const fn kind(&self) -> AssignmentKind { self.kind }
}

impl Render for Assignment {
	fn render(&self, language: &DslLanguage) -> String {
		let value = self.value.render(language);
		match self.kind {
			AssignmentKind::Direct => format!("{} = {value}", self.name),
			AssignmentKind::Managed => format!("{}.set({value})", self.name),
		}
	}
}

/// A java-bean `setName(value)` accessor.
///
/// Renders, in order of preference, as an infix call (`name value`), a
/// property assignment (`name = value`), or the explicit setter call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetterCall {
	name: String,
	value: Box<Element>,
	infix: InfixSupport,
	property_access: PropertyAccessSupport,
}

impl SetterCall {
	/// Create a setter that allows property access in both dialects and
	/// infix in neither.
	pub fn new<N: Into<String>, E: Into<Element>>(name: N, value: E) -> Self {
		Self {
			name: name.into(),
			value: Box::new(value.into()),
			infix: InfixSupport::Neither,
			property_access: PropertyAccessSupport::Both,
		}
	}
	/// Set which dialects may write this as `name value`.
	#[must_use]
	pub const fn with_infix_support(mut self, infix: InfixSupport) -> Self {
		self.infix = infix;
		self
	}
	/// Set which dialects may write this as `name = value`.
	#[must_use]
	pub const fn with_property_access(mut self, property_access: PropertyAccessSupport) -> Self {
		self.property_access = property_access;
		self
	}
}

impl Render for SetterCall {
	fn render(&self, language: &DslLanguage) -> String {
		let value = self.value.render(language);
		let property = language.supports_property_access(self.property_access);
		if property && language.supports_infix(self.infix) {
			format!("{}{}", self.name, language.parens(&value, Some(true)))
		} else if property {
			format!("{} = {value}", self.name)
		} else {
			let mut chars = self.name.chars();
			let capitalized = chars
				.next()
				.map(|first| first.to_uppercase().chain(chars).collect::<String>())
				.unwrap_or_default();
			format!("set{capitalized}({value})")
		}
	}
}

/// Separate sub-trees for each dialect, picked at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageSpecific {
	/// Rendered for Groovy
	pub groovy: Element,
	/// Rendered for Kotlin
	pub kotlin: Element,
}

impl LanguageSpecific {
	/// Create from both alternatives.
	pub fn new<G: Into<Element>, K: Into<Element>>(groovy: G, kotlin: K) -> Self {
		Self {
			groovy: groovy.into(),
			kotlin: kotlin.into(),
		}
	}
}

impl Render for LanguageSpecific {
	fn render(&self, language: &DslLanguage) -> String {
		match language.dialect() {
			Dialect::Groovy => self.groovy.render(language),
			Dialect::Kotlin => self.kotlin.render(language),
		}
	}
}
