// SPDX-License-Identifier: MIT OR Apache-2.0
//! Call parameters.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::element::{Element, LambdaBlock, Render};
use crate::language::DslLanguage;

/// One call argument, optionally labeled (`group: 'x'` / `group = "x"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
	label: Option<String>,
	value: Element,
	label_required: bool,
}

impl Parameter {
	/// Create a positional parameter.
	pub fn new<E: Into<Element>>(value: E) -> Self {
		Self {
			label: None,
			value: value.into(),
			label_required: false,
		}
	}
	/// Create a labeled parameter.
	pub fn labeled<L: Into<String>, E: Into<Element>>(label: L, value: E) -> Self {
		Self {
			label: Some(label.into()),
			value: value.into(),
			label_required: false,
		}
	}
	/// Create a parameter whose label is written even when labels are off,
	/// for arguments that can't be passed positionally.
	pub fn always_labeled<L: Into<String>, E: Into<Element>>(label: L, value: E) -> Self {
		Self {
			label: Some(label.into()),
			value: value.into(),
			label_required: true,
		}
	}
	/// The parameter's label, if it has one.
	pub fn label(&self) -> Option<&str> { self.label.as_deref() }
	/// The parameter's value.
	pub const fn value(&self) -> &Element { &self.value }
	/// Whether the value is a `{ }` block.
	pub const fn is_lambda(&self) -> bool { self.value.is_lambda() }
	/// Render, writing the label only if `labels` is set or the label is
	/// required.
	pub fn render(&self, language: &DslLanguage, labels: bool) -> String {
		let value = self.value.render(language);
		match &self.label {
			Some(label) if labels || self.label_required => format!("{label}{}{value}", language.label_delimiter()),
			_ => value,
		}
	}
}

impl From<Element> for Parameter {
	fn from(value: Element) -> Self { Self::new(value) }
}
impl From<LambdaBlock> for Parameter {
	fn from(value: LambdaBlock) -> Self { Self::new(value) }
}

/// The ordered parameters of one call.
///
/// A lambda in last position is a trailing lambda and is written after the
/// other arguments as a block. Lambdas anywhere else render inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterList {
	parameters: Vec<Parameter>,
	separator: &'static str,
}

impl Default for ParameterList {
	fn default() -> Self { Self::new() }
}

impl ParameterList {
	/// Create an empty list separated by `", "`.
	pub const fn new() -> Self {
		Self {
			parameters: Vec::new(),
			separator: ", ",
		}
	}
	/// Change the separator placed between arguments.
	#[must_use]
	pub const fn with_separator(mut self, separator: &'static str) -> Self {
		self.separator = separator;
		self
	}
	/// Append a parameter.
	pub fn push(&mut self, parameter: Parameter) { self.parameters.push(parameter); }
	/// The parameters, including any trailing lambda.
	pub fn parameters(&self) -> &[Parameter] { &self.parameters }
	/// Number of parameters, including any trailing lambda.
	pub fn len(&self) -> usize { self.parameters.len() }
	/// `true` if there are no parameters.
	pub fn is_empty(&self) -> bool { self.parameters.is_empty() }
	/// The final parameter, if it's a lambda.
	pub fn trailing_lambda(&self) -> Option<&Parameter> {
		self.parameters.last().filter(|last| last.is_lambda())
	}

	/// Render everything after the call name, including the leading space or
	/// parentheses.
	///
	/// Parentheses are required when, checked in order:
	/// 1. the arguments span multiple lines
	/// 2. there are no parameters at all
	/// 3. Kotlin gets more than one argument (its infix form takes one)
	/// 4. a trailing lambda follows other arguments
	///
	/// otherwise they're dropped only if both the policy and `infix` allow it.
	/// A lone trailing lambda never gets parentheses.
	pub fn render(&self, language: &DslLanguage, labels: bool, infix: bool) -> String {
		let (arguments, trailing) = match self.parameters.split_last() {
			Some((last, rest)) if last.is_lambda() => (rest, Some(last)),
			_ => (self.parameters.as_slice(), None),
		};
		let joined = arguments
			.iter()
			.map(|parameter| parameter.render(language, labels))
			.collect::<Vec<_>>()
			.join(self.separator);
		let wrap = joined.contains('\n')
			|| self.parameters.is_empty()
			|| (language.is_kotlin() && arguments.len() > 1)
			|| match trailing {
				Some(_) => !arguments.is_empty(),
				None => !(language.use_infix() && infix),
			};
		let mut out = if wrap {
			language.parens(&joined, Some(false))
		} else if arguments.is_empty() {
			String::new()
		} else {
			format!(" {joined}")
		};
		if let Some(lambda) = trailing {
			out.push(' ');
			out.push_str(&lambda.value().render(language));
		}
		out
	}
}

impl<P: Into<Parameter>> FromIterator<P> for ParameterList {
	fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
		Self {
			parameters: iter.into_iter().map(Into::into).collect(),
			separator: ", ",
		}
	}
}
