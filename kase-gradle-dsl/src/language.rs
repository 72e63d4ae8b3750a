// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dialect policy: quoting, labels, and call style.
//!
//! You probably want to start at [`DslLanguage`].

use alloc::format;
use alloc::string::String;
use core::fmt;

/// One of the two build-script surface grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
	/// Groovy DSL, `build.gradle`
	Groovy,
	/// Kotlin DSL, `build.gradle.kts`
	Kotlin,
}

impl fmt::Display for Dialect {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			Self::Groovy => "Groovy",
			Self::Kotlin => "Kotlin",
		})
	}
}

/// Which dialects a single call site allows some feature in.
///
/// Used as the infix, label, and property-access marker of calls and setters,
/// see [`InfixSupport`], [`LabelSupport`], and [`PropertyAccessSupport`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectSupport {
	/// Supported nowhere
	#[default]
	Neither,
	/// Groovy only
	Groovy,
	/// Kotlin only
	Kotlin,
	/// Both dialects
	Both,
}

impl DialectSupport {
	/// Whether the feature is available in a dialect.
	pub const fn supports(self, dialect: Dialect) -> bool {
		matches!(
			(self, dialect),
			(Self::Both, _) | (Self::Groovy, Dialect::Groovy) | (Self::Kotlin, Dialect::Kotlin)
		)
	}
}

/// Marker for calls that may drop their parentheses (`version "1.0"`).
pub type InfixSupport = DialectSupport;
/// Marker for calls whose parameter names may be written out.
pub type LabelSupport = DialectSupport;
/// Marker for java-bean setters that may be written as `name = value`.
pub type PropertyAccessSupport = DialectSupport;

/// Rendering policy for one dialect.
///
/// Every render pass is handed exactly one of these, nothing in the element
/// model stores a language of its own.
/// ```
/// # use kase_gradle_dsl::DslLanguage;
/// let groovy = DslLanguage::groovy();
/// assert_eq!(groovy.quote("com.acme", None), "'com.acme'");
/// let kotlin = DslLanguage::kotlin().with_infix(false);
/// assert_eq!(kotlin.parens("\"1.0\"", None), "(\"1.0\")");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DslLanguage {
	dialect: Dialect,
	quote: char,
	label_delimiter: &'static str,
	infix: bool,
	labels: bool,
	always_parens: bool,
	indent: &'static str,
}

impl DslLanguage {
	/// Groovy defaults: single quotes, `name: value` labels, infix calls.
	pub const fn groovy() -> Self {
		Self {
			dialect: Dialect::Groovy,
			quote: '\'',
			label_delimiter: ": ",
			infix: true,
			labels: true,
			always_parens: false,
			indent: "    ",
		}
	}
	/// Kotlin defaults: double quotes, no labels, infix where declared.
	pub const fn kotlin() -> Self {
		Self {
			dialect: Dialect::Kotlin,
			quote: '"',
			label_delimiter: " = ",
			infix: true,
			labels: false,
			always_parens: false,
			indent: "    ",
		}
	}
	/// Defaults of a dialect.
	pub const fn new(dialect: Dialect) -> Self {
		match dialect {
			Dialect::Groovy => Self::groovy(),
			Dialect::Kotlin => Self::kotlin(),
		}
	}
	/// Turn infix calls on or off.
	#[must_use]
	pub const fn with_infix(mut self, infix: bool) -> Self {
		self.infix = infix;
		self
	}
	/// Turn parameter labels on or off.
	#[must_use]
	pub const fn with_labels(mut self, labels: bool) -> Self {
		self.labels = labels;
		self
	}
	/// Force parentheses on every call, even ones that could be infix.
	#[must_use]
	pub const fn with_always_parens(mut self, always_parens: bool) -> Self {
		self.always_parens = always_parens;
		self
	}
	/// Pick double or single quotes. Kotlin strings are always double-quoted,
	/// so this only affects Groovy.
	#[must_use]
	pub const fn with_double_quotes(mut self, double_quotes: bool) -> Self {
		if let Dialect::Groovy = self.dialect {
			self.quote = if double_quotes { '"' } else { '\'' };
		}
		self
	}
	/// Change the text inserted for each indentation level,
	/// default is four spaces
	#[must_use]
	pub const fn with_indent(mut self, indent: &'static str) -> Self {
		self.indent = indent;
		self
	}

	/// The target dialect.
	pub const fn dialect(&self) -> Dialect { self.dialect }
	/// `true` for the Groovy dialect.
	pub const fn is_groovy(&self) -> bool { matches!(self.dialect, Dialect::Groovy) }
	/// `true` for the Kotlin dialect.
	pub const fn is_kotlin(&self) -> bool { matches!(self.dialect, Dialect::Kotlin) }
	/// Default quote character for string literals.
	pub const fn quote_char(&self) -> char { self.quote }
	/// Text between a parameter label and its value.
	pub const fn label_delimiter(&self) -> &'static str { self.label_delimiter }
	/// Global infix flag, always off when parentheses are forced.
	pub const fn use_infix(&self) -> bool { self.infix && !self.always_parens }
	/// Global label flag.
	pub const fn use_labels(&self) -> bool { self.labels }
	/// Whether parentheses are forced on every call.
	pub const fn always_parens(&self) -> bool { self.always_parens }
	/// Indentation text of one nesting level.
	pub const fn indent(&self) -> &'static str { self.indent }

	/// Whether a call with this marker renders infix.
	pub const fn supports_infix(&self, support: InfixSupport) -> bool {
		self.use_infix() && support.supports(self.dialect)
	}
	/// Whether a call with this marker renders its labels.
	pub const fn supports_labels(&self, support: LabelSupport) -> bool {
		self.labels && support.supports(self.dialect)
	}
	/// Whether a setter with this marker may be written as an assignment.
	pub const fn supports_property_access(&self, support: PropertyAccessSupport) -> bool {
		support.supports(self.dialect)
	}

	/// Quote a string literal, optionally overriding the quote style.
	///
	/// Backslashes and the chosen quote character are escaped, and so is `$`
	/// in double quotes, where it would start a template.
	pub fn quote(&self, content: &str, double_quotes: Option<bool>) -> String {
		let quote = match double_quotes {
			Some(true) => '"',
			Some(false) => '\'',
			None => self.quote,
		};
		let mut out = String::with_capacity(content.len() + 2);
		out.push(quote);
		for ch in content.chars() {
			if ch == '\\' || ch == quote || (ch == '$' && quote == '"') {
				out.push('\\');
			}
			out.push(ch);
		}
		out.push(quote);
		out
	}

	/// Wrap rendered call arguments in parentheses, or prefix them with a
	/// space for the bare infix style.
	///
	/// Parentheses are used for blank content, when forced by the policy, when
	/// `infix` is `Some(false)`, or when the policy disables infix and `infix`
	/// isn't `Some(true)`.
	pub fn parens(&self, content: &str, infix: Option<bool>) -> String {
		let wrap = content.trim().is_empty()
			|| self.always_parens
			|| infix == Some(false)
			|| (!self.infix && infix != Some(true));
		if wrap {
			format!("({content})")
		} else {
			format!(" {content}")
		}
	}

	/// File name of a project build script.
	pub const fn build_file_name(&self) -> &'static str {
		match self.dialect {
			Dialect::Groovy => "build.gradle",
			Dialect::Kotlin => "build.gradle.kts",
		}
	}
	/// File name of a settings script.
	pub const fn settings_file_name(&self) -> &'static str {
		match self.dialect {
			Dialect::Groovy => "settings.gradle",
			Dialect::Kotlin => "settings.gradle.kts",
		}
	}
}

impl fmt::Display for DslLanguage {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"{} (infix={}, labels={})",
			self.dialect,
			self.use_infix(),
			self.labels
		)
	}
}
