// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordered, append-only collections of elements.
//!
//! You probably want to start at [`DslContainer`].

use alloc::string::String;
use alloc::vec::Vec;
use core::any::type_name;

use crate::element::{Assignment, Element, FunctionCall, LambdaBlock, Render};
use crate::language::DslLanguage;

/// Declare a container struct and implement [`DslContainer`] for it.
macro_rules! container {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
		pub struct $name {
			elements: ::alloc::vec::Vec<$crate::element::Element>,
		}
		impl $crate::container::DslContainer for $name {
			fn elements(&self) -> &[$crate::element::Element] { &self.elements }
			fn push_element(&mut self, element: $crate::element::Element) {
				self.elements.push(element);
			}
			fn into_elements(self) -> ::alloc::vec::Vec<$crate::element::Element> { self.elements }
		}
	};
}
pub(crate) use container;

/// A block of configuration: a file, or the body of some `name { }`.
///
/// Containers only assemble the tree, children are rendered one per line in
/// insertion order by [`render`](Self::render).
pub trait DslContainer {
	/// Children in insertion order.
	fn elements(&self) -> &[Element];
	/// Append a child.
	fn push_element(&mut self, element: Element);
	/// Take the children out.
	fn into_elements(self) -> Vec<Element>
	where
		Self: Sized;

	/// Append a child node.
	fn add_element<E: Into<Element>>(&mut self, element: E) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(element.into());
		self
	}
	/// Append every node, in order.
	fn add_all_elements<I>(&mut self, elements: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<Element>,
		Self: Sized,
	{
		for element in elements {
			self.push_element(element.into());
		}
		self
	}
	/// Append an empty line.
	fn add_blank_line(&mut self) -> &mut Self
	where
		Self: Sized,
	{
		self.push_element(Element::BlankLine);
		self
	}
	/// Append `name = value`.
	fn assign<N: Into<String>, E: Into<Element>>(&mut self, name: N, value: E) -> &mut Self
	where
		Self: Sized,
	{
		self.add_element(Assignment::direct(name, value))
	}
	/// Append `name.set(value)`.
	fn set_property<N: Into<String>, E: Into<Element>>(&mut self, name: N, value: E) -> &mut Self
	where
		Self: Sized,
	{
		self.add_element(Assignment::managed(name, value))
	}
	/// Append `name { ... }` with arbitrary content.
	fn block<N: Into<String>, F: FnOnce(&mut Block)>(&mut self, name: N, build: F) -> &mut Self
	where
		Self: Sized,
	{
		self.add_element(nested::<Block, _, _>(name, build))
	}
	/// `true` if nothing has been added.
	fn is_empty(&self) -> bool { self.elements().is_empty() }
	/// Turn the container into the body of a `{ }` block.
	fn into_lambda(self) -> LambdaBlock
	where
		Self: Sized,
	{
		LambdaBlock::new(self.into_elements())
	}
	/// Render every child, joined by newlines.
	fn render(&self, language: &DslLanguage) -> String {
		log::trace!(
			"rendering {} elements of {} as {language}",
			self.elements().len(),
			type_name::<Self>()
		);
		self.elements()
			.iter()
			.map(|element| element.render(language))
			.collect::<Vec<_>>()
			.join("\n")
	}
}

/// Build a container with `build` and wrap it as `name { ... }`.
pub(crate) fn nested<B, N, F>(name: N, build: F) -> FunctionCall
where
	B: DslContainer + Default,
	N: Into<String>,
	F: FnOnce(&mut B),
{
	let mut block = B::default();
	build(&mut block);
	FunctionCall::new(name).with_lambda(block.into_lambda())
}

container!(
	/// Generic block body for `name { }` sections without dedicated helpers.
	Block
);
