// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style descriptors.
//!
//! This module provides [`StyleDescriptor`], the union type accepted
//! anywhere the pipeline consumes a "style".

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::entry::StyleEntry;

/// Any value accepted where a style is expected.
///
/// Component code composes styles as nested, sparse lists: a registered
/// entry here, an inline entry there, a conditional slot that may be
/// disabled, a literal class name from elsewhere. The descriptor captures
/// all of those shapes:
///
/// - [`None`](Self::None) is the no-op descriptor and contributes nothing.
/// - [`ClassName`](Self::ClassName) is a pre-compiled class and passes
///   through composition unchanged.
/// - [`Entry`](Self::Entry) is a property map, shared behind [`Rc`] so
///   registry entries can be handed out per render pass without copying.
/// - [`List`](Self::List) nests to unbounded depth.
///
/// # Example
///
/// ```rust
/// use trellis_declaration::{StyleDescriptor, StyleEntry};
///
/// let highlighted = false;
/// let styles = vec![
///     StyleDescriptor::from(StyleEntry::new().with("flex", 1)),
///     StyleDescriptor::when(highlighted, StyleEntry::new().with("color", "gold")),
///     StyleDescriptor::from("legacy-badge"),
/// ];
/// assert!(matches!(styles[1], StyleDescriptor::None));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum StyleDescriptor {
    /// The no-op descriptor: an absent or disabled style.
    None,
    /// A pre-compiled class name, passed through unchanged.
    ClassName(String),
    /// A style property map.
    Entry(Rc<StyleEntry>),
    /// A nested sequence of descriptors.
    List(Vec<StyleDescriptor>),
}

impl StyleDescriptor {
    /// Returns `style` when `condition` holds, and the no-op descriptor
    /// otherwise.
    ///
    /// This renders the `condition && style` idiom the source dialect uses
    /// inside style lists.
    #[must_use]
    pub fn when(condition: bool, style: impl Into<Self>) -> Self {
        if condition { style.into() } else { Self::None }
    }

    /// Returns `true` if this is the no-op descriptor.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<StyleEntry> for StyleDescriptor {
    fn from(entry: StyleEntry) -> Self {
        Self::Entry(Rc::new(entry))
    }
}

impl From<Rc<StyleEntry>> for StyleDescriptor {
    fn from(entry: Rc<StyleEntry>) -> Self {
        Self::Entry(entry)
    }
}

impl From<&Rc<StyleEntry>> for StyleDescriptor {
    fn from(entry: &Rc<StyleEntry>) -> Self {
        Self::Entry(Rc::clone(entry))
    }
}

impl From<&str> for StyleDescriptor {
    fn from(class_name: &str) -> Self {
        Self::ClassName(String::from(class_name))
    }
}

impl From<String> for StyleDescriptor {
    fn from(class_name: String) -> Self {
        Self::ClassName(class_name)
    }
}

impl From<Vec<StyleDescriptor>> for StyleDescriptor {
    fn from(descriptors: Vec<StyleDescriptor>) -> Self {
        Self::List(descriptors)
    }
}

impl<T: Into<StyleDescriptor>> From<Option<T>> for StyleDescriptor {
    fn from(descriptor: Option<T>) -> Self {
        descriptor.map_or(Self::None, Into::into)
    }
}
