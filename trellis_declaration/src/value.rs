// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declaration values.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::entry::StyleEntry;

/// The value of a single style declaration.
///
/// Values arrive from component authors in a mobile-UI dialect and may be
/// scalars, ordered lists (e.g. a transform list), or nested maps (e.g. a
/// shadow offset with `width`/`height`). The normalization pipeline rewrites
/// lists and maps into their textual longhand forms; canonical entries only
/// contain scalars.
///
/// # Example
///
/// ```rust
/// use trellis_declaration::{StyleEntry, StyleValue};
///
/// let step = StyleValue::Map(StyleEntry::new().with("rotate", "45deg"));
/// assert_eq!(step.render(), "rotate(45deg)");
///
/// let list = StyleValue::List(vec![1.0.into(), "auto".into()]);
/// assert_eq!(list.render(), "1 auto");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A numeric scalar (unitless numbers such as `flex: 1`).
    Number(f64),
    /// A textual scalar (keywords, colors, lengths carrying units).
    Text(String),
    /// An ordered sequence of values.
    List(Vec<StyleValue>),
    /// A nested map.
    Map(StyleEntry),
}

impl StyleValue {
    /// Renders the value as declaration text.
    ///
    /// Numbers render without a trailing `.0` (`2.0` becomes `2`), text
    /// renders as-is, lists join their rendered elements with single spaces,
    /// and maps render each pair as `name(value)` joined with single spaces.
    /// Rendering never fails; every value has some textual form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Self::Number(number) => {
                // `String`'s `fmt::Write` never errors.
                let _ = write!(out, "{number}");
            }
            Self::Text(text) => out.push_str(text),
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push(' ');
                    }
                    item.render_into(out);
                }
            }
            Self::Map(entry) => {
                for (index, (name, value)) in entry.iter().enumerate() {
                    if index > 0 {
                        out.push(' ');
                    }
                    out.push_str(name);
                    out.push('(');
                    value.render_into(out);
                    out.push(')');
                }
            }
        }
    }

    /// Returns `true` if the value is truthy in the source dialect.
    ///
    /// Numbers are truthy unless zero or NaN, text is truthy unless empty,
    /// and lists and maps are always truthy. Shadow consolidation uses this
    /// to decide whether an opacity participates in color synthesis.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Text(text) => !text.is_empty(),
            Self::List(_) | Self::Map(_) => true,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(value: Vec<StyleValue>) -> Self {
        Self::List(value)
    }
}

impl From<StyleEntry> for StyleValue {
    fn from(value: StyleEntry) -> Self {
        Self::Map(value)
    }
}
