// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptor flattening.

use smallvec::SmallVec;

use crate::descriptor::StyleDescriptor;
use crate::entry::StyleEntry;

/// Merges a descriptor tree into a single entry.
///
/// Descriptors are visited in pre-order, depth-first, linear order:
/// [`StyleDescriptor::None`] contributes nothing, an entry is merged into
/// the accumulator with last-write-wins semantics per declaration name, and
/// a list is expanded in place. Class-name descriptors also contribute
/// nothing — a class name carries no inspectable declarations to merge.
///
/// The accumulator is freshly created; the input descriptors are never
/// mutated. Nesting depth is bounded only by available memory: the walk
/// uses an explicit work stack, not native recursion.
///
/// # Example
///
/// ```rust
/// use trellis_declaration::{flatten, StyleDescriptor, StyleEntry};
///
/// let merged = flatten(&[
///     StyleDescriptor::None,
///     StyleDescriptor::from(StyleEntry::new().with("flex", 1)),
///     StyleDescriptor::from(vec![
///         StyleDescriptor::from(StyleEntry::new().with("flex", 2)),
///         StyleDescriptor::when(false, StyleEntry::new().with("color", "red")),
///     ]),
/// ]);
///
/// assert_eq!(merged.get("flex").map(|v| v.render()), Some("2".into()));
/// assert!(!merged.contains("color"));
/// ```
#[must_use]
pub fn flatten<'a, I>(descriptors: I) -> StyleEntry
where
    I: IntoIterator<Item = &'a StyleDescriptor>,
{
    let mut merged = StyleEntry::new();

    // Pre-order walk: the top of the stack is the next descriptor in linear
    // order, so children are pushed in reverse.
    let mut stack: SmallVec<[&StyleDescriptor; 16]> = SmallVec::new();
    let mut roots: SmallVec<[&StyleDescriptor; 16]> = descriptors.into_iter().collect();
    roots.reverse();
    stack.extend(roots);

    while let Some(descriptor) = stack.pop() {
        match descriptor {
            StyleDescriptor::None | StyleDescriptor::ClassName(_) => {}
            StyleDescriptor::Entry(entry) => merged.merge(entry),
            StyleDescriptor::List(items) => stack.extend(items.iter().rev()),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::StyleValue;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn later_entries_win() {
        let merged = flatten(&[
            StyleDescriptor::from(StyleEntry::new().with("a", 1)),
            StyleDescriptor::from(StyleEntry::new().with("a", 2)),
        ]);
        assert_eq!(merged.get("a"), Some(&StyleValue::Number(2.0)));
    }

    #[test]
    fn skips_no_ops_and_recurses_into_lists() {
        let merged = flatten(&[
            StyleDescriptor::None,
            StyleDescriptor::from(StyleEntry::new().with("a", 1)),
            StyleDescriptor::from(vec![
                StyleDescriptor::from(StyleEntry::new().with("b", 2)),
                StyleDescriptor::None,
            ]),
        ]);
        assert_eq!(merged.get("a"), Some(&StyleValue::Number(1.0)));
        assert_eq!(merged.get("b"), Some(&StyleValue::Number(2.0)));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn nested_lists_flatten_in_linear_order() {
        let merged = flatten(&[
            StyleDescriptor::from(vec![
                StyleDescriptor::from(StyleEntry::new().with("a", 1)),
                StyleDescriptor::from(vec![StyleDescriptor::from(
                    StyleEntry::new().with("a", 2).with("b", 1),
                )]),
            ]),
            StyleDescriptor::from(StyleEntry::new().with("b", 3)),
        ]);
        assert_eq!(merged.get("a"), Some(&StyleValue::Number(2.0)));
        assert_eq!(merged.get("b"), Some(&StyleValue::Number(3.0)));
    }

    #[test]
    fn class_names_contribute_nothing() {
        let merged = flatten(&[
            StyleDescriptor::from("badge"),
            StyleDescriptor::from(StyleEntry::new().with("a", 1)),
        ]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn survives_pathological_nesting_depth() {
        let mut descriptor = StyleDescriptor::from(StyleEntry::new().with("a", 1));
        for _ in 0..100_000 {
            descriptor = StyleDescriptor::List(vec![descriptor]);
        }
        let towers = [descriptor];
        let merged = flatten(&towers);
        assert_eq!(merged.get("a"), Some(&StyleValue::Number(1.0)));

        // Tear the tower down level by level; a plain drop would recurse.
        let [mut tower] = towers;
        while let StyleDescriptor::List(mut items) = tower {
            tower = items.pop().unwrap_or(StyleDescriptor::None);
        }
    }

    #[test]
    fn empty_input_yields_empty_entry() {
        let merged = flatten(Vec::<&StyleDescriptor>::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn caller_entries_are_not_mutated() {
        let base = StyleEntry::new().with("a", 1);
        let descriptors = [
            StyleDescriptor::from(base.clone()),
            StyleDescriptor::from(StyleEntry::new().with("a", 2)),
        ];
        let _ = flatten(&descriptors);
        let StyleDescriptor::Entry(entry) = &descriptors[0] else {
            panic!("expected an entry descriptor");
        };
        assert_eq!(**entry, base);
    }
}
