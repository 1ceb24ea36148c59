// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class-name composition.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;
use trellis_atomic::{AtomicCompiler, CompileOptions};
use trellis_declaration::{StyleDescriptor, StyleEntry};

/// One position in the fully flattened composition sequence.
enum Token<'a> {
    /// An uncompiled property map.
    Entry(&'a StyleEntry),
    /// A pre-compiled class name (or any literal class text).
    Class(&'a str),
    /// A no-op descriptor. Contributes no output but occupies a position.
    Blank,
}

/// Composes descriptors into the class-name string for one element.
///
/// The descriptor tree is first flattened to a linear token sequence — pure
/// unnesting, no merging; two adjacent entries stay two entries. Each
/// non-empty entry token is then compiled through `compiler`, with the
/// *first token of the call* (position 0, whether or not it produced
/// output) flagged as base specificity; class-name tokens pass through
/// unchanged; no-op and empty-entry tokens produce nothing. Empty results
/// are dropped and the rest join with single spaces, with no leading or
/// trailing whitespace.
///
/// Under the compiler's insertion contract this gives later-listed entries
/// precedence over the first on overlapping properties; see the crate docs.
///
/// # Example
///
/// ```rust
/// use trellis_atomic_ref::RefCompiler;
/// use trellis_declaration::{StyleDescriptor, StyleEntry};
/// use trellis_style::concat;
///
/// let mut compiler = RefCompiler::new();
/// let class = concat(
///     &mut compiler,
///     &[
///         StyleDescriptor::from(StyleEntry::new().with("color", "red")),
///         StyleDescriptor::None,
///         StyleDescriptor::from("badge"),
///     ],
/// );
/// assert_eq!(class, "tr0 badge");
/// ```
pub fn concat<'a, C, I>(compiler: &mut C, styles: I) -> String
where
    C: AtomicCompiler,
    I: IntoIterator<Item = &'a StyleDescriptor>,
{
    let tokens = unnest(styles);

    let mut out = String::new();
    for (position, token) in tokens.into_iter().enumerate() {
        let compiled;
        let piece = match token {
            // Empty entries are no-ops like `Blank`, but both still occupy
            // their position in the sequence.
            Token::Entry(entry) if !entry.is_empty() => {
                compiled = compiler.compile(
                    entry,
                    CompileOptions {
                        base_specificity: position == 0,
                    },
                );
                compiled.as_str()
            }
            Token::Entry(_) | Token::Blank => "",
            Token::Class(text) => text,
        };
        if piece.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(piece);
    }

    // Literal class text may carry its own edge whitespace.
    if out.trim().len() == out.len() {
        out
    } else {
        String::from(out.trim())
    }
}

/// Flattens a descriptor tree into its linear token sequence.
fn unnest<'a, I>(styles: I) -> Vec<Token<'a>>
where
    I: IntoIterator<Item = &'a StyleDescriptor>,
{
    let mut tokens = Vec::new();

    let mut stack: SmallVec<[&StyleDescriptor; 16]> = SmallVec::new();
    let mut roots: SmallVec<[&StyleDescriptor; 16]> = styles.into_iter().collect();
    roots.reverse();
    stack.extend(roots);

    while let Some(descriptor) = stack.pop() {
        match descriptor {
            StyleDescriptor::None => tokens.push(Token::Blank),
            StyleDescriptor::ClassName(text) => tokens.push(Token::Class(text)),
            StyleDescriptor::Entry(entry) => tokens.push(Token::Entry(entry)),
            StyleDescriptor::List(items) => stack.extend(items.iter().rev()),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use trellis_atomic::ClassName;

    /// Records the flag passed for every compiled entry.
    struct FlagSpy {
        flags: Rc<RefCell<Vec<bool>>>,
        issued: u32,
    }

    impl FlagSpy {
        fn new() -> (Self, Rc<RefCell<Vec<bool>>>) {
            let flags = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    flags: Rc::clone(&flags),
                    issued: 0,
                },
                flags,
            )
        }
    }

    impl AtomicCompiler for FlagSpy {
        fn compile(&mut self, _entry: &StyleEntry, options: CompileOptions) -> ClassName {
            self.flags.borrow_mut().push(options.base_specificity);
            let class = ClassName::new(format!("spy{}", self.issued));
            self.issued += 1;
            class
        }
    }

    fn entry(name: &str, value: &str) -> StyleDescriptor {
        StyleDescriptor::from(StyleEntry::new().with(name, value))
    }

    #[test]
    fn first_entry_is_base_later_entries_are_not() {
        let (mut spy, flags) = FlagSpy::new();
        let class = concat(
            &mut spy,
            &[entry("color", "red"), entry("color", "blue")],
        );

        assert_eq!(class, "spy0 spy1");
        assert_eq!(*flags.borrow(), [true, false]);
    }

    #[test]
    fn a_leading_no_op_still_occupies_position_zero() {
        let (mut spy, flags) = FlagSpy::new();
        let class = concat(&mut spy, &[StyleDescriptor::None, entry("color", "red")]);

        assert_eq!(class, "spy0");
        // The entry sat at position 1, so it is not base specificity.
        assert_eq!(*flags.borrow(), [false]);
    }

    #[test]
    fn nested_lists_flatten_without_merging() {
        let (mut spy, flags) = FlagSpy::new();
        let class = concat(
            &mut spy,
            &[StyleDescriptor::from(vec![
                entry("color", "red"),
                StyleDescriptor::from(vec![entry("color", "blue"), entry("flex", "1")]),
            ])],
        );

        // Three entries compile individually; the first is base.
        assert_eq!(class, "spy0 spy1 spy2");
        assert_eq!(*flags.borrow(), [true, false, false]);
    }

    #[test]
    fn falsy_and_empty_tokens_produce_no_extra_whitespace() {
        let (mut spy, _) = FlagSpy::new();
        let class = concat(
            &mut spy,
            &[
                StyleDescriptor::None,
                StyleDescriptor::None,
                entry("color", "red"),
                StyleDescriptor::from(""),
            ],
        );
        assert_eq!(class, "spy0");
    }

    #[test]
    fn class_names_pass_through_in_order() {
        let (mut spy, _) = FlagSpy::new();
        let class = concat(
            &mut spy,
            &[
                StyleDescriptor::from("badge"),
                entry("color", "red"),
                StyleDescriptor::from("legacy"),
            ],
        );
        assert_eq!(class, "badge spy0 legacy");
    }

    #[test]
    fn all_no_ops_yield_an_empty_string() {
        let (mut spy, flags) = FlagSpy::new();
        let class = concat(&mut spy, &[StyleDescriptor::None, StyleDescriptor::None]);
        assert_eq!(class, "");
        assert!(flags.borrow().is_empty());
    }

    #[test]
    fn literal_class_edge_whitespace_is_trimmed() {
        let (mut spy, _) = FlagSpy::new();
        let class = concat(&mut spy, &[StyleDescriptor::from("  badge  ")]);
        assert_eq!(class, "badge");
    }

    #[test]
    fn empty_entries_are_no_ops_but_occupy_positions() {
        let (mut spy, flags) = FlagSpy::new();
        let class = concat(
            &mut spy,
            &[
                StyleDescriptor::from(StyleEntry::new()),
                entry("color", "red"),
            ],
        );

        assert_eq!(class, "spy0");
        // Only the real entry compiled, and it sat at position 1.
        assert_eq!(*flags.borrow(), [false]);
    }
}
