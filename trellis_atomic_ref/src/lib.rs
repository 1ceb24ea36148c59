// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Atomic Reference Compiler.
//!
//! This crate provides [`RefCompiler`], a small, stateful implementation of
//! [`AtomicCompiler`] for **rule recording and ordering assertions**.
//!
//! It is intentionally *not* a production CSS engine:
//! - It does **not** inject rules into a live document.
//! - It does **not** vendor-prefix, minify, or validate declarations.
//! - It is intended primarily for tests and debugging that want to assert
//!   on issued class names, cache behavior, and sheet insertion order.
//!
//! # Example
//!
//! ```rust
//! use trellis_atomic::{AtomicCompiler, CompileOptions};
//! use trellis_atomic_ref::RefCompiler;
//! use trellis_declaration::StyleEntry;
//!
//! let mut compiler = RefCompiler::new();
//! let over = compiler.compile(
//!     &StyleEntry::new().with("color", "blue"),
//!     CompileOptions { base_specificity: false },
//! );
//! let base = compiler.compile(
//!     &StyleEntry::new().with("color", "red"),
//!     CompileOptions { base_specificity: true },
//! );
//!
//! // Base rules precede non-base rules regardless of compile order.
//! assert!(compiler.position(base.as_str()) < compiler.position(over.as_str()));
//! assert_eq!(compiler.css_text(), ".tr1{color:red;}\n.tr0{color:blue;}\n");
//! ```
//!
//! # `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use trellis_atomic::{AtomicCompiler, ClassName, CompileOptions};
use trellis_declaration::StyleEntry;

/// One rule in the reference stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledRule {
    name: String,
    declarations: String,
    base_specificity: bool,
}

impl CompiledRule {
    /// Returns the class name this rule was issued under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rule body as `property:value;` text with kebab-case
    /// property names.
    #[must_use]
    pub fn declarations(&self) -> &str {
        &self.declarations
    }

    /// Returns `true` if the rule was compiled with base specificity.
    #[must_use]
    pub fn base_specificity(&self) -> bool {
        self.base_specificity
    }
}

/// Reference implementation of the atomic class compiler.
///
/// This compiler:
/// - Issues `tr<n>` class names in allocation order,
/// - Caches on rendered declarations plus the specificity flag, so repeat
///   compilations return the identical name and insert nothing,
/// - Keeps the sheet in two regions: base-specificity rules occupy a prefix
///   of the sheet, in their own insertion order, ahead of all other rules.
#[derive(Clone, Debug, Default)]
pub struct RefCompiler {
    /// Rules in sheet order.
    rules: Vec<CompiledRule>,
    /// Length of the base region at the front of `rules`.
    base_len: usize,
    /// Allocation counter for class names; never reused.
    issued: u32,
    cache: HashMap<(String, bool), ClassName>,
}

impl RefCompiler {
    /// Creates an empty compiler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sheet's rules in insertion-contract order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Returns the number of rules in the sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules have been compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the current sheet position of a class, if it was issued.
    #[must_use]
    pub fn position(&self, class_name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name == class_name)
    }

    /// Renders the whole sheet as CSS text, one rule per line, in sheet
    /// order.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            out.push('.');
            out.push_str(&rule.name);
            out.push('{');
            out.push_str(&rule.declarations);
            out.push_str("}\n");
        }
        out
    }
}

impl AtomicCompiler for RefCompiler {
    fn compile(&mut self, entry: &StyleEntry, options: CompileOptions) -> ClassName {
        let declarations = render_declarations(entry);
        let key = (declarations, options.base_specificity);
        if let Some(existing) = self.cache.get(&key) {
            return existing.clone();
        }

        let name = format!("tr{}", self.issued);
        self.issued = self.issued.saturating_add(1);

        let rule = CompiledRule {
            name: name.clone(),
            declarations: key.0.clone(),
            base_specificity: options.base_specificity,
        };
        if options.base_specificity {
            self.rules.insert(self.base_len, rule);
            self.base_len += 1;
        } else {
            self.rules.push(rule);
        }

        let class = ClassName::new(name);
        self.cache.insert(key, class.clone());
        class
    }
}

/// Renders an entry as `property:value;` declarations in the entry's
/// deterministic iteration order, with camelCase names folded to
/// kebab-case.
fn render_declarations(entry: &StyleEntry) -> String {
    let mut out = String::new();
    for (name, value) in entry.iter() {
        push_kebab_case(&mut out, name);
        out.push(':');
        out.push_str(&value.render());
        out.push(';');
    }
    out
}

fn push_kebab_case(out: &mut String, name: &str) {
    for character in name.chars() {
        if character.is_ascii_uppercase() {
            out.push('-');
            out.push(character.to_ascii_lowercase());
        } else {
            out.push(character);
        }
    }
}
