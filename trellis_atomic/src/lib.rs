// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Atomic: the compiler seam between style composition and a
//! class-based stylesheet.
//!
//! The trellis pipeline never writes stylesheet rules itself. It hands each
//! canonical [`StyleEntry`] to an [`AtomicCompiler`] — the engine that turns
//! a property map into a cached class name and injects the corresponding
//! rule into a shared, append-only stylesheet. This crate defines only that
//! seam; concrete compilers live in their own crates
//! (`trellis_atomic_ref` provides an in-memory one for tests), the same way
//! rendering backends implement a backend trait rather than being baked into
//! the presentation layer.
//!
//! # Why the flag exists
//!
//! Class-based styling has no inherent "last wins" guarantee between
//! independently generated class names: precedence between equal-specificity
//! classes follows stylesheet insertion order, not the order class names
//! appear on an element. Style-array composition, however, promises exactly
//! that later styles override earlier ones. [`CompileOptions`] carries the
//! bridge: the composition layer flags the *first* style object of a call as
//! base specificity, and the compiler must keep every base-flagged rule
//! ahead of every unflagged rule in the sheet, so unflagged classes win on
//! overlapping properties by ordinary precedence.
//!
//! # Example
//!
//! ```rust
//! use trellis_atomic::{AtomicCompiler, ClassName, CompileOptions};
//! use trellis_declaration::StyleEntry;
//!
//! struct CountingCompiler(u32);
//!
//! impl AtomicCompiler for CountingCompiler {
//!     fn compile(&mut self, _entry: &StyleEntry, _options: CompileOptions) -> ClassName {
//!         self.0 += 1;
//!         ClassName::new(format!("c{}", self.0))
//!     }
//! }
//!
//! let mut compiler = CountingCompiler(0);
//! let class = compiler.compile(
//!     &StyleEntry::new().with("color", "red"),
//!     CompileOptions { base_specificity: true },
//! );
//! assert_eq!(class.as_str(), "c1");
//! ```
//!
//! # `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

use trellis_declaration::StyleEntry;

/// A compiled class name.
///
/// Opaque to the pipeline: the only operations are joining it into a class
/// attribute string and comparing it for equality. Stability is the
/// compiler's contract, not a property of this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    /// Creates a class name from its textual form.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the textual form of the class name.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the class name, returning its textual form.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-compilation options passed by the composition layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// `true` when this entry is the first token of a composition call.
    ///
    /// Base-specificity rules must precede all non-base rules in the
    /// compiler's stylesheet, so classes from later tokens override
    /// overlapping properties.
    pub base_specificity: bool,
}

/// The atomic class compiler: canonical property maps in, cached class
/// names out.
///
/// Implementations must uphold two contracts the pipeline depends on:
///
/// - **Referential stability**: identical `(entry, options)` pairs return
///   the identical class name, without inserting a duplicate rule.
/// - **Base-before-override insertion**: every rule compiled with
///   [`CompileOptions::base_specificity`] set appears earlier in the
///   stylesheet than every rule compiled without it, regardless of the
///   order `compile` was called in.
///
/// The stylesheet is owned by the compiler and treated as append-only
/// shared state; the pipeline takes the compiler as an argument (injected,
/// never a process-wide singleton) so tests can substitute their own.
pub trait AtomicCompiler {
    /// Compiles a canonical entry into a class name, inserting its rule
    /// into the stylesheet if it is not already present.
    fn compile(&mut self, entry: &StyleEntry, options: CompileOptions) -> ClassName;
}

impl<C: AtomicCompiler + ?Sized> AtomicCompiler for &mut C {
    fn compile(&mut self, entry: &StyleEntry, options: CompileOptions) -> ClassName {
        (**self).compile(entry, options)
    }
}
