// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Style: named style registration and class-name composition.
//!
//! This crate is the surface component code talks to. It ties the pipeline
//! together:
//!
//! - [`StyleSheet::create`] registers named style entries, running the
//!   normalization pipeline exactly once per entry, at registration time.
//!   The canonical entries are shared and immutable from then on.
//! - [`concat`] composes descriptors — registered entries, inline entries,
//!   literal class names, disabled slots — into the single class-name
//!   string applied to a rendered element, compiling entries through an
//!   injected [`AtomicCompiler`](trellis_atomic::AtomicCompiler).
//! - [`flatten`] (re-exported from `trellis_declaration`) merges descriptor
//!   trees into one plain entry, for callers that need to inspect
//!   properties rather than produce class names.
//!
//! # Composition order and override semantics
//!
//! `concat` compiles the first token of a call with base specificity and
//! every later entry without it. Under the compiler's insertion contract
//! (base rules precede non-base rules in the stylesheet), this makes
//! later-listed styles win on overlapping properties — the last-write-wins
//! behavior style arrays promise, built on a class mechanism that does not
//! order independently issued class names by itself.
//!
//! # Example
//!
//! ```rust
//! use trellis_atomic_ref::RefCompiler;
//! use trellis_declaration::{StyleDescriptor, StyleEntry};
//! use trellis_style::{concat, StyleSheet};
//!
//! let sheet = StyleSheet::create([(
//!     "row",
//!     StyleEntry::new().with("flexDirection", "row").with("marginHorizontal", 8),
//! )]);
//!
//! // Registration already rewrote the shorthand.
//! assert!(sheet.entry("row").unwrap().contains("marginLeft"));
//!
//! let mut compiler = RefCompiler::new();
//! let selected = true;
//! let class = concat(
//!     &mut compiler,
//!     &[
//!         sheet.get("row").unwrap(),
//!         StyleDescriptor::when(selected, StyleEntry::new().with("color", "gold")),
//!     ],
//! );
//! assert_eq!(class, "tr0 tr1");
//! ```
//!
//! # `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod compose;
mod sheet;

pub use compose::concat;
pub use sheet::{StyleSheet, absolute_fill};
pub use trellis_declaration::flatten;
