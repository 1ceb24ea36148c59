// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Declaration: style values, entries, and descriptor flattening.
//!
//! This crate is the data model of the trellis pipeline. It defines the
//! three shapes every other crate operates on:
//!
//! - [`StyleValue`]: the value of a single declaration — a number, a piece
//!   of text, an ordered list, or a nested map.
//! - [`StyleEntry`]: a mutable property map from declaration name to value,
//!   stored as a sorted vector for deterministic iteration.
//! - [`StyleDescriptor`]: the union accepted anywhere a "style" is consumed —
//!   a no-op, a pre-compiled class name, a shared entry, or an arbitrarily
//!   nested list of descriptors.
//!
//! It also provides [`flatten`], which merges a descriptor tree into one
//! entry with last-write-wins semantics.
//!
//! # Example
//!
//! ```rust
//! use trellis_declaration::{flatten, StyleDescriptor, StyleEntry};
//!
//! let base = StyleEntry::new().with("color", "red").with("flex", 1);
//! let accent = StyleEntry::new().with("color", "blue");
//!
//! let merged = flatten(&[
//!     StyleDescriptor::from(base),
//!     StyleDescriptor::None,
//!     StyleDescriptor::from(vec![StyleDescriptor::from(accent)]),
//! ]);
//!
//! assert_eq!(merged.get("color").map(|v| v.render()), Some("blue".into()));
//! assert_eq!(merged.get("flex").map(|v| v.render()), Some("1".into()));
//! ```
//!
//! # `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod descriptor;
mod entry;
mod flatten;
mod value;

pub use descriptor::StyleDescriptor;
pub use entry::StyleEntry;
pub use flatten::flatten;
pub use value::StyleValue;
