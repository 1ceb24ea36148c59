// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named style registration.
//!
//! This module provides [`StyleSheet`], the registry of canonical style
//! entries a component module defines once at load time.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use trellis_declaration::{StyleDescriptor, StyleEntry};
use trellis_normalize::normalize;

/// A named collection of canonical style entries.
///
/// [`create`](Self::create) runs the normalization pipeline exactly once
/// per entry — registration time, not per use — and stores the canonical
/// result. The sheet is immutable after creation and wraps its data in
/// [`Rc`], so cloning the sheet or handing out entries per render pass is
/// cheap.
///
/// # Example
///
/// ```rust
/// use trellis_declaration::StyleEntry;
/// use trellis_style::StyleSheet;
///
/// let sheet = StyleSheet::create([
///     ("container", StyleEntry::new().with("flex", 1)),
///     ("label", StyleEntry::new().with("color", "dimgray")),
/// ]);
///
/// assert_eq!(sheet.len(), 2);
/// // Flex-family declarations imply a flex display at registration.
/// assert!(sheet.entry("container").unwrap().contains("display"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    inner: Rc<StyleSheetData>,
}

#[derive(Debug, Default)]
struct StyleSheetData {
    /// Sorted by name for binary search lookup.
    entries: Vec<(String, Rc<StyleEntry>)>,
}

impl StyleSheet {
    /// Creates a sheet from named entries, normalizing each entry once.
    ///
    /// A name registered twice keeps the later entry.
    #[must_use]
    pub fn create<N, I>(entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, StyleEntry)>,
    {
        let mut named: Vec<(String, Rc<StyleEntry>)> = Vec::new();
        for (name, mut entry) in entries {
            normalize(&mut entry);
            let name = name.into();
            let entry = Rc::new(entry);
            match named.binary_search_by(|(candidate, _)| candidate.cmp(&name)) {
                Ok(index) => named[index].1 = entry,
                Err(index) => named.insert(index, (name, entry)),
            }
        }
        Self {
            inner: Rc::new(StyleSheetData { entries: named }),
        }
    }

    /// Returns `true` if this sheet has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Returns the number of entries in this sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Returns the canonical entry registered under `name`, for property
    /// inspection.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&StyleEntry> {
        self.position(name)
            .map(|index| &*self.inner.entries[index].1)
    }

    /// Returns a descriptor handle for the entry registered under `name`.
    ///
    /// The handle shares the canonical entry (no copy); it is the form
    /// render code passes to [`concat`](crate::concat).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<StyleDescriptor> {
        self.position(name)
            .map(|index| StyleDescriptor::from(&self.inner.entries[index].1))
    }

    /// Returns an iterator over registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.entries.iter().map(|(name, _)| name.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.inner
            .entries
            .binary_search_by(|(candidate, _)| candidate.as_str().cmp(name))
            .ok()
    }
}

/// Returns the canonical full-bleed overlay entry: absolutely positioned,
/// zero on every edge, stacked above its siblings.
///
/// Already longhand, so it composes without registration.
#[must_use]
pub fn absolute_fill() -> StyleEntry {
    StyleEntry::new()
        .with("position", "absolute")
        .with("top", 0)
        .with("left", 0)
        .with("right", 0)
        .with("bottom", 0)
        .with("zIndex", 1)
}
