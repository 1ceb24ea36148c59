// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Normalize: the rewrite pipeline from mobile-UI shorthand to
//! DOM-renderable longhand.
//!
//! Style entries written in the mobile-UI dialect carry declarations a DOM
//! stylesheet cannot express directly: transform lists, `shadow*` /
//! `elevation*` families, `marginHorizontal`-style axis shorthands,
//! `marginStart`-style bidirectional names, and flex layouts that assume a
//! flex display without declaring one. [`normalize`] rewrites an entry in
//! place until only longhand declarations remain.
//!
//! # Rule order is load-bearing
//!
//! The pipeline is a fixed, ordered sequence of named [`Rule`]s, exposed via
//! [`rules`] so the order contract is visible and each rule is testable in
//! isolation:
//!
//! 1. `list-values` — list values become space-joined text; the `transform`
//!    list renders each step as `name(value)`.
//! 2. `shadow` — `shadow*` / `elevation*` declarations collapse into one
//!    `boxShadow`.
//! 3. `directional` — `…Horizontal…` becomes `…Left` / `…Right`,
//!    `…Vertical…` becomes `…Top` / `…Bottom`.
//! 4. `border-style` — border widths and directional border colors imply
//!    `solid` border styles. Runs after `directional` so expanded
//!    `border<Direction>Color` names are visible.
//! 5. `start-end` — bidirectional `Start`/`End` names remap to `Left` /
//!    `Right`. Runs after `directional`; both target `Left`/`Right` names.
//! 6. `flex-display` — flex-family declarations imply `display: flex`.
//!
//! Later rules observe names written by earlier rules. Individual rules are
//! not idempotent in isolation, but one full pass yields a canonical entry
//! on which a second pass rewrites nothing.
//!
//! Rules never fail and never drop unrecognized declarations. Malformed
//! inputs (a shadow color with no digits, an offset that is not a map)
//! degrade into best-effort output text instead of errors; producing *some*
//! class-compilable declaration always beats failing a render.
//!
//! # Example
//!
//! ```rust
//! use trellis_declaration::StyleEntry;
//! use trellis_normalize::normalize;
//!
//! let mut entry = StyleEntry::new()
//!     .with("marginHorizontal", 10)
//!     .with("flexDirection", "row");
//! normalize(&mut entry);
//!
//! assert!(!entry.contains("marginHorizontal"));
//! assert_eq!(entry.get("marginLeft").map(|v| v.render()), Some("10".into()));
//! assert_eq!(entry.get("marginRight").map(|v| v.render()), Some("10".into()));
//! assert_eq!(entry.get("display").map(|v| v.render()), Some("flex".into()));
//! ```
//!
//! # `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod rules;

use trellis_declaration::StyleEntry;

/// A named rewrite over a style entry.
///
/// Rules mutate the entry in place. A rule on its own makes no promise of
/// idempotence; the pipeline order in [`rules`] is what produces a stable
/// canonical form.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    name: &'static str,
    apply: fn(&mut StyleEntry),
}

impl Rule {
    /// Returns the rule's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the rule to `entry` in place.
    pub fn apply(&self, entry: &mut StyleEntry) {
        (self.apply)(entry);
    }
}

static RULES: [Rule; 6] = [
    Rule {
        name: "list-values",
        apply: rules::list_values,
    },
    Rule {
        name: "shadow",
        apply: rules::shadow,
    },
    Rule {
        name: "directional",
        apply: rules::directional,
    },
    Rule {
        name: "border-style",
        apply: rules::border_style,
    },
    Rule {
        name: "start-end",
        apply: rules::start_end,
    },
    Rule {
        name: "flex-display",
        apply: rules::flex_display,
    },
];

/// Returns the normalization pipeline in its required order.
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Runs the full normalization pipeline over `entry` in place.
///
/// After this returns, the entry contains no list values, no `shadow*` /
/// `elevation*` names, no `Horizontal` / `Vertical` axis shorthands, and no
/// bidirectional `Start` / `End` names. Running it again on the result is a
/// no-op.
pub fn normalize(entry: &mut StyleEntry) {
    for rule in &RULES {
        rule.apply(entry);
    }
}
