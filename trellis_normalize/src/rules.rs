// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The individual rewrite rules.
//!
//! Each rule scans a snapshot of the declaration names taken when the rule
//! starts, so names a rule inserts are not re-examined by that same rule.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use trellis_declaration::{StyleEntry, StyleValue};

/// Stand-in text for shadow components that cannot be recovered from the
/// input. Kept as a fixed literal so degenerate entries still compile to a
/// stable class name.
const MISSING: &str = "undefined";

fn key_snapshot(entry: &StyleEntry) -> Vec<String> {
    entry.keys().map(String::from).collect()
}

/// Rewrites every list value into space-joined text.
///
/// The `transform` declaration renders each step as `name(value)`; any
/// other list joins its rendered elements.
pub(crate) fn list_values(entry: &mut StyleEntry) {
    for name in key_snapshot(entry) {
        let text = match entry.get(&name) {
            Some(StyleValue::List(steps)) => {
                let rendered: Vec<String> = if name == "transform" {
                    steps.iter().map(transform_step).collect()
                } else {
                    steps.iter().map(StyleValue::render).collect()
                };
                rendered.join(" ")
            }
            _ => continue,
        };
        entry.set(name, text);
    }
}

/// A transform step is a single-function map such as `{rotate: "45deg"}`
/// and renders as `rotate(45deg)`; a multi-entry map renders every
/// function. Scalars fall back to their plain rendering.
fn transform_step(step: &StyleValue) -> String {
    match step {
        StyleValue::Map(functions) => {
            let rendered: Vec<String> = functions
                .iter()
                .map(|(name, value)| format!("{name}({})", value.render()))
                .collect();
            rendered.join(" ")
        }
        other => other.render(),
    }
}

/// Collapses the `shadow*` / `elevation*` families into one `boxShadow`.
///
/// The synthesized value is `"<width> <height> <radius> <color>"`. When a
/// truthy `shadowOpacity` is present the color becomes
/// `rgba(r, g, b, opacity)` with the channels taken from the first three
/// digit runs of the rendered `shadowColor`; otherwise the rendered color is
/// kept literally. Components that cannot be recovered degrade to
/// [`MISSING`] rather than failing.
pub(crate) fn shadow(entry: &mut StyleEntry) {
    let mut collected = StyleEntry::new();
    for name in key_snapshot(entry) {
        if name.starts_with("shadow") || name.starts_with("elevation") {
            if let Some(value) = entry.remove(&name) {
                collected.set(name, value);
            }
        }
    }
    if collected.is_empty() {
        return;
    }

    let color = match collected.get("shadowOpacity") {
        Some(opacity) if opacity.is_truthy() => {
            let source = collected
                .get("shadowColor")
                .map(StyleValue::render)
                .unwrap_or_default();
            let runs = digit_runs(&source);
            let channel = |index: usize| runs.get(index).copied().unwrap_or(MISSING);
            format!(
                "rgba({}, {}, {}, {})",
                channel(0),
                channel(1),
                channel(2),
                opacity.render()
            )
        }
        _ => collected
            .get("shadowColor")
            .map_or_else(|| String::from(MISSING), StyleValue::render),
    };

    let (width, height) = match collected.get("shadowOffset") {
        Some(StyleValue::Map(offset)) => (px(offset.get("width")), px(offset.get("height"))),
        _ => (px(None), px(None)),
    };
    let radius = px(collected.get("shadowRadius"));

    entry.set("boxShadow", format!("{width} {height} {radius} {color}"));
}

/// Renders a length component: falsy or absent values become `0px`, `em`
/// lengths pass through, everything else gains a `px` suffix.
fn px(value: Option<&StyleValue>) -> String {
    match value {
        Some(value) if value.is_truthy() => {
            let text = value.render();
            if text.ends_with("em") { text } else { text + "px" }
        }
        _ => String::from("0px"),
    }
}

fn digit_runs(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut runs = Vec::new();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index].is_ascii_digit() {
            let start = index;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                index += 1;
            }
            runs.push(&text[start..index]);
        } else {
            index += 1;
        }
    }
    runs
}

/// Expands axis shorthands: a name containing `horizontal` becomes the
/// `Left` and `Right` longhands, a name containing `vertical` becomes `Top`
/// and `Bottom`. The match is ASCII case-insensitive (the dialect spells
/// the axis `Horizontal` mid-name) and the side is appended after the
/// remainder of the name.
pub(crate) fn directional(entry: &mut StyleEntry) {
    for name in key_snapshot(entry) {
        expand_axis(entry, &name, "horizontal", "Left", "Right");
        expand_axis(entry, &name, "vertical", "Top", "Bottom");
    }
}

fn expand_axis(entry: &mut StyleEntry, name: &str, axis: &str, first: &str, second: &str) {
    let Some(at) = find_ascii_ignore_case(name, axis) else {
        return;
    };
    let Some(value) = entry.remove(name) else {
        return;
    };
    let mut prefix = String::with_capacity(name.len() - axis.len());
    prefix.push_str(&name[..at]);
    prefix.push_str(&name[at + axis.len()..]);
    entry.set(format!("{prefix}{first}"), value.clone());
    entry.set(format!("{prefix}{second}"), value);
}

fn find_ascii_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || needle.len() > bytes.len() {
        return None;
    }
    for at in 0..=bytes.len() - needle.len() {
        if bytes[at..at + needle.len()].eq_ignore_ascii_case(needle) {
            return Some(at);
        }
    }
    None
}

/// Infers `solid` border styles: from `borderWidth` for the shorthand
/// `borderStyle`, and from each `border<Direction>Color` for the matching
/// `border<Direction>Style`.
pub(crate) fn border_style(entry: &mut StyleEntry) {
    if entry.contains("borderWidth") && !entry.contains("borderStyle") {
        entry.set("borderStyle", "solid");
    }

    for name in key_snapshot(entry) {
        let Some(direction) = border_color_direction(&name) else {
            continue;
        };
        let style_name = format!("border{direction}Style");
        if !entry.contains(&style_name) {
            entry.set(style_name, "solid");
        }
    }
}

/// Matches `border<Direction>Color` where the direction is one or more
/// uppercase ASCII letters followed by one or more lowercase ones.
fn border_color_direction(name: &str) -> Option<&str> {
    let middle = name.strip_prefix("border")?.strip_suffix("Color")?;
    let bytes = middle.as_bytes();
    let upper = bytes
        .iter()
        .position(|byte| !byte.is_ascii_uppercase())
        .unwrap_or(bytes.len());
    if upper == 0 || upper == bytes.len() {
        return None;
    }
    bytes[upper..]
        .iter()
        .all(u8::is_ascii_lowercase)
        .then_some(middle)
}

/// Remaps bidirectional names: the leftmost `start` / `end` occurrence
/// (ASCII case-insensitive) is replaced with a physical side.
///
/// The side decision is intentionally asymmetric legacy behavior: `Left`
/// only when the matched text is exactly `Start`, `Right` in every other
/// case — including lowercase `start`. Downstream sheets depend on the
/// historical mapping, so this is preserved, not fixed.
pub(crate) fn start_end(entry: &mut StyleEntry) {
    for name in key_snapshot(entry) {
        let Some((at, matched)) = find_start_end(&name) else {
            continue;
        };
        let Some(value) = entry.remove(&name) else {
            continue;
        };
        let side = if matched == "Start" { "Left" } else { "Right" };
        let mut renamed = String::with_capacity(name.len());
        renamed.push_str(&name[..at]);
        renamed.push_str(side);
        renamed.push_str(&name[at + matched.len()..]);
        entry.set(renamed, value);
    }
}

fn find_start_end(name: &str) -> Option<(usize, &str)> {
    let bytes = name.as_bytes();
    for at in 0..bytes.len() {
        for token in ["end", "start"] {
            if bytes.len() - at >= token.len()
                && bytes[at..at + token.len()].eq_ignore_ascii_case(token.as_bytes())
            {
                return Some((at, &name[at..at + token.len()]));
            }
        }
    }
    None
}

const FLEX_PREFIXES: [&[u8]; 3] = [b"fl", b"al", b"ju"];

/// Sets `display: flex` when any flex/align/justify-family declaration is
/// present and `display` is not already exactly `flex`. A different
/// explicit display is overwritten.
pub(crate) fn flex_display(entry: &mut StyleEntry) {
    if let Some(StyleValue::Text(display)) = entry.get("display")
        && display == "flex"
    {
        return;
    }

    let has_flex_family = entry.keys().any(|name| {
        FLEX_PREFIXES.iter().any(|prefix| {
            name.as_bytes()
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    });
    if has_flex_family {
        entry.set("display", "flex");
    }
}
