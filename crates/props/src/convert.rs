//! Value conversion, selected per property name.
//!
//! Each supported property belongs to one conversion family. Dispatch is a
//! tagged enum rather than a string switch, so the supported set stays
//! exhaustive under `match`.

use suistyle_core::naming::{color_token, spacing_token};
use suistyle_core::PropValue;

/// Conversion family of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// width/height family: bare numbers are percent intents
    Dimension,
    /// color properties: theme color names become token references
    Color,
    /// spacing scale properties: small values become token references
    Spacing,
    /// everything else passes through untouched
    Passthrough,
}

impl PropKind {
    /// Selects the conversion family for a hyphenated property name.
    pub fn of(prop_name: &str) -> PropKind {
        match prop_name {
            "width" | "min-width" | "max-width" | "height" | "min-height" | "max-height" => {
                PropKind::Dimension
            }

            "color" | "background-color" | "border-color" => PropKind::Color,

            "padding" | "margin" | "top" | "bottom" | "left" | "right" | "border-width"
            | "border-top" | "border-bottom" | "border-left" | "border-right" | "line-height"
            | "font-size" => PropKind::Spacing,

            _ => PropKind::Passthrough,
        }
    }

    /// Converts a scalar prop value into its final CSS value text.
    ///
    /// Lists fall back to comma-joined passthrough; responsive expansion
    /// converts elements one by one before this is ever called on a list.
    pub fn convert(&self, value: &PropValue, namespace: &str) -> String {
        if value.is_list() {
            return value.to_css();
        }
        match self {
            PropKind::Dimension => to_percent(value),
            PropKind::Color => to_color_token(value, namespace),
            PropKind::Spacing => to_spacing_token(value, namespace),
            PropKind::Passthrough => value.to_css(),
        }
    }
}

/// Numbers become percentages; strings only when they parse to <= 1 and
/// carry no letters (so "100px", "10em", "50%" pass through).
fn to_percent(value: &PropValue) -> String {
    match value {
        PropValue::Number(n) => percent(*n),
        PropValue::Text(s) => match parse_float_prefix(s) {
            Some(n) if n <= 1.0 && !s.chars().any(|c| c.is_ascii_alphabetic()) => percent(n),
            _ => s.clone(),
        },
        PropValue::List(_) => value.to_css(),
    }
}

fn percent(n: f64) -> String {
    format!("{}%", (n * 100.0).floor() as i64)
}

/// Theme color names (no `#`, `hsl`, `rgb` in them) become
/// `var(--{ns}-colors-{name})`; literal CSS colors pass through.
fn to_color_token(value: &PropValue, namespace: &str) -> String {
    match value {
        PropValue::Text(s) if !s.contains('#') && !s.contains("hsl") && !s.contains("rgb") => {
            color_token(namespace, s)
        }
        _ => value.to_css(),
    }
}

/// Values on the spacing scale (<= 9, not a `px` literal) become
/// `var(--{ns}-spacing-{value})`; larger values and unit strings pass through.
fn to_spacing_token(value: &PropValue, namespace: &str) -> String {
    let on_scale = match value {
        PropValue::Number(n) => *n <= 9.0,
        PropValue::Text(s) => {
            !s.contains("px") && parse_int_prefix(s).is_some_and(|n| n <= 9)
        }
        PropValue::List(_) => false,
    };
    if on_scale {
        spacing_token(namespace, &value.to_css())
    } else {
        value.to_css()
    }
}

/// `parseFloat` semantics: skip leading whitespace, read the longest numeric
/// prefix (sign, digits, one dot). `None` when no digits are found.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

/// `parseInt` semantics: skip leading whitespace, read a signed integer
/// prefix. `None` when no digits are found (or the prefix overflows).
fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}
