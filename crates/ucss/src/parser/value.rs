//! Per-property value classification.
//!
//! Properties are stringly-named (camelCase, as authored) but each one has a
//! value kind that drives which mini-language its text parses through. The
//! compiler only validates value *shape*; restricting the property set is a
//! lint concern outside this crate.

use crate::parser::shadow::parse_shadows;
use crate::parser::transform::parse_transforms;
use crate::parser::units::parse_length;
use crate::parser::varref::{contains_var, find_var};
use crate::raw::RawValue;
use crate::types::{Color, Length, PropValue};

/// The value mini-language a property uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Color,
    Length,
    Number,
    Transform,
    Shadow,
    Animation,
    Other,
}

/// Classifies a camelCase property name into its value kind.
pub fn prop_kind(name: &str) -> PropKind {
    match name {
        "transform" => PropKind::Transform,
        "boxShadow" | "textShadow" => PropKind::Shadow,
        "animationName" => PropKind::Animation,
        "opacity" | "zIndex" | "flex" | "flexGrow" | "flexShrink" | "order" | "aspectRatio"
        | "fontWeight" => PropKind::Number,
        "color" => PropKind::Color,
        _ if name.ends_with("Color") => PropKind::Color,
        _ if is_length_prop(name) => PropKind::Length,
        _ => PropKind::Other,
    }
}

fn is_length_prop(name: &str) -> bool {
    matches!(
        name,
        "width"
            | "height"
            | "minWidth"
            | "minHeight"
            | "maxWidth"
            | "maxHeight"
            | "top"
            | "right"
            | "bottom"
            | "left"
            | "fontSize"
            | "lineHeight"
            | "letterSpacing"
            | "textIndent"
            | "borderRadius"
            | "borderWidth"
            | "outlineWidth"
            | "outlineOffset"
            | "gap"
            | "rowGap"
            | "columnGap"
            | "flexBasis"
    ) || name.starts_with("margin")
        || name.starts_with("padding")
        || name.starts_with("inset")
        || (name.starts_with("border") && (name.ends_with("Width") || name.ends_with("Radius")))
}

/// Keywords that pass through every value kind untouched.
fn is_global_keyword(s: &str) -> bool {
    matches!(s, "inherit" | "unset" | "initial" | "auto" | "none" | "currentcolor")
}

/// Parses one raw declared value for the given property into a typed
/// [`PropValue`].
///
/// Never fails: values the normalizer cannot handle become
/// [`PropValue::Unsupported`] (warn + omit at resolve) and multi-component
/// shorthands become [`PropValue::Malformed`] (error + omit at resolve).
pub fn parse_value(prop: &str, raw: &RawValue) -> PropValue {
    match raw {
        RawValue::Null => PropValue::Null,
        RawValue::Num(n) => parse_number_value(prop, *n),
        RawValue::Str(s) => parse_string_value(prop, s),
        // Branch maps are unwrapped by the compiler before reaching here.
        RawValue::Branches(_) => PropValue::Unsupported("nested branch map".to_string()),
    }
}

fn parse_number_value(prop: &str, n: f64) -> PropValue {
    match prop_kind(prop) {
        // Unitless lineHeight is a multiplier of the font size, never px.
        PropKind::Length if prop != "lineHeight" => PropValue::Length(Length::px(n)),
        _ => PropValue::Number(n),
    }
}

fn parse_string_value(prop: &str, s: &str) -> PropValue {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return PropValue::Unsupported(s.to_string());
    }

    if contains_var(trimmed) {
        // Validate that the reference itself is well formed; substitution
        // happens at resolve time against the active theme chain.
        return match find_var(trimmed) {
            Some(_) => PropValue::Var(trimmed.to_string()),
            None => PropValue::Unsupported(s.to_string()),
        };
    }

    if is_global_keyword(&trimmed.to_lowercase()) {
        return PropValue::Keyword(trimmed.to_lowercase());
    }

    // The literal string "0" normalizes to the number 0.
    if trimmed == "0" {
        return parse_number_value(prop, 0.0);
    }

    match prop_kind(prop) {
        PropKind::Color => match Color::parse(trimmed) {
            Ok(c) => PropValue::Color(c),
            Err(_) => PropValue::Unsupported(s.to_string()),
        },
        PropKind::Length => parse_length_value(prop, trimmed),
        PropKind::Number => match trimmed.parse::<f64>() {
            Ok(n) => PropValue::Number(n),
            // fontWeight and friends also take keywords (bold, normal).
            Err(_) if trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '-') => {
                PropValue::Keyword(trimmed.to_string())
            }
            Err(_) => PropValue::Unsupported(s.to_string()),
        },
        PropKind::Transform => {
            let (ops, dropped) = parse_transforms(trimmed);
            if dropped > 0 {
                crate::warn::warn_once(format!(
                    "transform `{trimmed}`: {dropped} segment(s) dropped"
                ));
            }
            PropValue::Transforms(ops)
        }
        PropKind::Shadow => match parse_shadows(trimmed) {
            Some(shadows) => PropValue::Shadows(shadows),
            None => PropValue::Unsupported(s.to_string()),
        },
        PropKind::Animation => PropValue::Str(trimmed.to_string()),
        PropKind::Other => {
            if let Ok(n) = trimmed.parse::<f64>() {
                PropValue::Number(n)
            } else if trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            {
                PropValue::Keyword(trimmed.to_string())
            } else {
                PropValue::Str(trimmed.to_string())
            }
        }
    }
}

fn parse_length_value(prop: &str, trimmed: &str) -> PropValue {
    // Multi-component shorthands ("0 auto") are not supported: each side
    // has its own longhand property.
    if trimmed.split_whitespace().count() > 1 {
        return PropValue::Malformed(format!("{prop}: {trimmed}"));
    }

    // Unitless lineHeight multiplier, as a string.
    if prop == "lineHeight" {
        if let Ok(n) = trimmed.parse::<f64>() {
            return PropValue::Number(n);
        }
    }

    match parse_length(trimmed) {
        Ok((rest, l)) if rest.trim().is_empty() => {
            if l.unit.is_print_unit() {
                // Print units only convert inside media-query matching.
                PropValue::Unsupported(trimmed.to_string())
            } else {
                PropValue::Length(l)
            }
        }
        _ => PropValue::Unsupported(trimmed.to_string()),
    }
}

/// camelCase property name to its kebab-case CSS form.
pub fn css_name(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len() + 4);
    for c in prop.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
