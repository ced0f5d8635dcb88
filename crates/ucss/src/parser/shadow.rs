//! Shadow mini-language parsing.
//!
//! `0 2px 4px rgba(0,0,0,0.5), inset 0 0 1px red` parses into a
//! [`Shadow`] list. Shadows split on top-level commas (commas inside
//! `rgb()`/`rgba()` do not split).

use crate::parser::units::parse_length;
use crate::types::color::Color;
use crate::types::shadow::Shadow;

/// Parses a comma-separated shadow list. Returns `None` when any shadow in
/// the list fails to parse (the declaration is unsupported as a whole).
pub fn parse_shadows(input: &str) -> Option<Vec<Shadow>> {
    split_top_level_commas(input)
        .into_iter()
        .map(|part| parse_shadow(part.trim()))
        .collect()
}

fn parse_shadow(input: &str) -> Option<Shadow> {
    let mut shadow = Shadow::default();
    let mut lengths = Vec::new();
    let mut saw_color = false;

    for token in split_tokens(input) {
        if token == "inset" {
            shadow.inset = true;
            continue;
        }
        if let Ok((rest, l)) = parse_length(token) {
            if rest.trim().is_empty() {
                lengths.push(l);
                continue;
            }
        }
        if let Ok(color) = Color::parse(token) {
            if saw_color {
                return None;
            }
            shadow.color = color;
            saw_color = true;
            continue;
        }
        return None;
    }

    // offset-x and offset-y are required; blur and spread optional.
    if lengths.len() < 2 || lengths.len() > 4 {
        return None;
    }
    shadow.offset_x = lengths[0];
    shadow.offset_y = lengths[1];
    if let Some(blur) = lengths.get(2) {
        shadow.blur = *blur;
    }
    if let Some(spread) = lengths.get(3) {
        shadow.spread = *spread;
    }
    Some(shadow)
}

/// Splits on commas outside parentheses.
fn split_top_level_commas(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Splits on whitespace outside parentheses, so `rgba(0, 0, 0, 0.5)` stays
/// one token.
fn split_tokens(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in input.char_indices() {
        match c {
            '(' => {
                depth += 1;
                if start.is_none() {
                    start = Some(i);
                }
            }
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&input[s..i]);
                }
            }
            _ => {
                if start.is_none() {
                    start = Some(i);
                }
            }
        }
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::length::Length;

    #[test]
    fn basic_shadow() {
        let shadows = parse_shadows("0 2px 4px rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(shadows.len(), 1);
        let s = shadows[0];
        assert_eq!(s.offset_x, Length::px(0.0));
        assert_eq!(s.offset_y, Length::px(2.0));
        assert_eq!(s.blur, Length::px(4.0));
        assert_eq!(s.spread, Length::px(0.0));
        assert!((s.color.a - 0.5).abs() < 0.01);
        assert!(!s.inset);
    }

    #[test]
    fn shadow_list_splits_outside_parens() {
        let shadows = parse_shadows("1px 1px red, inset 0 0 2px 1px #000").unwrap();
        assert_eq!(shadows.len(), 2);
        assert!(shadows[1].inset);
        assert_eq!(shadows[1].spread, Length::px(1.0));
    }

    #[test]
    fn malformed_shadow_fails_whole_list() {
        assert!(parse_shadows("banana").is_none());
        assert!(parse_shadows("1px").is_none());
        assert!(parse_shadows("1px 1px red, nope").is_none());
    }
}
