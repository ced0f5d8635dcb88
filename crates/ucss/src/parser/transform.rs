//! Transform mini-language parsing.
//!
//! `translateX(10px) rotate(45deg) scale(2)` parses into an ordered
//! [`TransformOp`] list. Unknown function names and malformed segments are
//! dropped; a fully invalid or empty string yields the empty list, never an
//! error, so transform values are always safe to interpolate against.

use crate::parser::units::{parse_angle, parse_length, parse_number};
use crate::types::transform::TransformOp;

/// Parses a transform list, dropping segments that do not parse.
///
/// Returns the list plus the number of dropped segments so the caller can
/// warn.
pub fn parse_transforms(input: &str) -> (Vec<TransformOp>, usize) {
    let mut ops = Vec::new();
    let mut dropped = 0usize;
    let mut rest = input.trim();

    while !rest.is_empty() {
        let Some(open) = rest.find('(') else {
            // Trailing text with no call syntax.
            dropped += 1;
            break;
        };
        let Some(close_rel) = rest[open..].find(')') else {
            dropped += 1;
            break;
        };
        let close = open + close_rel;

        let name = rest[..open].trim();
        let arg = rest[open + 1..close].trim();
        match parse_op(name, arg) {
            Some(op) => ops.push(op),
            None => dropped += 1,
        }

        rest = rest[close + 1..].trim_start();
    }

    (ops, dropped)
}

fn parse_op(name: &str, arg: &str) -> Option<TransformOp> {
    let length = |s: &str| match parse_length(s) {
        Ok((rest, l)) if rest.trim().is_empty() => Some(l),
        _ => None,
    };
    let angle = |s: &str| match parse_angle(s) {
        Ok((rest, a)) if rest.trim().is_empty() => Some(a),
        _ => None,
    };
    let number = |s: &str| match parse_number(s.trim()) {
        Ok((rest, n)) if rest.trim().is_empty() => Some(n),
        _ => None,
    };

    let op = match name {
        "translateX" => TransformOp::TranslateX(length(arg)?),
        "translateY" => TransformOp::TranslateY(length(arg)?),
        "scale" => TransformOp::Scale(number(arg)?),
        "scaleX" => TransformOp::ScaleX(number(arg)?),
        "scaleY" => TransformOp::ScaleY(number(arg)?),
        "rotate" => TransformOp::Rotate(angle(arg)?),
        "rotateX" => TransformOp::RotateX(angle(arg)?),
        "rotateY" => TransformOp::RotateY(angle(arg)?),
        "rotateZ" => TransformOp::RotateZ(angle(arg)?),
        "skewX" => TransformOp::SkewX(angle(arg)?),
        "skewY" => TransformOp::SkewY(angle(arg)?),
        "perspective" => TransformOp::Perspective(length(arg)?),
        _ => return None,
    };
    Some(op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::length::Length;
    use crate::types::transform::Angle;

    #[test]
    fn ordered_list() {
        let (ops, dropped) = parse_transforms("translateX(10px) rotate(45deg) scale(2)");
        assert_eq!(dropped, 0);
        assert_eq!(
            ops,
            vec![
                TransformOp::TranslateX(Length::px(10.0)),
                TransformOp::Rotate(Angle::deg(45.0)),
                TransformOp::Scale(2.0),
            ]
        );
    }

    #[test]
    fn malformed_segments_are_dropped() {
        let (ops, dropped) = parse_transforms("wiggle(3) translateY(-2em) scale(huge)");
        assert_eq!(ops, vec![TransformOp::TranslateY(Length::new(
            -2.0,
            crate::types::length::LengthUnit::Em
        ))]);
        assert_eq!(dropped, 2);
    }

    #[test]
    fn fully_invalid_input_is_the_empty_list() {
        let (ops, dropped) = parse_transforms("not a transform");
        assert!(ops.is_empty());
        assert_eq!(dropped, 1);
        let (ops, dropped) = parse_transforms("");
        assert!(ops.is_empty());
        assert_eq!(dropped, 0);
    }
}
