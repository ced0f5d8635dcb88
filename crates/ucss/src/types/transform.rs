//! Transform list model.
//!
//! A `transform` declaration like `translateX(10px) rotate(45deg) scale(2)`
//! parses into an ordered list of single-operation values. Order is
//! significant and preserved; the native target applies them as an array of
//! single-key transform objects.

use crate::types::length::Length;

/// An angle in degrees.
///
/// `rad` values are converted at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    pub degrees: f64,
}

impl Angle {
    pub fn deg(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn rad(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    pub fn to_css(&self) -> String {
        format!("{}deg", self.degrees)
    }
}

/// One transform operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    TranslateX(Length),
    TranslateY(Length),
    Scale(f64),
    ScaleX(f64),
    ScaleY(f64),
    Rotate(Angle),
    RotateX(Angle),
    RotateY(Angle),
    RotateZ(Angle),
    SkewX(Angle),
    SkewY(Angle),
    Perspective(Length),
}

impl TransformOp {
    /// The CSS function name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TranslateX(_) => "translateX",
            Self::TranslateY(_) => "translateY",
            Self::Scale(_) => "scale",
            Self::ScaleX(_) => "scaleX",
            Self::ScaleY(_) => "scaleY",
            Self::Rotate(_) => "rotate",
            Self::RotateX(_) => "rotateX",
            Self::RotateY(_) => "rotateY",
            Self::RotateZ(_) => "rotateZ",
            Self::SkewX(_) => "skewX",
            Self::SkewY(_) => "skewY",
            Self::Perspective(_) => "perspective",
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::TranslateX(l) | Self::TranslateY(l) | Self::Perspective(l) => {
                format!("{}({})", self.name(), l.to_css())
            }
            Self::Scale(f) | Self::ScaleX(f) | Self::ScaleY(f) => {
                format!("{}({})", self.name(), f)
            }
            Self::Rotate(a)
            | Self::RotateX(a)
            | Self::RotateY(a)
            | Self::RotateZ(a)
            | Self::SkewX(a)
            | Self::SkewY(a) => format!("{}({})", self.name(), a.to_css()),
        }
    }
}

/// Renders a transform list back to CSS.
pub fn transforms_to_css(ops: &[TransformOp]) -> String {
    ops.iter()
        .map(TransformOp::to_css)
        .collect::<Vec<_>>()
        .join(" ")
}
