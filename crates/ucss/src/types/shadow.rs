//! Box and text shadow model.

use crate::types::color::Color;
use crate::types::length::Length;

/// One shadow in a (possibly comma-separated) shadow list.
///
/// Missing blur/spread default to zero; a missing color defaults to black,
/// matching the browsers' computed-value behavior for the supported subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_x: Length,
    pub offset_y: Length,
    pub blur: Length,
    pub spread: Length,
    pub color: Color,
    pub inset: bool,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset_x: Length::px(0.0),
            offset_y: Length::px(0.0),
            blur: Length::px(0.0),
            spread: Length::px(0.0),
            color: Color::rgb(0, 0, 0),
            inset: false,
        }
    }
}

impl Shadow {
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        if self.inset {
            out.push_str("inset ");
        }
        out.push_str(&format!(
            "{} {} {} {} {}",
            self.offset_x.to_css(),
            self.offset_y.to_css(),
            self.blur.to_css(),
            self.spread.to_css(),
            self.color.to_css()
        ));
        out
    }
}

/// Renders a shadow list back to CSS.
pub fn shadows_to_css(shadows: &[Shadow]) -> String {
    shadows
        .iter()
        .map(Shadow::to_css)
        .collect::<Vec<_>>()
        .join(", ")
}
