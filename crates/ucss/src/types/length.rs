//! Length values and unit conversion.

/// The units a declared length can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Device pixels (also the unit of bare numbers on length properties).
    #[default]
    Px,
    /// Relative to the inherited font size.
    Em,
    /// Relative to the root font size (16px, scaled by the device font scale).
    Rem,
    /// Percentage of the viewport width.
    Vw,
    /// Percentage of the viewport height.
    Vh,
    /// Percentage of the smaller viewport dimension.
    Vmin,
    /// Percentage of the larger viewport dimension.
    Vmax,
    /// Percentage of the parent dimension. Never converted to pixels here;
    /// percentages pass through to the layout engine as strings.
    Percent,
    /// Absolute print units. Accepted by the parser, but only media-query
    /// matching converts them; in style values they are unsupported.
    Cm,
    Mm,
    In,
    Pt,
    Pc,
}

impl LengthUnit {
    /// CSS suffix for this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Percent => "%",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
        }
    }

    /// True for the absolute print units that style values do not support.
    pub fn is_print_unit(&self) -> bool {
        matches!(self, Self::Cm | Self::Mm | Self::In | Self::Pt | Self::Pc)
    }
}

/// The root font size every `rem` (and root `em`) is relative to.
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// A declared length: a signed value plus its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn is_percent(&self) -> bool {
        self.unit == LengthUnit::Percent
    }

    /// Renders back to a CSS length string (`10px`, `50%`, `-2em`).
    pub fn to_css(&self) -> String {
        format!("{}{}", self.value, self.unit.suffix())
    }

    /// Converts to device pixels for the native target.
    ///
    /// `em_base` is the inherited font size in pixels; `font_scale` is the
    /// device font scale applied to `rem`. Percentages and print units have
    /// no pixel value here and return `None`.
    pub fn to_px(
        &self,
        viewport_width: f64,
        viewport_height: f64,
        font_scale: f64,
        em_base: f64,
    ) -> Option<f64> {
        let px = match self.unit {
            LengthUnit::Px => self.value,
            LengthUnit::Em => self.value * em_base,
            LengthUnit::Rem => self.value * ROOT_FONT_SIZE * font_scale,
            LengthUnit::Vw => self.value * viewport_width / 100.0,
            LengthUnit::Vh => self.value * viewport_height / 100.0,
            LengthUnit::Vmin => self.value * viewport_width.min(viewport_height) / 100.0,
            LengthUnit::Vmax => self.value * viewport_width.max(viewport_height) / 100.0,
            LengthUnit::Percent => return None,
            _ => return None,
        };
        Some(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_units_convert_against_axis() {
        let l = Length::new(10.0, LengthUnit::Vw);
        assert_eq!(l.to_px(1024.0, 768.0, 1.0, 16.0), Some(102.4));
        let l = Length::new(10.0, LengthUnit::Vmin);
        assert_eq!(l.to_px(1024.0, 768.0, 1.0, 16.0), Some(76.8));
        let l = Length::new(10.0, LengthUnit::Vmax);
        assert_eq!(l.to_px(1024.0, 768.0, 1.0, 16.0), Some(102.4));
    }

    #[test]
    fn rem_uses_root_font_size_and_scale() {
        let l = Length::new(2.0, LengthUnit::Rem);
        assert_eq!(l.to_px(0.0, 0.0, 1.0, 99.0), Some(32.0));
        assert_eq!(l.to_px(0.0, 0.0, 1.5, 99.0), Some(48.0));
    }

    #[test]
    fn negative_values_keep_sign() {
        let l = Length::new(-1.5, LengthUnit::Em);
        assert_eq!(l.to_px(0.0, 0.0, 1.0, 20.0), Some(-30.0));
    }

    #[test]
    fn percent_has_no_pixel_value() {
        let l = Length::new(50.0, LengthUnit::Percent);
        assert_eq!(l.to_px(1000.0, 1000.0, 1.0, 16.0), None);
        assert_eq!(l.to_css(), "50%");
    }
}
