//! Resolution context: the transient per-resolve-call input.

use bitflags::bitflags;
use std::collections::HashMap;

use crate::chain::ThemeChain;
use ucss::{ColorScheme, VarStore, Viewport};

bitflags! {
    /// Interaction state of the node being resolved.
    ///
    /// Supplied by the platform's pointer/focus event layer before each
    /// re-resolve. When several are active at once, branch selection uses a
    /// fixed priority: active over focus over hover.
    ///
    /// # Example
    ///
    /// ```
    /// use unistyle::Interaction;
    ///
    /// let mut state = Interaction::empty();
    /// state |= Interaction::HOVER;
    /// state |= Interaction::FOCUS;
    ///
    /// assert!(state.contains(Interaction::HOVER));
    /// assert!(!state.contains(Interaction::ACTIVE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Interaction: u8 {
        /// Pointer is over the node.
        const HOVER  = 0b0000_0001;
        /// Node has keyboard focus.
        const FOCUS  = 0b0000_0010;
        /// Node is being pressed.
        const ACTIVE = 0b0000_0100;
    }
}

/// Writing direction, used to map logical properties to physical ones on
/// the native target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Everything one resolve call consults besides the style list itself.
///
/// Constructed fresh by the renderer for each resolve call (or memoized per
/// node while inputs are unchanged); never persisted by the engine. The
/// store and theme chain are borrowed, so independent render trees each
/// carry their own.
#[derive(Debug, Clone)]
pub struct ResolveContext<'a> {
    pub interaction: Interaction,
    pub viewport: Viewport,
    /// Device font scale, applied to `rem` values.
    pub font_scale: f64,
    /// Inherited font size in pixels; the base for `em` on the native
    /// target.
    pub inherited_font_size: f64,
    pub color_scheme: ColorScheme,
    pub direction: Direction,
    /// Registered custom-property defaults.
    pub store: &'a VarStore,
    /// Ancestor theme scopes, nearest last.
    pub themes: ThemeChain<'a>,
    /// Per-call custom-property overrides; beats every theme layer.
    pub custom_properties: Option<&'a HashMap<String, String>>,
}

impl<'a> ResolveContext<'a> {
    /// A context with neutral defaults: no interaction, 16px base font,
    /// light scheme, no themes.
    pub fn new(store: &'a VarStore) -> Self {
        Self {
            interaction: Interaction::empty(),
            viewport: Viewport::default(),
            font_scale: 1.0,
            inherited_font_size: 16.0,
            color_scheme: ColorScheme::default(),
            direction: Direction::default(),
            store,
            themes: ThemeChain::empty(),
            custom_properties: None,
        }
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    pub fn with_inherited_font_size(mut self, px: f64) -> Self {
        self.inherited_font_size = px;
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_themes(mut self, themes: ThemeChain<'a>) -> Self {
        self.themes = themes;
        self
    }

    pub fn with_custom_properties(mut self, props: &'a HashMap<String, String>) -> Self {
        self.custom_properties = Some(props);
        self
    }
}
