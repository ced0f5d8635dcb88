pub mod color;
pub mod length;
pub mod shadow;
pub mod transform;

pub use color::Color;
pub use length::{Length, LengthUnit, ROOT_FONT_SIZE};
pub use shadow::{Shadow, shadows_to_css};
pub use transform::{Angle, TransformOp, transforms_to_css};

use crate::media::MediaQuery;
use bitflags::bitflags;

/// A typed, parsed property value.
///
/// This is what one branch of a compiled declaration holds after the value
/// mini-languages have been parsed. Values that could not be parsed are kept
/// as [`PropValue::Unsupported`] or [`PropValue::Malformed`] so the resolver
/// can warn once and omit them without failing the whole resolve call.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// A unitless number (opacity, flexGrow, zIndex, unitless lineHeight...).
    Number(f64),
    Length(Length),
    Color(Color),
    /// An identifier that passes through untouched: `auto`, `none`,
    /// `inherit`, `unset`, `currentcolor`, `content-box`, ...
    Keyword(String),
    /// An arbitrary string value (fontFamily stacks and the like).
    Str(String),
    /// A raw value containing one or more `var()` references; substituted
    /// and re-parsed at resolve time.
    Var(String),
    Transforms(Vec<TransformOp>),
    Shadows(Vec<Shadow>),
    /// Explicit removal of the property from merged output.
    Null,
    /// A value the normalizer does not handle: warn once, omit.
    Unsupported(String),
    /// A multi-component shorthand where a single value is supported:
    /// log an error once, omit.
    Malformed(String),
}

impl PropValue {
    /// True if resolving this value needs the inherited font size.
    pub fn is_font_relative(&self) -> bool {
        match self {
            Self::Length(l) => matches!(l.unit, LengthUnit::Em | LengthUnit::Rem),
            Self::Transforms(ops) => ops.iter().any(|op| match op {
                TransformOp::TranslateX(l)
                | TransformOp::TranslateY(l)
                | TransformOp::Perspective(l) => {
                    matches!(l.unit, LengthUnit::Em | LengthUnit::Rem)
                }
                _ => false,
            }),
            _ => false,
        }
    }

    /// Renders the value as CSS text, or `None` for values that produce no
    /// output (`null`, unsupported, malformed).
    pub fn to_css_text(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(format_number(*n)),
            Self::Length(l) => Some(l.to_css()),
            Self::Color(c) => Some(c.to_css()),
            Self::Keyword(k) => Some(k.clone()),
            Self::Str(s) => Some(s.clone()),
            Self::Var(raw) => Some(raw.clone()),
            Self::Transforms(ops) => Some(if ops.is_empty() {
                "none".to_string()
            } else {
                transforms_to_css(ops)
            }),
            Self::Shadows(shadows) => Some(shadows_to_css(shadows)),
            Self::Null | Self::Unsupported(_) | Self::Malformed(_) => None,
        }
    }

    /// True if resolving this value needs the viewport dimensions.
    pub fn consults_viewport(&self) -> bool {
        let viewport_len = |l: &Length| {
            matches!(
                l.unit,
                LengthUnit::Vw | LengthUnit::Vh | LengthUnit::Vmin | LengthUnit::Vmax
            )
        };
        match self {
            Self::Length(l) => viewport_len(l),
            Self::Transforms(ops) => ops.iter().any(|op| match op {
                TransformOp::TranslateX(l)
                | TransformOp::TranslateY(l)
                | TransformOp::Perspective(l) => viewport_len(l),
                _ => false,
            }),
            _ => false,
        }
    }
}

/// Formats a number the way CSS serializes it (no trailing `.0`).
pub fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// A pseudo-state branch map: `default` plus optional interaction branches.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoValue {
    pub default: PropValue,
    pub hover: Option<PropValue>,
    pub focus: Option<PropValue>,
    pub active: Option<PropValue>,
}

/// A media branch map: `default` plus query branches in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaValue {
    pub default: PropValue,
    pub branches: Vec<(MediaQuery, PropValue)>,
}

/// One compiled declaration: static, pseudo-keyed, or media-keyed.
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledValue {
    Static(PropValue),
    Pseudo(PseudoValue),
    Media(MediaValue),
}

impl CompiledValue {
    /// Iterates every branch value this declaration can produce.
    pub fn branch_values(&self) -> Vec<&PropValue> {
        match self {
            Self::Static(v) => vec![v],
            Self::Pseudo(p) => {
                let mut out = vec![&p.default];
                out.extend(p.hover.iter());
                out.extend(p.focus.iter());
                out.extend(p.active.iter());
                out
            }
            Self::Media(m) => {
                let mut out = vec![&m.default];
                out.extend(m.branches.iter().map(|(_, v)| v));
                out
            }
        }
    }
}

bitflags! {
    /// Which resolution-context fields a compiled style actually consults.
    ///
    /// Memoization keys only include the context fields whose flag is set,
    /// so a cache entry for a style with no media queries is not invalidated
    /// by viewport changes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Features: u8 {
        /// Has at least one pseudo-state branch.
        const PSEUDO   = 0b0000_0001;
        /// Consults viewport dimensions (media query or viewport units).
        const VIEWPORT = 0b0000_0010;
        /// Consults the color scheme.
        const SCHEME   = 0b0000_0100;
        /// Consults font scale or inherited font size (em/rem values).
        const FONT     = 0b0000_1000;
        /// Contains var() references (consults the theme chain).
        const VARS     = 0b0001_0000;
    }
}

/// Stable identity of a compiled style, used for merge-order dedup and as a
/// memoization key component. Stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleKey(pub(crate) u64);

impl StyleKey {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// One compiled property: name, branch values, and the atomic class that
/// covers it on the DOM target.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledProp {
    /// camelCase property name as declared (`backgroundColor`).
    pub name: String,
    pub value: CompiledValue,
    /// Atomic class name for the DOM target. `None` for `null` declarations,
    /// which produce no CSS.
    pub class_name: Option<String>,
}

/// The immutable output of `create()` for one named style rule.
///
/// Never mutated after creation; shared behind `Arc` wherever it appears in
/// a merge list.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledStyle {
    pub(crate) key: StyleKey,
    pub(crate) source: String,
    pub(crate) props: Vec<CompiledProp>,
    pub(crate) css_text: String,
    pub(crate) features: Features,
}

impl CompiledStyle {
    /// Stable identity for merge-order/dedup and cache keys.
    pub fn key(&self) -> StyleKey {
        self.key
    }

    /// Debug source path, e.g. `buttons.root`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiled declarations in declared order.
    pub fn props(&self) -> &[CompiledProp] {
        &self.props
    }

    /// The generated stylesheet fragment for the DOM target: one atomic
    /// rule per property branch, including pseudo selectors and media
    /// blocks.
    pub fn css_text(&self) -> &str {
        &self.css_text
    }

    /// Context fields this style consults.
    pub fn features(&self) -> Features {
        self.features
    }
}
