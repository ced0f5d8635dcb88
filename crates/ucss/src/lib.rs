//! # UCSS - Universal CSS-subset style compiler
//!
//! The compile-time half of a cross-target style system: author-declared
//! style objects (a fixed CSS subset with custom properties, pseudo-class
//! and media-query branches, and unit values) compile once, at module
//! evaluation, into immutable [`CompiledStyle`] values that both a DOM
//! renderer (atomic class names + generated stylesheet text) and a native
//! renderer (typed primitive values) consume.
//!
//! ## Quick Start
//!
//! ```rust
//! use ucss::{create, style};
//!
//! let styles = create(
//!     "buttons",
//!     vec![(
//!         "root".into(),
//!         style! {
//!             "backgroundColor": { "default": "white", ":hover": "blue" },
//!             "marginTop": "10px",
//!             "width": { "default": "100%", "@media (min-width: 600px)": "50%" },
//!         },
//!     )],
//! )
//! .expect("valid style map");
//!
//! let root = styles.get("root").expect("rule exists");
//! assert!(root.css_text().contains(":hover"));
//! ```
//!
//! ## Supported Values
//!
//! - Lengths: `px`, `em`, `rem`, `vw`, `vh`, `vmin`, `vmax`, `%`, bare
//!   numbers (device pixels)
//! - Colors: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, named, `transparent`
//! - `var(--name[, fallback])` references, nestable inside fallbacks
//! - Transform lists: `translateX/Y`, `scale(X/Y)`, `rotate(X/Y/Z)`,
//!   `skewX/Y`, `perspective`
//! - Shadow lists for `boxShadow`/`textShadow`
//!
//! ## Theming
//!
//! [`define_vars`] declares a token group with defaults; [`create_theme`]
//! builds scoped overrides validated against the group. Defaults live in an
//! explicitly-constructed [`VarStore`], never in ambient global state.
//!
//! ## Modules
//!
//! - [`compile`]: `create` and `keyframes`
//! - [`vars`]: token groups, themes, the property store
//! - [`parser`]: value mini-language parsers
//! - [`media`]: media query subset
//! - [`types`]: the typed value model
//! - [`error`]: construction-time error types

pub mod compile;
pub mod error;
pub mod media;
pub mod parser;
pub mod raw;
pub mod types;
pub mod vars;
mod warn;

pub use compile::{Keyframes, StyleFactory, Styles, compile_rule, create, keyframes};
pub use error::UcssError;
pub use media::{ColorScheme, MediaQuery, Orientation, Viewport};
pub use raw::{RawRule, RawValue};
pub use types::{
    Angle, Color, CompiledProp, CompiledStyle, CompiledValue, Features, Length, LengthUnit,
    MediaValue, PropValue, PseudoValue, Shadow, StyleKey, TransformOp,
};
pub use vars::{Theme, VarGroup, VarStore, VarToken, VarValue, create_theme, define_vars};
