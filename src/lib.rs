//! Facade crate re-exporting the compile-time ([`ucss`]) and runtime
//! ([`unistyle`]) halves of the style system.
//!
//! Most hosts depend on the member crates directly; this crate exists so a
//! single dependency pulls in the whole pipeline.
//!
//! ```rust
//! use unistyle_rs::{ResolveContext, StyleItem, VarStore, create, resolve_native, style};
//!
//! let styles = create(
//!     "demo",
//!     vec![("root".into(), style! { "color": "red", "width": "10vw" })],
//! )
//! .unwrap();
//!
//! let store = VarStore::new();
//! let ctx = ResolveContext::new(&store)
//!     .with_viewport(unistyle_rs::Viewport::new(1024.0, 768.0));
//! let resolved = resolve_native(&[StyleItem::from(styles.get("root").unwrap())], &ctx);
//! assert_eq!(resolved.num("width"), Some(102.4));
//! ```

pub use ucss::{
    Color, ColorScheme, CompiledStyle, Keyframes, Length, LengthUnit, MediaQuery, PropValue,
    RawRule, RawValue, Shadow, StyleKey, Styles, Theme, TransformOp, UcssError, VarGroup,
    VarStore, VarToken, Viewport, create, create_theme, define_vars, keyframes, style,
    style_value,
};
pub use unistyle::{
    Direction, DomProps, InheritedStyle, Interaction, NativeStyle, NativeValue, ResolveCache,
    ResolveContext, StyleItem, ThemeChain, resolve_dom, resolve_inherited, resolve_native,
};
