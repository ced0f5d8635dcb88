//! # Unistyle - runtime style resolution
//!
//! The runtime half of the cross-target style system: given an ordered list
//! of compiled styles, inline styles, and theme scopes, plus the current
//! resolution context (interaction state, viewport, font scale, color
//! scheme, theme chain), produce the final style payload for one rendered
//! node.
//!
//! Resolution is synchronous, deterministic, and side-effect-free apart
//! from one-time diagnostics: a bad declaration degrades to an omitted
//! property, never a failed render pass.
//!
//! ## Targets
//!
//! - [`resolve_dom`] returns class names, inline style entries (including
//!   theme custom-property bindings), and a debug source string.
//! - [`resolve_native`] returns a flat object of primitive values, with
//!   transforms as an ordered operation array.
//! - [`resolve_inherited`] wraps the native path with top-down inheritance
//!   of text/theme properties.
//!
//! ## Example
//!
//! ```rust
//! use ucss::{VarStore, create, style};
//! use unistyle::{ResolveContext, StyleItem, resolve_native};
//!
//! let styles = create(
//!     "card",
//!     vec![("root".into(), style! { "marginTop": "2rem", "opacity": 0.9 })],
//! )
//! .unwrap();
//!
//! let store = VarStore::new();
//! let ctx = ResolveContext::new(&store);
//! let resolved = resolve_native(&[StyleItem::from(styles.get("root").unwrap())], &ctx);
//! assert_eq!(resolved.num("marginTop"), Some(32.0));
//! ```

pub mod chain;
pub mod context;
pub mod dom;
pub mod inherit;
pub mod list;
pub mod memo;
pub mod native;
mod resolve;
mod warn;

pub use chain::ThemeChain;
pub use context::{Direction, Interaction, ResolveContext};
pub use dom::{DomProps, resolve_dom};
pub use inherit::{INHERITED_PROPERTIES, InheritedStyle, resolve_inherited};
pub use list::StyleItem;
pub use memo::ResolveCache;
pub use native::{NativeStyle, NativeValue, resolve_native};
