//! Inheritance resolver for the native target.
//!
//! The DOM inherits text properties through the CSS cascade; the native
//! target has no cascade, so a fixed allow-list of text and theme
//! properties propagates down the render tree explicitly. Each node merges
//! its ancestor's *resolved* values underneath its own, then its own
//! overrides win.
//!
//! Resolution is strictly top-down, one level at a time: a child's
//! `em`-based values compute against the parent's already-resolved pixel
//! font size (never a declared, unresolved one), so the walk can never run
//! bottom-up or in a single global pass.

use crate::context::ResolveContext;
use crate::list::StyleItem;
use crate::native::{NativeStyle, NativeValue, resolve_native};

/// Properties that propagate from ancestor to descendant resolved styles.
pub const INHERITED_PROPERTIES: &[&str] = &[
    "color",
    "cursor",
    "direction",
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontVariant",
    "fontWeight",
    "letterSpacing",
    "lineHeight",
    "textAlign",
    "textDecorationColor",
    "textDecorationLine",
    "textDecorationStyle",
    "textIndent",
    "textTransform",
    "whiteSpace",
];

fn is_inherited(prop: &str) -> bool {
    INHERITED_PROPERTIES.contains(&prop)
}

/// The resolved inheritable snapshot of an ancestor.
///
/// Carries resolved values only: font size is pixels, colors are final
/// strings. Built by [`resolve_inherited`] for each node and handed to that
/// node's children.
#[derive(Debug, Clone, PartialEq)]
pub struct InheritedStyle {
    font_size: f64,
    values: Vec<(String, NativeValue)>,
}

impl Default for InheritedStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            values: Vec::new(),
        }
    }
}

impl InheritedStyle {
    /// The render-root snapshot: base font size scaled by the device font
    /// scale, nothing else inherited.
    pub fn root(font_scale: f64) -> Self {
        Self {
            font_size: 16.0 * font_scale,
            values: Vec::new(),
        }
    }

    /// The ancestor's resolved font size in pixels.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Looks up an inherited resolved value.
    pub fn get(&self, prop: &str) -> Option<&NativeValue> {
        self.values
            .iter()
            .find(|(name, _)| name == prop)
            .map(|(_, v)| v)
    }

    fn set(&mut self, prop: &str, value: NativeValue) {
        match self.values.iter_mut().find(|(name, _)| *name == prop) {
            Some(slot) => slot.1 = value,
            None => self.values.push((prop.to_string(), value)),
        }
    }
}

/// Resolves one node's style list with inheritance folded in.
///
/// Returns the node's final native style (ancestor-inherited values
/// underneath its own) and the snapshot its children inherit. The
/// `inherit` and `unset` keywords force the ancestor's computed value even
/// when the node's own list declares one, which is how a default style
/// (say, a heading's built-in bold weight) gets overridden back to the
/// ancestor's weight.
pub fn resolve_inherited(
    list: &[StyleItem],
    parent: &InheritedStyle,
    ctx: &ResolveContext<'_>,
) -> (NativeStyle, InheritedStyle) {
    let node_ctx = ctx.clone().with_inherited_font_size(parent.font_size);
    let own = resolve_native(list, &node_ctx);

    // Start from the ancestor's inheritable values, then overlay the node's
    // own resolved properties.
    let mut style = NativeStyle::default();
    for (prop, value) in &parent.values {
        style.upsert(prop.clone(), value.clone());
    }

    for (prop, value) in own.iter() {
        match value {
            NativeValue::Str(k) if k == "inherit" || k == "unset" => {
                // Forced inheritance: take the ancestor's computed value,
                // or drop the property when there is none.
                match parent.get(prop) {
                    Some(inherited) => style.upsert(prop.clone(), inherited.clone()),
                    None => style.remove(prop),
                }
            }
            _ => style.upsert(prop.clone(), value.clone()),
        }
    }

    // The child snapshot: inherited values updated by this node's own
    // allow-listed properties.
    let mut snapshot = InheritedStyle {
        font_size: match style.get("fontSize") {
            Some(NativeValue::Num(px)) => *px,
            _ => parent.font_size,
        },
        values: parent.values.clone(),
    };
    for (prop, value) in style.iter() {
        if is_inherited(prop) {
            snapshot.set(prop, value.clone());
        }
    }

    (style, snapshot)
}
