//! Author-declared style values, before compilation.
//!
//! A [`RawRule`] is an ordered list of property declarations, the Rust
//! equivalent of one style-object literal. Declaration order is preserved
//! because later declarations shadow earlier ones when rules are merged.
//!
//! Values are untyped at this stage: classification into lengths, colors,
//! transforms and so on happens in the compiler. A value may also be a
//! branch map carrying a `default` branch plus pseudo-class
//! (`:hover`/`:focus`/`:active`) or `@media (...)` branches.
//!
//! ## Example
//!
//! ```rust
//! use ucss::{style, RawRule, RawValue};
//!
//! let rule = style! {
//!     "backgroundColor": { "default": "white", ":hover": "blue" },
//!     "marginTop": "10px",
//!     "opacity": 0.5,
//! };
//! assert_eq!(rule.len(), 3);
//! ```

/// One untyped declared value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A bare number (unitless, or a pixel count depending on the property).
    Num(f64),
    /// A string value: `"10px"`, `"red"`, `"var(--x)"`, `"translateX(2px)"`.
    Str(String),
    /// Explicit removal: the property is deleted from the merged output.
    Null,
    /// A branch map: `default` plus pseudo-class or media-query branches.
    Branches(Vec<(String, RawValue)>),
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        Self::Num(v as f64)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// An ordered set of property declarations for one rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRule {
    decls: Vec<(String, RawValue)>,
}

impl RawRule {
    /// Creates an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, builder style. A property declared twice keeps
    /// only the later value.
    pub fn set(mut self, property: &str, value: impl Into<RawValue>) -> Self {
        self.push(property, value);
        self
    }

    /// Adds a declaration in place.
    pub fn push(&mut self, property: &str, value: impl Into<RawValue>) {
        let value = value.into();
        if let Some(slot) = self.decls.iter_mut().find(|(p, _)| p == property) {
            slot.1 = value;
        } else {
            self.decls.push((property.to_string(), value));
        }
    }

    /// Iterates declarations in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, RawValue)> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl FromIterator<(String, RawValue)> for RawRule {
    fn from_iter<T: IntoIterator<Item = (String, RawValue)>>(iter: T) -> Self {
        let mut rule = Self::new();
        for (p, v) in iter {
            rule.push(&p, v);
        }
        rule
    }
}

/// Builds a [`RawRule`] from a CSS-object-like literal.
///
/// ```rust
/// use ucss::style;
///
/// let rule = style! {
///     "color": "red",
///     "paddingTop": { "default": 8, "@media (min-width: 600px)": 16 },
/// };
/// assert_eq!(rule.len(), 2);
/// ```
#[macro_export]
macro_rules! style {
    ( $( $prop:literal : $val:tt ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut rule = $crate::RawRule::new();
        $( rule.push($prop, $crate::style_value!($val)); )*
        rule
    }};
}

/// Internal helper for [`style!`]: converts one literal into a [`RawValue`].
#[macro_export]
macro_rules! style_value {
    ( { $( $k:literal : $v:tt ),* $(,)? } ) => {
        $crate::RawValue::Branches(vec![
            $( ($k.to_string(), $crate::style_value!($v)) ),*
        ])
    };
    ( null ) => {
        $crate::RawValue::Null
    };
    ( $e:expr ) => {
        $crate::RawValue::from($e)
    };
}
