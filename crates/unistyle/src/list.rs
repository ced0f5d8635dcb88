//! Style lists: the input shape of every resolve call.
//!
//! A style list is an arbitrarily nested array of compiled styles, themes,
//! inline style objects, and empty slots. Empty slots encode conditional
//! composition (`is_active.then(...)` style); they flatten away.
//!
//! Dynamic style factories have no representation here on purpose: a
//! factory must be *called* first, and only the plain [`RawRule`] it
//! returns converts into a list entry, so an unapplied factory can never
//! silently enter a merge list.

use std::sync::Arc;

use ucss::{CompiledStyle, RawRule, Theme};

/// One entry of a style list.
#[derive(Debug, Clone)]
pub enum StyleItem {
    /// A compiled rule from `create()`.
    Compiled(Arc<CompiledStyle>),
    /// A theme scope contributing custom-property bindings.
    Theme(Arc<Theme>),
    /// An inline style object, compiled on the fly.
    Inline(RawRule),
    /// A nested list, flattened depth-first.
    List(Vec<StyleItem>),
    /// A skipped slot (conditional composition).
    None,
}

impl From<&Arc<CompiledStyle>> for StyleItem {
    fn from(style: &Arc<CompiledStyle>) -> Self {
        Self::Compiled(Arc::clone(style))
    }
}

impl From<Arc<CompiledStyle>> for StyleItem {
    fn from(style: Arc<CompiledStyle>) -> Self {
        Self::Compiled(style)
    }
}

impl From<Arc<Theme>> for StyleItem {
    fn from(theme: Arc<Theme>) -> Self {
        Self::Theme(theme)
    }
}

impl From<&Arc<Theme>> for StyleItem {
    fn from(theme: &Arc<Theme>) -> Self {
        Self::Theme(Arc::clone(theme))
    }
}

impl From<Theme> for StyleItem {
    fn from(theme: Theme) -> Self {
        Self::Theme(Arc::new(theme))
    }
}

impl From<RawRule> for StyleItem {
    fn from(rule: RawRule) -> Self {
        Self::Inline(rule)
    }
}

impl From<Vec<StyleItem>> for StyleItem {
    fn from(items: Vec<StyleItem>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<StyleItem>> From<Option<T>> for StyleItem {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(v) => v.into(),
            None => Self::None,
        }
    }
}

/// A flattened entry: what remains after nesting and empty slots go away.
#[derive(Debug, Clone)]
pub(crate) enum FlatEntry<'a> {
    Compiled(&'a Arc<CompiledStyle>),
    Theme(&'a Arc<Theme>),
    Inline(&'a RawRule),
}

/// Depth-first, left-to-right flatten preserving encounter order.
pub(crate) fn flatten(items: &[StyleItem]) -> Vec<FlatEntry<'_>> {
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, &mut out);
    out
}

fn flatten_into<'a>(items: &'a [StyleItem], out: &mut Vec<FlatEntry<'a>>) {
    for item in items {
        match item {
            StyleItem::Compiled(style) => out.push(FlatEntry::Compiled(style)),
            StyleItem::Theme(theme) => out.push(FlatEntry::Theme(theme)),
            StyleItem::Inline(rule) => {
                if !rule.is_empty() {
                    out.push(FlatEntry::Inline(rule));
                }
            }
            StyleItem::List(nested) => flatten_into(nested, out),
            StyleItem::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucss::{create, style};

    #[test]
    fn flatten_preserves_order_and_drops_empties() {
        let styles = create(
            "t",
            vec![
                ("a".into(), style! { "color": "red" }),
                ("b".into(), style! { "color": "blue" }),
            ],
        )
        .unwrap();
        let a = styles.get("a").unwrap();
        let b = styles.get("b").unwrap();

        let list = vec![
            StyleItem::from(a),
            StyleItem::None,
            StyleItem::List(vec![StyleItem::from(b), StyleItem::None]),
            StyleItem::Inline(RawRule::new()),
        ];
        let flat = flatten(&list);
        assert_eq!(flat.len(), 2);
        assert!(matches!(flat[0], FlatEntry::Compiled(s) if s.key() == a.key()));
        assert!(matches!(flat[1], FlatEntry::Compiled(s) if s.key() == b.key()));
    }
}
