//! The theme chain: linked override frames.
//!
//! Theme scopes nest with the render tree. A lookup for a token walks from
//! the nearest frame outward, then the legacy whole-tree provider frame,
//! then the registered default. The chain is a parent-pointer list of
//! borrowed frames, never flattened into one map: flattening with shared
//! state would let a nested theme leak overrides across sibling subtrees.
//!
//! Pushing a frame is O(1) and borrows the parent chain, which matches the
//! render-tree walk: the child scope lives strictly inside the parent's
//! stack frame.

use ucss::{Theme, VarValue};

/// One frame of the chain.
#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    theme: &'a Theme,
    parent: Option<&'a Frame<'a>>,
}

/// An immutable stack of theme scopes plus an optional legacy provider.
///
/// ```
/// use ucss::{RawValue, VarValue, create_theme, define_vars};
/// use unistyle::ThemeChain;
///
/// let group = define_vars(vec![("accent".into(), RawValue::from("red"))]).unwrap();
/// let outer = create_theme(&group, vec![("accent".into(), RawValue::from("green"))]).unwrap();
/// let inner = create_theme(&group, vec![("accent".into(), RawValue::from("blue"))]).unwrap();
///
/// let name = group.get("accent").unwrap().name().to_string();
/// let root = ThemeChain::empty();
/// let mid = root.push(&outer);
/// let leaf = mid.push(&inner);
///
/// assert_eq!(leaf.lookup(&name), Some(&VarValue::Static("blue".into())));
/// assert_eq!(mid.lookup(&name), Some(&VarValue::Static("green".into())));
/// assert_eq!(root.lookup(&name), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeChain<'a> {
    top: Option<Frame<'a>>,
    /// Whole-tree override layer; scoped frames take precedence.
    provider: Option<&'a Theme>,
}

impl<'a> ThemeChain<'a> {
    /// The empty chain: lookups fall through to the store defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A chain rooted in a legacy whole-tree provider theme.
    pub fn with_provider(provider: &'a Theme) -> Self {
        Self {
            top: None,
            provider: Some(provider),
        }
    }

    /// Returns a new chain with `theme` as the nearest scope.
    ///
    /// Borrows `self`, so sibling subtrees pushed from the same parent
    /// never observe each other's frames.
    pub fn push(&'a self, theme: &'a Theme) -> ThemeChain<'a> {
        ThemeChain {
            top: Some(Frame {
                theme,
                parent: self.top.as_ref(),
            }),
            provider: self.provider,
        }
    }

    /// Walks the chain from the nearest frame outward, then the provider.
    pub fn lookup(&self, name: &str) -> Option<&'a VarValue> {
        let mut frame = self.top.as_ref();
        while let Some(f) = frame {
            if let Some(value) = f.theme.override_of(name) {
                return Some(value);
            }
            frame = f.parent;
        }
        self.provider.and_then(|p| p.override_of(name))
    }

    /// True when any frame or the provider is present.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.provider.is_none()
    }

    /// Identities of every frame, nearest first, then the provider.
    /// Memoization keys var-consulting lists on these.
    pub fn keys(&self) -> Vec<ucss::StyleKey> {
        let mut keys = Vec::new();
        let mut frame = self.top.as_ref();
        while let Some(f) = frame {
            keys.push(f.theme.key());
            frame = f.parent;
        }
        if let Some(provider) = self.provider {
            keys.push(provider.key());
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucss::{RawValue, create_theme, define_vars};

    #[test]
    fn scoped_theme_beats_legacy_provider() {
        let group = define_vars(vec![("accent".into(), RawValue::from("red"))]).unwrap();
        let provider =
            create_theme(&group, vec![("accent".into(), RawValue::from("green"))]).unwrap();
        let scoped = create_theme(&group, vec![("accent".into(), RawValue::from("blue"))]).unwrap();
        let name = group.get("accent").unwrap().name().to_string();

        let root = ThemeChain::with_provider(&provider);
        assert_eq!(root.lookup(&name), Some(&VarValue::Static("green".into())));

        let nested = root.push(&scoped);
        assert_eq!(nested.lookup(&name), Some(&VarValue::Static("blue".into())));
    }

    #[test]
    fn unrelated_frames_fall_through() {
        let group_a = define_vars(vec![("a".into(), RawValue::from("1px"))]).unwrap();
        let group_b = define_vars(vec![("b".into(), RawValue::from("2px"))]).unwrap();
        let theme_a = create_theme(&group_a, vec![("a".into(), RawValue::from("3px"))]).unwrap();
        let theme_b = create_theme(&group_b, vec![("b".into(), RawValue::from("4px"))]).unwrap();
        let name_a = group_a.get("a").unwrap().name().to_string();

        let root = ThemeChain::empty();
        let outer = root.push(&theme_a);
        let inner = outer.push(&theme_b);
        // The nearer (unrelated) frame does not shadow the outer one.
        assert_eq!(inner.lookup(&name_a), Some(&VarValue::Static("3px".into())));
    }
}
