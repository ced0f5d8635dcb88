//! Per-tree resolution memoization.
//!
//! A [`ResolveCache`] is a value owned by one render tree; nothing here is
//! global, so concurrent independent trees (server rendering several pages
//! at once) can never corrupt each other's entries.
//!
//! Cache keys include only the context fields the merged style list
//! actually consults: a list with no media queries and no viewport units is
//! not invalidated by viewport changes, one with no pseudo branches ignores
//! interaction state, and so on. Lists carrying `var()` references or theme
//! contributions key on the full context, since a substituted value can
//! branch on anything.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::context::ResolveContext;
use crate::list::StyleItem;
use crate::native::{NativeStyle, assemble};
use crate::resolve::merge;
use ucss::{ColorScheme, Features};

/// Memoizes native resolution per (style list identity, consulted context).
#[derive(Debug, Default)]
pub struct ResolveCache {
    entries: HashMap<u64, Arc<NativeStyle>>,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves through the cache.
    pub fn resolve_native(
        &mut self,
        list: &[StyleItem],
        ctx: &ResolveContext<'_>,
    ) -> Arc<NativeStyle> {
        let merged = merge(list);
        let features = merged.consulted_features();

        let mut hasher = DefaultHasher::new();
        for key in &merged.entry_keys {
            key.hash(&mut hasher);
        }
        if features.contains(Features::PSEUDO) {
            ctx.interaction.bits().hash(&mut hasher);
        }
        if features.contains(Features::VIEWPORT) {
            ctx.viewport.width.to_bits().hash(&mut hasher);
            ctx.viewport.height.to_bits().hash(&mut hasher);
        }
        if features.contains(Features::SCHEME) {
            matches!(ctx.color_scheme, ColorScheme::Dark).hash(&mut hasher);
        }
        if features.contains(Features::FONT) {
            ctx.font_scale.to_bits().hash(&mut hasher);
            ctx.inherited_font_size.to_bits().hash(&mut hasher);
        }
        if features.contains(Features::VARS) {
            // Substitution consults the whole override stack.
            for key in ctx.themes.keys() {
                key.hash(&mut hasher);
            }
            if let Some(overrides) = ctx.custom_properties {
                let mut pairs: Vec<_> = overrides.iter().collect();
                pairs.sort();
                for (name, value) in pairs {
                    name.hash(&mut hasher);
                    value.hash(&mut hasher);
                }
            }
        }
        let key = hasher.finish();

        if let Some(hit) = self.entries.get(&key) {
            return Arc::clone(hit);
        }
        let resolved = Arc::new(assemble(&merged, ctx));
        self.entries.insert(key, Arc::clone(&resolved));
        resolved
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. Call when the theme chain or store changes out
    /// from under cached lists (theme scopes carry their identity in the
    /// entry keys, so ordinary theme nesting needs no invalidation).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
