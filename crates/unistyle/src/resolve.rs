//! The merge engine core shared by both targets.
//!
//! Resolution is: flatten the list, partition theme contributions from
//! style declarations, merge declarations last-wins per property, select
//! pseudo/media branches against the context, substitute `var()`
//! references, and hand the surviving typed values to target assembly.
//!
//! Nothing here returns an error: a declaration that cannot be resolved is
//! omitted after a one-time diagnostic, so a single bad value never blocks
//! a render pass.

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::{Interaction, ResolveContext};
use crate::list::{FlatEntry, StyleItem, flatten};
use crate::warn::{error_once, warn_once};
use ucss::parser::{find_var, parse_value};
use ucss::{CompiledValue, Features, PropValue, RawValue, StyleKey, Theme, VarValue, compile_rule};

/// One merged property slot: the winning declaration for a key.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub value: CompiledValue,
    /// Atomic class of the winning declaration, present only when it came
    /// from a compiled style.
    pub class: Option<String>,
}

/// The outcome of flatten + partition + merge, before branch selection.
#[derive(Debug, Clone, Default)]
pub(crate) struct MergedStyle {
    /// Property slots in first-encounter order; later declarations replace
    /// the slot value in place.
    props: Vec<(String, Slot)>,
    index: HashMap<String, usize>,
    /// Theme contributions in encounter order (later overrides earlier).
    pub themes: Vec<Arc<Theme>>,
    /// Debug sources of contributing compiled styles, in order.
    pub sources: Vec<String>,
    /// Identity of every flattened non-theme entry, for cache keys.
    pub entry_keys: Vec<StyleKey>,
    features: Features,
}

impl MergedStyle {
    pub fn props(&self) -> impl Iterator<Item = &(String, Slot)> {
        self.props.iter()
    }

    pub fn get(&self, prop: &str) -> Option<&Slot> {
        self.index.get(prop).map(|&i| &self.props[i].1)
    }

    fn upsert(&mut self, prop: &str, slot: Slot) {
        match self.index.get(prop) {
            Some(&i) => self.props[i].1 = slot,
            None => {
                self.index.insert(prop.to_string(), self.props.len());
                self.props.push((prop.to_string(), slot));
            }
        }
    }

    /// The context fields this merged list actually consults.
    ///
    /// Lists carrying `var()` references or theme contributions key on the
    /// full context: a substituted value can branch on anything.
    pub fn consulted_features(&self) -> Features {
        if !self.themes.is_empty() || self.features.contains(Features::VARS) {
            Features::all()
        } else {
            self.features
        }
    }
}

/// Flattens and merges a style list. Inline rules compile on the fly; an
/// inline rule with an invalid shape is skipped with a one-time warning
/// rather than failing the resolve call.
pub(crate) fn merge(list: &[StyleItem]) -> MergedStyle {
    let mut merged = MergedStyle::default();

    for entry in flatten(list) {
        match entry {
            FlatEntry::Theme(theme) => {
                merged.entry_keys.push(theme.key());
                merged.themes.push(Arc::clone(theme));
            }
            FlatEntry::Compiled(style) => {
                merged.entry_keys.push(style.key());
                merged.features |= style.features();
                merged.sources.push(style.source().to_string());
                for prop in style.props() {
                    merged.upsert(
                        &prop.name,
                        Slot {
                            value: prop.value.clone(),
                            class: prop.class_name.clone(),
                        },
                    );
                }
            }
            FlatEntry::Inline(rule) => {
                let compiled = match compile_rule("inline", rule) {
                    Ok(c) => c,
                    Err(err) => {
                        warn_once(format!("inline style skipped: {err}"));
                        continue;
                    }
                };
                merged.entry_keys.push(compiled.key());
                merged.features |= compiled.features();
                for prop in compiled.props() {
                    merged.upsert(
                        &prop.name,
                        Slot {
                            value: prop.value.clone(),
                            class: None,
                        },
                    );
                }
            }
        }
    }

    merged
}

/// Selects the branch of a compiled value for the current context.
///
/// Pseudo-state priority is fixed: active over focus over hover over
/// default, so the most locked-in interaction wins regardless of
/// declaration order. Media selection takes the last declared matching
/// branch, falling back to `default`.
pub(crate) fn select_branch<'a>(value: &'a CompiledValue, ctx: &ResolveContext<'_>) -> &'a PropValue {
    match value {
        CompiledValue::Static(v) => v,
        CompiledValue::Pseudo(p) => {
            if ctx.interaction.contains(Interaction::ACTIVE) {
                if let Some(v) = &p.active {
                    return v;
                }
            }
            if ctx.interaction.contains(Interaction::FOCUS) {
                if let Some(v) = &p.focus {
                    return v;
                }
            }
            if ctx.interaction.contains(Interaction::HOVER) {
                if let Some(v) = &p.hover {
                    return v;
                }
            }
            &p.default
        }
        CompiledValue::Media(m) => {
            let mut selected = &m.default;
            for (query, v) in &m.branches {
                if query.matches(ctx.viewport, ctx.color_scheme) {
                    selected = v;
                }
            }
            selected
        }
    }
}

/// Selects the branch of a custom-property value for the current context.
pub(crate) fn select_var_branch<'a>(value: &'a VarValue, ctx: &ResolveContext<'_>) -> &'a str {
    match value {
        VarValue::Static(s) => s,
        VarValue::Pseudo {
            default,
            hover,
            focus,
            active,
        } => {
            if ctx.interaction.contains(Interaction::ACTIVE) {
                if let Some(v) = active {
                    return v;
                }
            }
            if ctx.interaction.contains(Interaction::FOCUS) {
                if let Some(v) = focus {
                    return v;
                }
            }
            if ctx.interaction.contains(Interaction::HOVER) {
                if let Some(v) = hover {
                    return v;
                }
            }
            default
        }
        VarValue::Media { default, branches } => {
            let mut selected = default.as_str();
            for (query, v) in branches {
                if query.matches(ctx.viewport, ctx.color_scheme) {
                    selected = v;
                }
            }
            selected
        }
    }
}

/// Resolves a custom-property name through the override layers: per-call
/// overrides, list themes (later wins), the ancestor chain, then registered
/// defaults.
fn lookup_var(name: &str, ctx: &ResolveContext<'_>, list_themes: &[Arc<Theme>]) -> Option<String> {
    if let Some(overrides) = ctx.custom_properties {
        if let Some(text) = overrides.get(name) {
            return Some(text.clone());
        }
    }
    for theme in list_themes.iter().rev() {
        if let Some(value) = theme.override_of(name) {
            return Some(select_var_branch(value, ctx).to_string());
        }
    }
    if let Some(value) = ctx.themes.lookup(name) {
        return Some(select_var_branch(value, ctx).to_string());
    }
    ctx.store
        .default_of(name)
        .map(|value| select_var_branch(value, ctx).to_string())
}

/// Recursion guard for pathological fallback nesting.
const MAX_VAR_DEPTH: usize = 16;

/// Textually substitutes every `var()` reference in `raw`.
///
/// Returns `None` when any reference is unresolvable without a fallback or
/// participates in a cycle; the caller omits the declaration.
pub(crate) fn substitute(
    raw: &str,
    ctx: &ResolveContext<'_>,
    list_themes: &[Arc<Theme>],
    seen: &mut Vec<String>,
) -> Option<String> {
    if seen.len() > MAX_VAR_DEPTH {
        return None;
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some((start, end, var)) = find_var(rest) {
        out.push_str(&rest[..start]);

        let cyclic = seen.iter().any(|n| n == &var.name);
        let resolved = if cyclic {
            None
        } else {
            lookup_var(&var.name, ctx, list_themes)
        };

        let substituted = resolved.and_then(|text| {
            seen.push(var.name.clone());
            let inner = substitute(&text, ctx, list_themes, seen);
            seen.pop();
            inner
        });
        match substituted {
            Some(text) => out.push_str(&text),
            // An unresolvable or cyclic reference still uses its fallback.
            None => match &var.fallback {
                Some(fallback) => {
                    let text = substitute(fallback, ctx, list_themes, seen)?;
                    out.push_str(&text);
                }
                None => return None,
            },
        }

        rest = &rest[end..];
    }
    out.push_str(rest);
    Some(out)
}

/// Branch-selects, substitutes, and normalizes one slot value.
///
/// Returns `None` when the property produces no output: explicit `null`,
/// unsupported or malformed values, and unresolvable references.
pub(crate) fn finalize_value(
    prop: &str,
    value: &CompiledValue,
    ctx: &ResolveContext<'_>,
    list_themes: &[Arc<Theme>],
) -> Option<PropValue> {
    let selected = select_branch(value, ctx);

    let resolved = match selected {
        PropValue::Var(raw) => {
            let mut seen = Vec::new();
            match substitute(raw, ctx, list_themes, &mut seen) {
                Some(text) => parse_value(prop, &RawValue::Str(text)),
                None => {
                    warn_once(format!("unresolved custom property in `{prop}: {raw}`"));
                    return None;
                }
            }
        }
        other => other.clone(),
    };

    match resolved {
        PropValue::Null => None,
        PropValue::Unsupported(s) => {
            warn_once(format!("unsupported value for `{prop}`: {s}"));
            None
        }
        PropValue::Malformed(s) => {
            error_once(format!("multi-value shorthand is not supported: `{s}`"));
            None
        }
        v => Some(v),
    }
}
