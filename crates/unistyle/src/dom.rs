//! DOM target assembly.
//!
//! Compiled styles reach the DOM as atomic class names; their pseudo-class
//! and media branches live in the generated stylesheet, so no branch
//! selection happens here for them. Inline declarations and theme
//! contributions land in the element's inline `style` map: themes become
//! inline custom-property bindings (`--name: value`) that the stylesheet's
//! `var()` references pick up through the normal CSS cascade.

use crate::context::ResolveContext;
use crate::list::StyleItem;
use crate::resolve::{merge, select_branch, select_var_branch};
use crate::warn::{error_once, warn_once};
use ucss::PropValue;
use ucss::parser::css_name;

/// The final DOM payload for one node.
///
/// `style_src` is the debug source-path string, rendered by hosts as a
/// `data-style-src` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomProps {
    pub class_name: Option<String>,
    /// Inline style entries in deterministic order: theme bindings first,
    /// then inline declarations. Keys are kebab-case CSS names (custom
    /// properties keep their `--` names).
    pub style: Vec<(String, String)>,
    pub style_src: Option<String>,
}

impl DomProps {
    /// Looks up an inline style entry.
    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Resolves a style list for the DOM target.
pub fn resolve_dom(list: &[StyleItem], ctx: &ResolveContext<'_>) -> DomProps {
    let merged = merge(list);

    let mut classes: Vec<String> = Vec::new();
    let mut style: Vec<(String, String)> = Vec::new();

    // Theme contributions become inline custom-property bindings. Later
    // themes override earlier ones for the same token.
    for theme in &merged.themes {
        let mut bindings: Vec<_> = theme.bindings().collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in bindings {
            let text = select_var_branch(value, ctx);
            upsert(&mut style, name.clone(), text.to_string());
        }
    }

    for (prop, slot) in merged.props() {
        match &slot.class {
            Some(class) => {
                // Atomic class design: the merge already kept only the last
                // contributor per property, so surviving classes never
                // overlap.
                if !classes.iter().any(|c| c == class) {
                    classes.push(class.clone());
                }
            }
            None => {
                let selected = select_branch(&slot.value, ctx);
                match selected {
                    PropValue::Null => {}
                    PropValue::Unsupported(s) => {
                        warn_once(format!("unsupported value for `{prop}`: {s}"));
                    }
                    PropValue::Malformed(s) => {
                        error_once(format!("multi-value shorthand is not supported: `{s}`"));
                    }
                    // var() references pass through: the browser substitutes
                    // them against the custom properties bound above (or by
                    // ancestor theme scopes).
                    v => {
                        if let Some(text) = v.to_css_text() {
                            upsert(&mut style, css_name(prop), text);
                        }
                    }
                }
            }
        }
    }

    let class_name = if classes.is_empty() {
        None
    } else {
        Some(classes.join(" "))
    };
    let style_src = if merged.sources.is_empty() {
        None
    } else {
        Some(merged.sources.join("; "))
    };

    DomProps {
        class_name,
        style,
        style_src,
    }
}

fn upsert(entries: &mut Vec<(String, String)>, key: String, value: String) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}
