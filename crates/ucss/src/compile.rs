//! The style compiler: `create` and `keyframes`.
//!
//! Runs once per style-object literal, at module-evaluation time in the
//! host. For each rule it classifies every declared value as static,
//! pseudo-state-keyed, or media-keyed, parses the value mini-languages, and
//! produces an immutable [`CompiledStyle`]: a stable identity, per-property
//! atomic class names plus the generated stylesheet fragment for the DOM
//! target, and the typed values the native target resolves from.
//!
//! Compilation is pure: it never consults resolution context, and
//! structurally equal inputs compile to styles that resolve identically
//! (identities and class names are derived from a structural hash).

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::UcssError;
use crate::media::MediaQuery;
use crate::parser::value::{css_name, parse_value};
use crate::raw::{RawRule, RawValue};
use crate::types::{
    CompiledProp, CompiledStyle, CompiledValue, Features, MediaValue, PropValue, PseudoValue,
    StyleKey,
};

/// The compiled output of one `create()` call: named rules, each an
/// immutable shared [`CompiledStyle`].
#[derive(Debug, Clone, Default)]
pub struct Styles {
    rules: HashMap<String, Arc<CompiledStyle>>,
}

impl Styles {
    /// Looks up a compiled rule by name.
    pub fn get(&self, rule: &str) -> Option<&Arc<CompiledStyle>> {
        self.rules.get(rule)
    }

    /// Iterates rules in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<CompiledStyle>)> {
        self.rules.iter()
    }

    /// Concatenated stylesheet text of every rule, for injection into the
    /// document by the host renderer.
    pub fn css_text(&self) -> String {
        let mut rules: Vec<_> = self.rules.values().collect();
        rules.sort_by_key(|r| r.key());
        rules.iter().map(|r| r.css_text()).collect()
    }
}

/// Compiles a named map of style rules.
///
/// `source` is a debug label for the whole map (typically the defining
/// module); each rule's debug path is `source.rule`.
///
/// # Examples
///
/// ```rust
/// use ucss::{create, style};
///
/// let styles = create(
///     "buttons",
///     vec![("root".into(), style! { "color": "red", "marginTop": 8 })],
/// )
/// .unwrap();
/// let root = styles.get("root").unwrap();
/// assert_eq!(root.props().len(), 2);
/// ```
pub fn create(source: &str, rules: Vec<(String, RawRule)>) -> Result<Styles, UcssError> {
    let mut out = HashMap::with_capacity(rules.len());
    for (rule_name, rule) in rules {
        let compiled = compile_rule(&format!("{source}.{rule_name}"), &rule)?;
        out.insert(rule_name, Arc::new(compiled));
    }
    Ok(Styles { rules: out })
}

/// Compiles one anonymous rule. Inline style objects resolve through the
/// same path without needing a `create()` call; this is also the entry
/// point for rules produced by dynamic style factories.
pub fn compile_rule(source: &str, rule: &RawRule) -> Result<CompiledStyle, UcssError> {
    let mut props = Vec::with_capacity(rule.len());
    let mut features = Features::empty();

    for (name, raw) in rule.iter() {
        let value = classify(name, raw)?;
        features |= value_features(&value);

        let class_name = match &value {
            CompiledValue::Static(PropValue::Null) => None,
            _ => Some(atomic_class_name(name, &value)),
        };

        props.push(CompiledProp {
            name: name.clone(),
            value,
            class_name,
        });
    }

    let key = StyleKey(structural_hash(source, &props));
    let css_text = emit_css(&props);

    Ok(CompiledStyle {
        key,
        source: source.to_string(),
        props,
        css_text,
        features,
    })
}

/// Classifies a raw value into static/pseudo/media form.
fn classify(prop: &str, raw: &RawValue) -> Result<CompiledValue, UcssError> {
    let RawValue::Branches(entries) = raw else {
        return Ok(CompiledValue::Static(parse_value(prop, raw)));
    };

    let mut default = None;
    let mut pseudo: Option<PseudoValue> = None;
    let mut media: Option<MediaValue> = None;

    for (key, branch_raw) in entries {
        if matches!(branch_raw, RawValue::Branches(_)) {
            return Err(UcssError::InvalidBranchKey(format!("{prop}.{key}")));
        }
        let value = parse_value(prop, branch_raw);

        match key.as_str() {
            "default" => default = Some(value),
            ":hover" | ":focus" | ":active" => {
                if media.is_some() {
                    return Err(UcssError::InvalidBranchKey(key.clone()));
                }
                let p = pseudo.get_or_insert_with(|| PseudoValue {
                    default: PropValue::Null,
                    hover: None,
                    focus: None,
                    active: None,
                });
                match key.as_str() {
                    ":hover" => p.hover = Some(value),
                    ":focus" => p.focus = Some(value),
                    _ => p.active = Some(value),
                }
            }
            k if k.starts_with("@media") => {
                if pseudo.is_some() {
                    return Err(UcssError::InvalidBranchKey(key.clone()));
                }
                let query = MediaQuery::parse(k)
                    .ok_or_else(|| UcssError::InvalidBranchKey(key.clone()))?;
                let m = media.get_or_insert_with(|| MediaValue {
                    default: PropValue::Null,
                    branches: Vec::new(),
                });
                m.branches.push((query, value));
            }
            _ => return Err(UcssError::InvalidBranchKey(key.clone())),
        }
    }

    let default = default.ok_or_else(|| UcssError::MissingDefaultBranch(prop.to_string()))?;

    if let Some(mut p) = pseudo {
        p.default = default;
        Ok(CompiledValue::Pseudo(p))
    } else if let Some(mut m) = media {
        m.default = default;
        Ok(CompiledValue::Media(m))
    } else {
        // A branch map with only `default` degenerates to a static value.
        Ok(CompiledValue::Static(default))
    }
}

fn value_features(value: &CompiledValue) -> Features {
    let mut features = Features::empty();
    match value {
        CompiledValue::Pseudo(_) => features |= Features::PSEUDO,
        CompiledValue::Media(m) => {
            for (query, _) in &m.branches {
                if query.consults_viewport() {
                    features |= Features::VIEWPORT;
                }
                if query.consults_scheme() {
                    features |= Features::SCHEME;
                }
            }
        }
        CompiledValue::Static(_) => {}
    }
    for v in value.branch_values() {
        if v.consults_viewport() {
            features |= Features::VIEWPORT;
        }
        if v.is_font_relative() {
            features |= Features::FONT;
        }
        if matches!(v, PropValue::Var(_)) {
            features |= Features::VARS;
        }
    }
    features
}

/// Atomic class name for one compiled property, derived from a structural
/// hash of the property name and every branch, so identical declarations in
/// different rules share a class.
fn atomic_class_name(prop: &str, value: &CompiledValue) -> String {
    let mut hasher = DefaultHasher::new();
    prop.hash(&mut hasher);
    hash_compiled_value(value, &mut hasher);
    format!("u{:08x}", hasher.finish() as u32)
}

fn structural_hash(source: &str, props: &[CompiledProp]) -> u64 {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    for prop in props {
        prop.name.hash(&mut hasher);
        hash_compiled_value(&prop.value, &mut hasher);
    }
    hasher.finish()
}

fn hash_compiled_value(value: &CompiledValue, hasher: &mut DefaultHasher) {
    match value {
        CompiledValue::Static(v) => {
            0u8.hash(hasher);
            hash_prop_value(v, hasher);
        }
        CompiledValue::Pseudo(p) => {
            1u8.hash(hasher);
            hash_prop_value(&p.default, hasher);
            for branch in [&p.hover, &p.focus, &p.active] {
                match branch {
                    Some(v) => hash_prop_value(v, hasher),
                    None => u8::MAX.hash(hasher),
                }
            }
        }
        CompiledValue::Media(m) => {
            2u8.hash(hasher);
            hash_prop_value(&m.default, hasher);
            for (query, v) in &m.branches {
                query.raw().hash(hasher);
                hash_prop_value(v, hasher);
            }
        }
    }
}

fn hash_prop_value(value: &PropValue, hasher: &mut DefaultHasher) {
    match value.to_css_text() {
        Some(text) => text.hash(hasher),
        None => "\0null".hash(hasher),
    }
}

/// Emits the stylesheet fragment: one atomic rule per property branch.
fn emit_css(props: &[CompiledProp]) -> String {
    let mut css = String::new();
    for prop in props {
        let Some(class) = &prop.class_name else {
            continue;
        };
        let name = css_name(&prop.name);
        match &prop.value {
            CompiledValue::Static(v) => {
                if let Some(text) = v.to_css_text() {
                    css.push_str(&format!(".{class}{{{name}:{text}}}\n"));
                }
            }
            CompiledValue::Pseudo(p) => {
                if let Some(text) = p.default.to_css_text() {
                    css.push_str(&format!(".{class}{{{name}:{text}}}\n"));
                }
                for (selector, branch) in
                    [(":hover", &p.hover), (":focus", &p.focus), (":active", &p.active)]
                {
                    if let Some(text) = branch.as_ref().and_then(|v| v.to_css_text()) {
                        css.push_str(&format!(".{class}{selector}{{{name}:{text}}}\n"));
                    }
                }
            }
            CompiledValue::Media(m) => {
                if let Some(text) = m.default.to_css_text() {
                    css.push_str(&format!(".{class}{{{name}:{text}}}\n"));
                }
                for (query, v) in &m.branches {
                    if let Some(text) = v.to_css_text() {
                        css.push_str(&format!(
                            "@media {}{{.{class}{{{name}:{text}}}}}\n",
                            query.condition_text()
                        ));
                    }
                }
            }
        }
    }
    css
}

/// A dynamic style rule: a function of runtime arguments producing a plain
/// style object.
///
/// A factory is deliberately NOT a compiled style and does not convert into
/// a merge-list entry; only the [`RawRule`] returned by [`call`] does. The
/// type system therefore rejects, at composition time, any attempt to merge
/// an unapplied factory.
///
/// ```rust
/// use ucss::{RawRule, StyleFactory};
///
/// let opacity = StyleFactory::new("fade.level", |level: f64| {
///     RawRule::new().set("opacity", level)
/// });
/// let rule = opacity.call(0.5);
/// assert_eq!(rule.len(), 1);
/// ```
///
/// [`call`]: StyleFactory::call
pub struct StyleFactory<A> {
    source: String,
    func: Box<dyn Fn(A) -> RawRule + Send + Sync>,
}

impl<A> StyleFactory<A> {
    pub fn new(source: &str, func: impl Fn(A) -> RawRule + Send + Sync + 'static) -> Self {
        Self {
            source: source.to_string(),
            func: Box::new(func),
        }
    }

    /// Debug source label.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Applies the factory to concrete arguments, yielding a plain style
    /// object ready for a merge list.
    pub fn call(&self, args: A) -> RawRule {
        (self.func)(args)
    }
}

impl<A> std::fmt::Debug for StyleFactory<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleFactory")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// An opaque animation-name token produced by [`keyframes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    name: String,
    css_text: String,
}

impl Keyframes {
    /// The generated animation name, usable as an `animationName` value.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `@keyframes` stylesheet fragment for the DOM target.
    pub fn css_text(&self) -> &str {
        &self.css_text
    }
}

impl From<&Keyframes> for RawValue {
    fn from(kf: &Keyframes) -> Self {
        RawValue::Str(kf.name.clone())
    }
}

/// Compiles a keyframes map.
///
/// Frame keys must be `from`, `to`, or a percentage in `0..=100`; anything
/// else is a construction-time error.
pub fn keyframes(frames: Vec<(String, RawRule)>) -> Result<Keyframes, UcssError> {
    let mut hasher = DefaultHasher::new();
    let mut body = String::new();

    for (key, rule) in &frames {
        validate_frame_key(key)?;
        key.hash(&mut hasher);

        let mut decls = String::new();
        for (prop, raw) in rule.iter() {
            let value = parse_value(prop, raw);
            if let Some(text) = value.to_css_text() {
                decls.push_str(&format!("{}:{};", css_name(prop), text));
                text.hash(&mut hasher);
            }
        }
        body.push_str(&format!("{key}{{{decls}}}"));
    }

    let name = format!("u-anim-{:08x}", hasher.finish() as u32);
    let css_text = format!("@keyframes {name}{{{body}}}\n");
    Ok(Keyframes { name, css_text })
}

fn validate_frame_key(key: &str) -> Result<(), UcssError> {
    if key == "from" || key == "to" {
        return Ok(());
    }
    if let Some(pct) = key.strip_suffix('%') {
        if let Ok(n) = pct.parse::<f64>() {
            if (0.0..=100.0).contains(&n) {
                return Ok(());
            }
        }
    }
    Err(UcssError::InvalidKeyframeKey(key.to_string()))
}
