//! Custom properties: `define_vars`, `create_theme`, and the property store.
//!
//! A [`VarGroup`] is the unit of theming: a set of named tokens with default
//! values, each rendered as a `var(--name)` reference usable inside style
//! declarations. A [`Theme`] overrides a subset of one group's tokens and is
//! scoped to a subtree by the runtime's theme chain.
//!
//! Values are stored as raw strings and substituted textually at resolve
//! time; a default may itself be a per-media or per-pseudo branch map.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::UcssError;
use crate::media::MediaQuery;
use crate::parser::value::css_name;
use crate::raw::RawValue;
use crate::types::{StyleKey, format_number};

/// A custom-property value: a raw string, possibly branched.
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    Static(String),
    Pseudo {
        default: String,
        hover: Option<String>,
        focus: Option<String>,
        active: Option<String>,
    },
    Media {
        default: String,
        branches: Vec<(MediaQuery, String)>,
    },
}

impl VarValue {
    fn from_raw(token: &str, raw: &RawValue) -> Result<Self, UcssError> {
        match raw {
            RawValue::Num(n) => Ok(Self::Static(format_number(*n))),
            RawValue::Str(s) => Ok(Self::Static(s.clone())),
            RawValue::Null => Err(UcssError::InvalidBranchKey(token.to_string())),
            RawValue::Branches(entries) => {
                let mut default = None;
                let mut pseudo: Option<(Option<String>, Option<String>, Option<String>)> = None;
                let mut media: Vec<(MediaQuery, String)> = Vec::new();

                for (key, branch) in entries {
                    let text = match branch {
                        RawValue::Num(n) => format_number(*n),
                        RawValue::Str(s) => s.clone(),
                        _ => return Err(UcssError::InvalidBranchKey(format!("{token}.{key}"))),
                    };
                    match key.as_str() {
                        "default" => default = Some(text),
                        ":hover" => pseudo.get_or_insert((None, None, None)).0 = Some(text),
                        ":focus" => pseudo.get_or_insert((None, None, None)).1 = Some(text),
                        ":active" => pseudo.get_or_insert((None, None, None)).2 = Some(text),
                        k if k.starts_with("@media") => {
                            let query = MediaQuery::parse(k)
                                .ok_or_else(|| UcssError::InvalidBranchKey(key.clone()))?;
                            media.push((query, text));
                        }
                        _ => return Err(UcssError::InvalidBranchKey(key.clone())),
                    }
                }

                let default =
                    default.ok_or_else(|| UcssError::MissingDefaultBranch(token.to_string()))?;
                if let Some((hover, focus, active)) = pseudo {
                    if !media.is_empty() {
                        return Err(UcssError::InvalidBranchKey(token.to_string()));
                    }
                    Ok(Self::Pseudo {
                        default,
                        hover,
                        focus,
                        active,
                    })
                } else if !media.is_empty() {
                    Ok(Self::Media {
                        default,
                        branches: media,
                    })
                } else {
                    Ok(Self::Static(default))
                }
            }
        }
    }

    fn hash_into(&self, hasher: &mut DefaultHasher) {
        match self {
            Self::Static(s) => {
                0u8.hash(hasher);
                s.hash(hasher);
            }
            Self::Pseudo {
                default,
                hover,
                focus,
                active,
            } => {
                1u8.hash(hasher);
                default.hash(hasher);
                hover.hash(hasher);
                focus.hash(hasher);
                active.hash(hasher);
            }
            Self::Media { default, branches } => {
                2u8.hash(hasher);
                default.hash(hasher);
                for (query, text) in branches {
                    query.raw().hash(hasher);
                    text.hash(hasher);
                }
            }
        }
    }
}

/// One token of a [`VarGroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct VarToken {
    name: String,
}

impl VarToken {
    /// Full custom-property name, including the leading `--`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `var(--name)` reference text for use in style declarations.
    pub fn reference(&self) -> String {
        format!("var({})", self.name)
    }
}

/// A group of themeable tokens produced by [`define_vars`].
#[derive(Debug, Clone, PartialEq)]
pub struct VarGroup {
    id: u64,
    /// author key -> token, in declared order.
    tokens: Vec<(String, VarToken)>,
    /// full css name -> default value.
    defaults: HashMap<String, VarValue>,
}

impl VarGroup {
    /// Group identity; themes carry it so overrides stay tied to the group
    /// they were validated against.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Looks up a token by its author key.
    pub fn get(&self, key: &str) -> Option<&VarToken> {
        self.tokens
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, token)| token)
    }

    /// Iterates `(full css name, default value)` pairs.
    pub fn defaults(&self) -> impl Iterator<Item = (&String, &VarValue)> {
        self.defaults.iter()
    }
}

/// Declares a group of custom properties with default values.
///
/// Token names are derived from the author key plus a structural hash of
/// the whole map, so the same literal declared twice yields the same names
/// while distinct groups never collide.
///
/// ```rust
/// use ucss::{define_vars, RawValue};
///
/// let vars = define_vars(vec![("primary".into(), RawValue::from("red"))]).unwrap();
/// let token = vars.get("primary").unwrap();
/// assert!(token.reference().starts_with("var(--primary-"));
/// ```
pub fn define_vars(map: Vec<(String, RawValue)>) -> Result<VarGroup, UcssError> {
    // Parse first so the hash covers canonical values.
    let mut parsed = Vec::with_capacity(map.len());
    for (key, raw) in &map {
        parsed.push((key.clone(), VarValue::from_raw(key, raw)?));
    }

    let mut hasher = DefaultHasher::new();
    for (key, value) in &parsed {
        key.hash(&mut hasher);
        value.hash_into(&mut hasher);
    }
    let id = hasher.finish();

    let mut tokens = Vec::with_capacity(parsed.len());
    let mut defaults = HashMap::with_capacity(parsed.len());
    for (key, value) in parsed {
        let name = format!("--{}-{:08x}", css_name(&key), id as u32);
        defaults.insert(name.clone(), value);
        tokens.push((key, VarToken { name }));
    }

    Ok(VarGroup {
        id,
        tokens,
        defaults,
    })
}

/// A scoped set of overrides for one token group.
///
/// Structurally style-like: placed in a merge list (or mounted on the theme
/// chain) it contributes custom-property bindings rather than direct style
/// properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    group_id: u64,
    key: StyleKey,
    /// full css name -> override value.
    overrides: HashMap<String, VarValue>,
}

impl Theme {
    /// The token group this theme overrides.
    pub fn group_id(&self) -> u64 {
        self.group_id
    }

    /// Stable identity for merge-order/cache keys.
    pub fn key(&self) -> StyleKey {
        self.key
    }

    /// Looks up an override by full custom-property name.
    pub fn override_of(&self, name: &str) -> Option<&VarValue> {
        self.overrides.get(name)
    }

    /// Iterates `(full css name, override value)` pairs.
    pub fn bindings(&self) -> impl Iterator<Item = (&String, &VarValue)> {
        self.overrides.iter()
    }
}

/// Builds a theme overriding a subset of `group`'s tokens.
///
/// Overriding a key the group does not declare is a construction-time
/// error.
pub fn create_theme(group: &VarGroup, overrides: Vec<(String, RawValue)>) -> Result<Theme, UcssError> {
    let mut hasher = DefaultHasher::new();
    group.id.hash(&mut hasher);

    let mut map = HashMap::with_capacity(overrides.len());
    for (key, raw) in &overrides {
        let token = group
            .get(key)
            .ok_or_else(|| UcssError::UnknownToken(key.clone()))?;
        let value = VarValue::from_raw(key, raw)?;
        key.hash(&mut hasher);
        value.hash_into(&mut hasher);
        map.insert(token.name().to_string(), value);
    }

    Ok(Theme {
        group_id: group.id,
        key: StyleKey(hasher.finish()),
        overrides: map,
    })
}

/// Process-defaults store for custom properties.
///
/// Explicitly constructed and passed through resolution context rather than
/// living as ambient global state, so independent render trees (concurrent
/// server rendering included) never share or corrupt each other's defaults.
#[derive(Debug, Clone, Default)]
pub struct VarStore {
    permissive: bool,
    defaults: HashMap<String, VarValue>,
}

impl VarStore {
    /// Creates a strict store: re-registering a name with a structurally
    /// different default is an error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a last-wins store; shape conflicts log a warning instead of
    /// failing. Kept for the legacy whole-tree provider integration.
    pub fn permissive() -> Self {
        Self {
            permissive: true,
            defaults: HashMap::new(),
        }
    }

    /// Registers a group's defaults.
    pub fn register(&mut self, group: &VarGroup) -> Result<(), UcssError> {
        for (name, value) in group.defaults() {
            match self.defaults.get(name) {
                Some(existing) if existing != value => {
                    if self.permissive {
                        log::warn!(
                            "custom property `{name}` re-registered with a different default; last registration wins"
                        );
                        self.defaults.insert(name.clone(), value.clone());
                    } else {
                        return Err(UcssError::DuplicateVariable(name.clone()));
                    }
                }
                Some(_) => {}
                None => {
                    self.defaults.insert(name.clone(), value.clone());
                }
            }
        }
        Ok(())
    }

    /// Looks up the registered default for a full custom-property name.
    pub fn default_of(&self, name: &str) -> Option<&VarValue> {
        self.defaults.get(name)
    }
}
