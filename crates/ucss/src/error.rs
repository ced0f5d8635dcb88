//! Error types for style compilation.
//!
//! Everything here is a construction-time programmer error: it is raised by
//! the compiler API (`create`, `define_vars`, `create_theme`, `keyframes`)
//! and never by the runtime resolver, which degrades gracefully instead.

use thiserror::Error;

/// Errors that can occur while compiling style objects.
///
/// # Examples
///
/// ```rust
/// use ucss::{keyframes, RawRule};
///
/// // Keyframe keys must be percentages or from/to.
/// let result = keyframes(vec![("sideways".into(), RawRule::new())]);
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum UcssError {
    /// A variable name was registered twice with structurally different
    /// default values while the store is in strict mode.
    #[error("custom property `{0}` already registered with a different default")]
    DuplicateVariable(String),

    /// A theme tried to override a token that its token group does not
    /// declare.
    #[error("theme overrides unknown token `{0}`")]
    UnknownToken(String),

    /// A keyframes key was not `from`, `to`, or a percentage in 0..=100.
    #[error("invalid keyframe key `{0}`")]
    InvalidKeyframeKey(String),

    /// A branch-map value used a key that is neither `default`, a supported
    /// pseudo-class, nor an `@media` query.
    #[error("invalid style branch key `{0}`")]
    InvalidBranchKey(String),

    /// A branch-map value is missing its required `default` branch.
    #[error("style branch map for `{0}` has no `default` branch")]
    MissingDefaultBranch(String),
}
