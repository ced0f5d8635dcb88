//! `var()` reference scanning.
//!
//! A declared value may embed custom-property references anywhere in its
//! text: `var(--x)`, `var(--x, 10px)`, `rgb(255, 255, var(--blue))`. The
//! fallback is arbitrary text and may itself contain nested `var()` calls,
//! so the name/fallback split happens at the FIRST top-level comma only;
//! commas inside nested parentheses never split.
//!
//! Substitution is textual: the resolver replaces each reference with its
//! resolved value (or fallback) and re-parses the resulting string for the
//! property at hand.

/// One scanned `var()` reference.
#[derive(Debug, Clone, PartialEq)]
pub struct VarRef {
    /// Custom property name including the leading `--`.
    pub name: String,
    /// Raw fallback text, untrimmed of inner structure.
    pub fallback: Option<String>,
}

/// True when the value text contains a `var(` reference.
pub fn contains_var(input: &str) -> bool {
    input.contains("var(")
}

/// Finds the first `var()` call in `input`.
///
/// Returns `(start, end, VarRef)` where `start..end` spans the full
/// `var(...)` text, or `None` when there is no syntactically complete
/// reference with a `--`-prefixed name.
pub fn find_var(input: &str) -> Option<(usize, usize, VarRef)> {
    let start = input.find("var(")?;
    let inner_start = start + 4;

    // Walk to the matching close paren, tracking depth for nested calls
    // and remembering the first top-level comma.
    let mut depth = 1usize;
    let mut split = None;
    let mut end = None;
    for (i, c) in input[inner_start..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    end = Some(inner_start + i);
                    break;
                }
            }
            ',' if depth == 1 && split.is_none() => {
                split = Some(inner_start + i);
            }
            _ => {}
        }
    }
    let end = end?;

    let (name, fallback) = match split {
        Some(comma) => (
            input[inner_start..comma].trim(),
            Some(input[comma + 1..end].trim().to_string()),
        ),
        None => (input[inner_start..end].trim(), None),
    };

    if !name.starts_with("--") || name.len() <= 2 {
        return None;
    }

    Some((
        start,
        end + 1,
        VarRef {
            name: name.to_string(),
            fallback,
        },
    ))
}
