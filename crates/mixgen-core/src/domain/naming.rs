//! Application and module name derivation.
//!
//! A project path like `./services/my-shop` yields the application name
//! `my_shop` and the module name `MyShop`. Both can be overridden on the
//! command line; either way they are validated here before a
//! [`crate::domain::ProjectConfig`] can exist.

use crate::domain::error::DomainError;

/// Derive an application name from the final component of a project path.
///
/// Separators (`-`, spaces) and case transitions both count as word
/// boundaries, so `MyShop`, `my-shop`, and `my shop` all yield `my_shop`.
pub fn app_name_from_path(path: &str) -> String {
    let leaf = path
        .trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path);
    split_words(leaf).join("_")
}

/// Derive the top-level module name from an application name.
///
/// `my_shop` becomes `MyShop`.
pub fn module_name_from_app(app: &str) -> String {
    split_words(app)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Validate an application name against Elixir atom rules.
///
/// Must match `[a-z][a-z0-9_]*`.
pub fn validate_app_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidAppName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name cannot be empty")),
        Some(c) if !c.is_ascii_lowercase() => {
            return Err(invalid("must start with a lowercase letter"));
        }
        Some(_) => {}
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')) {
        return Err(invalid(&format!(
            "'{c}' is not allowed; use lowercase letters, digits, and underscores"
        )));
    }
    Ok(())
}

/// Validate a module name against Elixir alias rules.
///
/// Dot-separated segments, each matching `[A-Z][A-Za-z0-9]*`.
pub fn validate_module_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidModuleName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty".into()));
    }
    for segment in name.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Err(invalid("empty segment between dots".into())),
            Some(c) if !c.is_ascii_uppercase() => {
                return Err(invalid(format!(
                    "segment '{segment}' must start with an uppercase letter"
                )));
            }
            Some(_) => {}
        }
        if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric()) {
            return Err(invalid(format!("'{c}' is not allowed in segment '{segment}'")));
        }
    }
    Ok(())
}

/// Split a string into lowercase words based on casing and separators.
///
/// Word boundary detection:
/// 1. Explicit separators: `_`, `-`, whitespace
/// 2. Case transition (camelCase): `aB` splits between `a` and `B`
/// 3. Acronym boundary: `HTTPServer` splits between `P` and `S`
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = input.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || (chars[i - 1].is_uppercase() && next_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
