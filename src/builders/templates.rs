use crate::core::error::{IgnoreError, Result};

/// A block of ignore rules for one ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Lowercase lookup key, as typed on the command line.
    pub key: &'static str,
    pub body: &'static str,
}

const GO: &str = include_str!("../../templates/go.gitignore");
const REACT: &str = include_str!("../../templates/react.gitignore");
const CPP: &str = include_str!("../../templates/cpp.gitignore");
const C: &str = include_str!("../../templates/c.gitignore");
const MATLAB: &str = include_str!("../../templates/matlab.gitignore");
const RUST: &str = include_str!("../../templates/rust.gitignore");

/// The registry, in the order languages are listed to the user.
pub const TEMPLATES: &[Template] = &[
    Template { key: "go", body: GO },
    Template { key: "react", body: REACT },
    Template { key: "c++", body: CPP },
    Template { key: "c", body: C },
    Template { key: "matlab", body: MATLAB },
    Template { key: "rust", body: RUST },
];

/// Looks up a template by language, ignoring case.
pub fn lookup(lang: &str) -> Result<&'static Template> {
    let key = lang.to_lowercase();
    TEMPLATES
        .iter()
        .find(|t| t.key == key)
        .ok_or_else(|| IgnoreError::UnsupportedLanguage {
            lang: lang.to_string(),
            supported: supported_languages().join(", "),
        })
}

pub fn supported_languages() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.key).collect()
}
