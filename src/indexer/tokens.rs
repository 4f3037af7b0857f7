use regex::Regex;
use std::collections::HashSet;

/// Pulls index tokens (resource names and the like) out of document text
/// using the configured `match_pattern`.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    pattern: Regex,
}

impl TokenExtractor {
    /// Compiles `pattern` once. Fails with the regex syntax error if it is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Every distinct non-empty match in `text`, in order of first occurrence.
    #[must_use]
    pub fn extract<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut seen = HashSet::new();
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|token| !token.is_empty() && seen.insert(*token))
            .collect()
    }
}
