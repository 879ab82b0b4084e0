//! Wildcard name matching
//!
//! Patterns use `*` for any run of characters and `?` for exactly one.
//! Everything else is literal. Matching is case-insensitive and covers
//! the whole name.

use regex::Regex;

/// A compiled wildcard pattern
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Compile a pattern
    ///
    /// Surrounding whitespace is trimmed. Returns None for an empty pattern.
    pub fn new(pattern: &str) -> Option<Self> {
        let source = pattern.trim();
        if source.is_empty() {
            return None;
        }

        let mut expr = String::with_capacity(source.len() + 8);
        expr.push_str("(?i)^");
        let mut literal = [0u8; 4];
        for c in source.chars() {
            match c {
                '*' => expr.push_str(".*"),
                '?' => expr.push('.'),
                _ => expr.push_str(&regex::escape(c.encode_utf8(&mut literal))),
            }
        }
        expr.push('$');

        let regex = Regex::new(&expr).ok()?;
        Some(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The trimmed pattern text
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `name` matches this pattern
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl PartialEq for WildcardPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// One-shot match without keeping the compiled pattern
pub fn matches(pattern: &str, name: &str) -> bool {
    WildcardPattern::new(pattern).is_some_and(|p| p.matches(name))
}
