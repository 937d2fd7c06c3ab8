//! File name matching: regular-expression search and suffix tests.

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled file name pattern.
///
/// Matching is a search, not a full match: `txt` matches `notes.txt` and
/// `txt_backup.zip` alike. Anchor with `^`/`$` (`\.txt$`) for precision.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// One-shot form of [`NamePattern::matches`].
pub fn matches(file_name: &str, pattern: &str) -> Result<bool> {
    Ok(NamePattern::new(pattern)?.matches(file_name))
}

/// Case-sensitive suffix test against each entry of `suffixes`.
pub fn has_extension(file_name: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| file_name.ends_with(suffix))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
