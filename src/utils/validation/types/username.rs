//! Wrapper type for a submitted username.

use anyhow::{bail, Result};
use std::fmt;

/// A trimmed, non-empty username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Trims surrounding whitespace and refuses what is left if it is empty
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            bail!("Username cannot be empty");
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_is_trimmed() {
        let username = Username::new("  alice \t").unwrap();
        assert_eq!(username.as_str(), "alice");
    }

    #[test]
    fn test_blank_usernames_are_rejected() {
        for raw in ["", " ", "\t\n"] {
            assert!(Username::new(raw).is_err(), "Should reject {:?}", raw);
        }
    }

    #[test]
    fn test_markup_is_kept_verbatim() {
        // Escaping happens at render time, not here
        let username = Username::new("<b>bob</b>").unwrap();
        assert_eq!(username.to_string(), "<b>bob</b>");
    }
}
