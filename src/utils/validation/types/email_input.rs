//! Represents a validated email address.
//!
//! The address must match the HTML5 email grammar checked by the validator
//! crate and, in addition, carry an ASCII domain with at least one dot.
//! Bare host names such as `user@localhost` and internationalised domains
//! are refused, the same as non-ASCII local parts.

use anyhow::{bail, Result};
use std::fmt;
use validator::ValidateEmail;

/// Maximum length of an address, per RFC 5321
const MAX_EMAIL_LENGTH: usize = 254;

/// A validated email address. Can only be obtained through [`EmailInput::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailInput {
    email: String,
}

impl EmailInput {
    /// Creates a new `EmailInput` after validating the provided string.
    ///
    /// The value is checked as submitted: surrounding whitespace is a
    /// disallowed character, not something to silently repair.
    ///
    /// # Returns
    /// * `Ok(EmailInput)` if the email is valid
    /// * `Err` with a descriptive message if validation fails
    pub fn new(email: &str) -> Result<Self> {
        if email.is_empty() {
            bail!("Email address cannot be empty");
        }

        if email.len() > MAX_EMAIL_LENGTH {
            bail!("Email address exceeds maximum length of {} characters", MAX_EMAIL_LENGTH);
        }

        if !email.validate_email() {
            bail!("Invalid email format");
        }

        match email.rsplit_once('@') {
            Some((_, domain)) if !domain.is_ascii() => bail!("Email domain must be ASCII"),
            Some((_, domain)) if domain.contains('.') => {}
            _ => bail!("Email domain must contain a dot"),
        }

        Ok(Self {
            email: email.to_string(),
        })
    }

    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for EmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.email
    }
}
