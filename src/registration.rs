//! Registration validation pipeline.
//!
//! Every rule runs on every submission, so the user sees all problems at
//! once. Rule failures are data ([`ValidationResult::errors`]); the only
//! error this module returns is a failure of the hashing primitive.

use log::debug;
use std::sync::Arc;

use crate::utils::error_messages::{
    INVALID_EMAIL, PASSWORD_MISMATCH, REQUIRED_FIELDS, WEAK_PASSWORD,
};
use crate::utils::password_utils::{CryptoError, PWHash, PasswordHashing};
use crate::utils::validation::{is_strong_password, EmailInput, Username};

/// Raw registration fields as submitted. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Outcome of validating one [`RegistrationInput`].
///
/// Built only through [`ValidationResult::rejected`] or
/// [`ValidationResult::accepted`], so a hash is present exactly when the
/// error list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
    password_hash: Option<PWHash>,
}

impl ValidationResult {
    fn rejected(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            errors,
            password_hash: None,
        }
    }

    fn accepted(hash: PWHash) -> Self {
        Self {
            errors: Vec::new(),
            password_hash: Some(hash),
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn password_hash(&self) -> Option<&PWHash> {
        self.password_hash.as_ref()
    }

    pub fn is_accepted(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Applies the registration rules and hashes accepted passwords
#[derive(Clone)]
pub struct Validator {
    hasher: Arc<dyn PasswordHashing>,
}

impl Validator {
    pub fn new<H: PasswordHashing + 'static>(hasher: H) -> Self {
        Self {
            hasher: Arc::new(hasher),
        }
    }

    pub fn hasher(&self) -> &dyn PasswordHashing {
        self.hasher.as_ref()
    }

    /// Validates a submission. Hashing blocks for as long as the configured
    /// cost requires.
    pub fn validate(&self, input: &RegistrationInput) -> Result<ValidationResult, CryptoError> {
        let errors = check_rules(input);

        if !errors.is_empty() {
            debug!("Registration rejected with {} error(s)", errors.len());
            return Ok(ValidationResult::rejected(errors));
        }

        let hash = self.hasher.hash(&input.password)?;
        Ok(ValidationResult::accepted(hash))
    }
}

/// Runs every rule and collects the failing messages, in rule order
fn check_rules(input: &RegistrationInput) -> Vec<String> {
    let mut errors = Vec::new();

    if Username::new(&input.username).is_err()
        || input.email.is_empty()
        || input.password.is_empty()
        || input.confirm_password.is_empty()
    {
        errors.push(REQUIRED_FIELDS.to_string());
    }

    if EmailInput::new(&input.email).is_err() {
        errors.push(INVALID_EMAIL.to_string());
    }

    if !is_strong_password(&input.password) {
        errors.push(WEAK_PASSWORD.to_string());
    }

    if input.password != input.confirm_password {
        errors.push(PASSWORD_MISMATCH.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password_utils::{test_hasher, FailingHasher};

    fn input(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationInput {
        RegistrationInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn validate(input: &RegistrationInput) -> ValidationResult {
        Validator::new(test_hasher()).validate(input).unwrap()
    }

    #[test]
    fn test_valid_registration_is_accepted() {
        let validator = Validator::new(test_hasher());
        let result = validator
            .validate(&input("alice", "alice@example.com", "Secret1!", "Secret1!"))
            .unwrap();

        assert!(result.is_accepted());
        assert!(result.errors().is_empty());

        let hash = result.password_hash().expect("accepted result carries a hash");
        assert!(!hash.as_str().is_empty());
        assert_ne!(hash.as_str(), "Secret1!");
        assert!(validator.hasher().verify("Secret1!", hash));
    }

    #[test]
    fn test_any_empty_field_is_required() {
        let cases = vec![
            input("", "alice@example.com", "Secret1!", "Secret1!"),
            input("   ", "alice@example.com", "Secret1!", "Secret1!"),
            input("alice", "", "Secret1!", "Secret1!"),
            input("alice", "alice@example.com", "", "Secret1!"),
            input("alice", "alice@example.com", "Secret1!", ""),
        ];

        for case in cases {
            let result = validate(&case);
            assert!(!result.is_accepted(), "Should reject: {:?}", case);
            assert!(result.password_hash().is_none());
            assert!(result.errors().contains(&REQUIRED_FIELDS.to_string()));
        }
    }

    #[test]
    fn test_all_empty_reports_every_rule() {
        let result = validate(&RegistrationInput::default());
        assert_eq!(
            result.errors(),
            &[REQUIRED_FIELDS.to_string(), INVALID_EMAIL.to_string(), WEAK_PASSWORD.to_string()]
        );
    }

    #[test]
    fn test_bad_email_format() {
        for email in ["alice.example.com", "alice@example", "alice@", "a b@example.com"] {
            let result = validate(&input("alice", email, "Secret1!", "Secret1!"));
            assert!(!result.is_accepted());
            assert_eq!(result.errors(), &[INVALID_EMAIL.to_string()], "email: {}", email);
        }
    }

    #[test]
    fn test_weak_passwords_share_one_message() {
        for password in ["abc12345", "abcdefg!", "Ab3!"] {
            let result = validate(&input("alice", "alice@example.com", password, password));
            assert_eq!(result.errors(), &[WEAK_PASSWORD.to_string()], "password: {}", password);
        }

        let result = validate(&input("alice", "alice@example.com", "Abcdef1!", "Abcdef1!"));
        assert!(!result.errors().contains(&WEAK_PASSWORD.to_string()));
    }

    #[test]
    fn test_password_mismatch() {
        let result = validate(&input("alice", "alice@example.com", "Abcdef1!", "Abcdef2!"));
        assert_eq!(result.errors(), &[PASSWORD_MISMATCH.to_string()]);

        // Reported alongside other failures too
        let result = validate(&input("", "nope", "short", "Abcdef2!"));
        assert_eq!(
            result.errors(),
            &[
                REQUIRED_FIELDS.to_string(),
                INVALID_EMAIL.to_string(),
                WEAK_PASSWORD.to_string(),
                PASSWORD_MISMATCH.to_string(),
            ]
        );
    }

    #[test]
    fn test_confirmation_is_case_sensitive() {
        let result = validate(&input("alice", "alice@example.com", "Secret1!", "secret1!"));
        assert_eq!(result.errors(), &[PASSWORD_MISMATCH.to_string()]);
    }

    #[test]
    fn test_hashing_failure_is_an_error() {
        let validator = Validator::new(FailingHasher);
        let result =
            validator.validate(&input("alice", "alice@example.com", "Secret1!", "Secret1!"));
        assert!(matches!(result, Err(CryptoError::Hash(_))));
    }

    #[test]
    fn test_rejection_does_not_hash() {
        let validator = Validator::new(FailingHasher);
        let result = validator
            .validate(&input("alice", "alice@example", "Secret1!", "Secret1!"))
            .unwrap();
        assert_eq!(result.errors(), &[INVALID_EMAIL.to_string()]);
    }

    #[test]
    fn test_revalidation_is_stable() {
        let case = input("bob", "bob@nowhere", "abc", "abd");
        assert_eq!(validate(&case), validate(&case));
    }
}
