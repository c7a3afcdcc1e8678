//! Password strength rules

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::MIN_PASSWORD_LENGTH;

static DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("Failed to compile digit regex"));

// Anything outside ASCII letters and digits counts as special, non-ASCII letters included
static SPECIAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("Failed to compile special character regex"));

/// Returns true if the password is at least `MIN_PASSWORD_LENGTH` bytes long
/// and contains both a digit and a special character
pub fn is_strong_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
        && DIGIT_REGEX.is_match(password)
        && SPECIAL_REGEX.is_match(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_passwords() {
        for password in ["Abcdef1!", "Secret1!", "12345678 ", "pässwort1"] {
            assert!(is_strong_password(password), "Should accept: {}", password);
        }
    }

    #[test]
    fn test_weak_passwords() {
        let cases = vec![
            "abc12345", // no special character
            "abcdefg!", // no digit
            "Ab3!",     // too short
            "",
            "1!abcde",  // seven bytes
        ];

        for password in cases {
            assert!(!is_strong_password(password), "Should reject: {}", password);
        }
    }

    #[test]
    fn test_length_counts_bytes() {
        // "é" is two bytes, so seven characters reach the minimum
        assert!(is_strong_password("é1!abcd"));
    }
}
