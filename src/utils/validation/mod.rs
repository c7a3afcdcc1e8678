//! Root module for the validation system.
//! Exposes the validated input types and the password strength rules.

mod password;
mod types;

pub use password::is_strong_password;
pub use types::{EmailInput, Username};
