//! Type definitions for the validation system

mod email_input;
mod username;

pub use email_input::EmailInput;
pub use username::Username;
