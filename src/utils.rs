//! Helpers shared by the registration and echo paths.

pub mod error_messages;
pub mod password_utils;
pub mod validation;
