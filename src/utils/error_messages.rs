//! User-facing messages shown on the registration page

pub const REQUIRED_FIELDS: &str = "All fields are required.";

pub const INVALID_EMAIL: &str = "Invalid email format.";

pub const WEAK_PASSWORD: &str =
    "Password must be at least 8 characters long, include a number, and a special character.";

pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

pub const REGISTRATION_ERROR: &str = "Registration failed";

pub const INTERNAL_ERROR: &str = "Internal Server Error";
