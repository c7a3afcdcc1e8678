//! Global constants for the application.

pub const HTTP_PORT: u16 = 8080; // Default HTTP port.

/// Default Argon2 memory cost in KiB (OWASP baseline for Argon2id).
pub const ARGON2_MEMORY_KIB: u32 = 19_456;
/// Default number of Argon2 passes.
pub const ARGON2_ITERATIONS: u32 = 2;
/// Default Argon2 lane count.
pub const ARGON2_PARALLELISM: u32 = 1;

/// Minimum password length, in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 8;
