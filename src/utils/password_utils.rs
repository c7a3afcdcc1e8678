//! Password hashing and verification

use argon2::{
    password_hash::{PasswordHashString, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;
use std::fmt;
use thiserror::Error;

use crate::consts::{ARGON2_ITERATIONS, ARGON2_MEMORY_KIB, ARGON2_PARALLELISM};

/// Failure of the hashing primitive itself. Never a validation problem: a
/// request that hits this cannot be accepted.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid Argon2 parameters: {0}")]
    Params(argon2::Error),
    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
}

/// Work factor of the adaptive hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: ARGON2_MEMORY_KIB,
            iterations: ARGON2_ITERATIONS,
            parallelism: ARGON2_PARALLELISM,
        }
    }
}

/// A hashed password in PHC string format
#[derive(Clone, Debug)]
pub struct PWHash(PasswordHashString);

impl PartialEq for PWHash {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PWHash {}

impl PWHash {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PWHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Salted one-way password hashing
pub trait PasswordHashing: Send + Sync {
    fn hash(&self, password: &str) -> Result<PWHash, CryptoError>;
    fn verify(&self, password: &str, hash: &PWHash) -> bool;
}

/// Argon2id hasher bound to a fixed cost
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
}

impl Hasher {
    /// Builds a hasher, rejecting parameters Argon2 does not support
    pub fn new(cost: HashCost) -> Result<Self, CryptoError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(CryptoError::Params)?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHashing for Hasher {
    /// Hashes a cleartext password with a freshly generated random salt
    fn hash(&self, password: &str) -> Result<PWHash, CryptoError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(CryptoError::Hash)?
            .serialize();

        Ok(PWHash(hash))
    }

    /// Checks a cleartext password against a stored hash, in constant time
    fn verify(&self, password: &str, hash: &PWHash) -> bool {
        self.argon2
            .verify_password(password.as_bytes(), &hash.0.password_hash())
            .is_ok()
    }
}

#[cfg(test)]
pub(crate) fn test_hasher() -> Hasher {
    Hasher::new(HashCost {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

/// Hasher whose primitive always fails
#[cfg(test)]
pub(crate) struct FailingHasher;

#[cfg(test)]
impl PasswordHashing for FailingHasher {
    fn hash(&self, _: &str) -> Result<PWHash, CryptoError> {
        Err(CryptoError::Hash(argon2::password_hash::Error::Crypto))
    }

    fn verify(&self, _: &str, _: &PWHash) -> bool {
        false
    }
}
