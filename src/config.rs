//! Runtime configuration read from the environment (and `.env`, via dotenv).

use std::str::FromStr;
use thiserror::Error;

use crate::consts::HTTP_PORT;
use crate::utils::password_utils::HashCost;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_port: u16,
    pub hash_cost: HashCost,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: HTTP_PORT,
            hash_cost: HashCost::default(),
        }
    }
}

impl Config {
    /// Reads `HTTP_PORT`, `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and
    /// `ARGON2_PARALLELISM`, falling back to the defaults for unset keys
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            http_port: parse_or(&lookup, "HTTP_PORT", defaults.http_port)?,
            hash_cost: HashCost {
                memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", defaults.hash_cost.memory_kib)?,
                iterations: parse_or(&lookup, "ARGON2_ITERATIONS", defaults.hash_cost.iterations)?,
                parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", defaults.hash_cost.parallelism)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
