//! Storage capability for accepted registrations.
//!
//! The validator never touches this; the HTTP layer hands an accepted
//! registration to whatever [`UserRepository`] it was given.

use log::info;
use thiserror::Error;

use crate::utils::password_utils::PWHash;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// An accepted registration, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: PWHash,
}

pub trait UserRepository: Send + Sync {
    fn save(&self, user: &NewUser) -> Result<(), RepositoryError>;
}

/// Repository that only records the save in the log. Nothing is stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRepository;

impl UserRepository for LogRepository {
    fn save(&self, user: &NewUser) -> Result<(), RepositoryError> {
        info!("Would store user {} <{}>", user.username, user.email);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Keeps every saved user in memory
    #[derive(Default)]
    pub struct RecordingRepository {
        pub saved: Mutex<Vec<NewUser>>,
    }

    impl UserRepository for RecordingRepository {
        fn save(&self, user: &NewUser) -> Result<(), RepositoryError> {
            self.saved
                .lock()
                .map_err(|_| RepositoryError::Unavailable("poisoned".into()))?
                .push(user.clone());
            Ok(())
        }
    }

    /// Fails every save
    pub struct BrokenRepository;

    impl UserRepository for BrokenRepository {
        fn save(&self, _: &NewUser) -> Result<(), RepositoryError> {
            Err(RepositoryError::Unavailable("offline".into()))
        }
    }
}
