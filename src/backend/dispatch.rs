//! Maps an incoming request onto the registration or echo path.
//!
//! Nothing here renders or performs I/O: the handlers build a
//! [`RequestContext`], call [`dispatch`] and render the returned [`Outcome`].

use http::Method;
use std::collections::HashMap;

use crate::echo::{echo, EchoResult};
use crate::registration::{RegistrationInput, ValidationResult, Validator};
use crate::utils::password_utils::CryptoError;

/// Presence-only form field selecting the registration path
pub const REGISTER_MARKER: &str = "register";
/// Query parameter selecting the echo path
pub const ECHO_FIELD: &str = "username";

/// Everything the dispatcher may look at for one request
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub method: Method,
    pub form: HashMap<String, String>,
    pub query: HashMap<String, String>,
}

impl RequestContext {
    fn form_field(&self, name: &str) -> String {
        self.form.get(name).cloned().unwrap_or_default()
    }

    fn registration_input(&self) -> RegistrationInput {
        RegistrationInput {
            username: self.form_field("username"),
            email: self.form_field("email"),
            password: self.form_field("password"),
            confirm_password: self.form_field("confirm_password"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A registration form was submitted. `username` is the trimmed value.
    Registration {
        username: String,
        email: String,
        result: ValidationResult,
    },
    /// A GET carried the echo parameter
    Echo(EchoResult),
    /// Nothing was submitted; render the blank page
    Idle,
}

/// Selects and runs the path matching the request. Blocks while hashing.
pub fn dispatch(ctx: &RequestContext, validator: &Validator) -> Result<Outcome, CryptoError> {
    match ctx.method {
        Method::POST if ctx.form.contains_key(REGISTER_MARKER) => {
            let input = ctx.registration_input();
            let result = validator.validate(&input)?;

            Ok(Outcome::Registration {
                username: input.username.trim().to_string(),
                email: input.email,
                result,
            })
        }
        Method::GET => Ok(ctx
            .query
            .get(ECHO_FIELD)
            .map_or(Outcome::Idle, |raw| Outcome::Echo(echo(raw)))),
        _ => Ok(Outcome::Idle),
    }
}
