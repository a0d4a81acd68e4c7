// ABOUTME: Session state for the password-grant access token
// ABOUTME: Guards authorized calls against running before authentication

use crate::{model::TokenRequest, Error, Result};

pub const PASSWORD_GRANT: &str = "password";

pub fn password_grant<'a>(email: &'a str, password: &'a str) -> TokenRequest<'a> {
    TokenRequest {
        grant_type: PASSWORD_GRANT,
        username: email,
        password,
    }
}

/// Holds the access token for one run. Never written to disk.
#[derive(Default)]
pub struct Session {
    access_token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Replaces any previously stored token.
    pub fn store(&mut self, token: String) {
        self.access_token = Some(token);
    }

    pub fn bearer(&self) -> Result<String> {
        self.access_token
            .as_deref()
            .map(|token| format!("Bearer {}", token))
            .ok_or(Error::NoToken)
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
