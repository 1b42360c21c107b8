//! Authentication against the Printrack backend.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Credentials, LoginResponse};

// ---------------------------------------------------------------------------
// AuthQuery
// ---------------------------------------------------------------------------

pub struct AuthQuery<'a> {
    conn: &'a Connection,
}

impl<'a> AuthQuery<'a> {
    /// Create a new `AuthQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Log in with email and password.
    ///
    /// Returns the access token and account data. The token is not installed
    /// on the connection here; the caller decides whether to keep it (see
    /// [`PrintrackSdk::login`](crate::PrintrackSdk::login)). A wrong
    /// password surfaces as [`Api`](crate::PrintrackError::Api) with the
    /// backend's message body.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.conn.post_json(config::AUTH_LOGIN, &credentials)
    }
}
