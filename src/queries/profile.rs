//! User profile management.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{PasswordChange, UserProfile};

// ---------------------------------------------------------------------------
// ProfileQuery
// ---------------------------------------------------------------------------

pub struct ProfileQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ProfileQuery<'a> {
    /// Create a new `ProfileQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Load the profile of the given user.
    pub fn get(&self, user_id: i64) -> Result<UserProfile> {
        self.conn
            .get_json(config::USER_PROFILE, &id_query(user_id))
    }

    /// Update the user's email address.
    pub fn update_email(&self, user_id: i64, email: &str) -> Result<()> {
        let profile = UserProfile {
            email: email.to_string(),
        };
        self.conn
            .put_json(config::USER_PROFILE, &id_query(user_id), &profile)
    }

    /// Change the user's password.
    pub fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let change = PasswordChange {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.conn
            .put_json(config::CHANGE_PASSWORD, &id_query(user_id), &change)
    }
}

fn id_query(user_id: i64) -> [(&'static str, String); 1] {
    [("id", user_id.to_string())]
}
