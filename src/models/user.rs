use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Credentials — Login request body
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// LoginResponse / UserAccount
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserAccount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub email: String,
}

// ---------------------------------------------------------------------------
// UserProfile — Profile read/update body
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,
}

// ---------------------------------------------------------------------------
// PasswordChange — Change-password request body
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}
