//! User Models

use jiff::Timestamp;

use crate::auth::Role;

/// Registered user. Credentials are never exposed through this model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: Timestamp,
}

/// New User Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
}
