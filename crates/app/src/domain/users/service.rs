//! Users service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::users::{
    errors::UsersServiceError,
    models::{NewUser, User},
    password::hash_password,
    repository::{NewUserRecord, PgUsersRepository, UsersRepository},
};

#[derive(Clone)]
pub struct PgUsersService {
    repository: Arc<dyn UsersRepository>,
}

impl fmt::Debug for PgUsersService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgUsersService")
            .finish_non_exhaustive()
    }
}

impl PgUsersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgUsersRepository::new(pool)))
    }

    pub(crate) fn with_repository(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn register(&self, user: NewUser) -> Result<User, UsersServiceError> {
        let username = user.username.trim();

        if username.is_empty() || user.password.is_empty() || user.email.trim().is_empty() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        if self.repository.find_user(username).await?.is_some() {
            return Err(UsersServiceError::AlreadyExists);
        }

        // A concurrent registration still loses on the primary key.
        let created = self
            .repository
            .create_user(NewUserRecord {
                username: username.to_string(),
                password_hash: hash_password(&user.password),
                email: user.email.trim().to_string(),
                role: user.role,
            })
            .await?;

        info!(username = %created.username, role = %created.role, "registered user");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Create a user account.
    ///
    /// # Errors
    ///
    /// Returns [`UsersServiceError::AlreadyExists`] if the username is taken.
    async fn register(&self, user: NewUser) -> Result<User, UsersServiceError>;
}
