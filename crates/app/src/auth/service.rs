//! Auth service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::{
    auth::{AuthServiceError, Claim, Credentials, TokenCodec},
    domain::users::{
        password::verify_password,
        repository::{PgUsersRepository, UsersRepository},
    },
};

#[derive(Clone)]
pub struct PgAuthService {
    users: Arc<dyn UsersRepository>,
    codec: TokenCodec,
}

impl fmt::Debug for PgAuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgAuthService")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, codec: TokenCodec) -> Self {
        Self::with_repository(Arc::new(PgUsersRepository::new(pool)), codec)
    }

    pub(crate) fn with_repository(users: Arc<dyn UsersRepository>, codec: TokenCodec) -> Self {
        Self { users, codec }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Claim, AuthServiceError> {
        let token = bearer_token.trim();

        if token.is_empty() {
            return Err(AuthServiceError::InvalidToken);
        }

        Ok(self.codec.verify(token)?)
    }

    async fn login(&self, credentials: Credentials) -> Result<String, AuthServiceError> {
        let Some(record) = self.users.find_user(credentials.username.trim()).await? else {
            debug!("login rejected: unknown username");

            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(&credentials.password, &record.password_hash) {
            debug!(username = %record.user.username, "login rejected: password mismatch");

            return Err(AuthServiceError::InvalidCredentials);
        }

        let claim = Claim {
            username: record.user.username,
            role: record.user.role,
            email: record.user.email,
        };

        Ok(self.codec.issue(&claim)?)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a bearer token and return the identity it carries.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Claim, AuthServiceError>;

    /// Check credentials and issue a signed identity token.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller.
    async fn login(&self, credentials: Credentials) -> Result<String, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        auth::{Role, SigningSecret},
        domain::users::{
            models::User,
            password::hash_password,
            repository::{MockUsersRepository, UserRecord},
        },
    };

    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(SigningSecret::new("test-secret"))
    }

    fn record() -> UserRecord {
        UserRecord {
            user: User {
                username: "ana".to_string(),
                email: "ana@example.com".to_string(),
                role: Role::Admin,
                created_at: Timestamp::UNIX_EPOCH,
            },
            password_hash: hash_password("secret"),
        }
    }

    fn credentials(password: &str) -> Credentials {
        Credentials {
            username: "ana".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_issues_token_carrying_user_identity() -> TestResult {
        let mut users = MockUsersRepository::new();

        users
            .expect_find_user()
            .once()
            .returning(|_| Ok(Some(record())));

        let service = PgAuthService::with_repository(Arc::new(users), codec());

        let token = service.login(credentials("secret")).await?;
        let claim = service.authenticate_bearer(&token).await?;

        assert_eq!(
            claim,
            Claim {
                username: "ana".to_string(),
                role: Role::Admin,
                email: "ana@example.com".to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let mut users = MockUsersRepository::new();

        users.expect_find_user().returning(|_| Ok(Some(record())));

        let service = PgAuthService::with_repository(Arc::new(users), codec());

        let result = service.login(credentials("nope")).await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn login_rejects_unknown_username() {
        let mut users = MockUsersRepository::new();

        users.expect_find_user().returning(|_| Ok(None));

        let service = PgAuthService::with_repository(Arc::new(users), codec());

        let result = service.login(credentials("secret")).await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn authenticate_rejects_blank_and_foreign_tokens() -> TestResult {
        let service = PgAuthService::with_repository(Arc::new(MockUsersRepository::new()), codec());

        let foreign = TokenCodec::new(SigningSecret::new("other")).issue(&Claim {
            username: "mallory".to_string(),
            role: Role::Admin,
            email: "m@example.com".to_string(),
        })?;

        let blank = service.authenticate_bearer("  ").await;
        let forged = service.authenticate_bearer(&foreign).await;

        assert!(matches!(blank, Err(AuthServiceError::InvalidToken)));
        assert!(matches!(forged, Err(AuthServiceError::InvalidToken)));

        Ok(())
    }

    #[test]
    fn debug_output_redacts_signing_secret() {
        let service = PgAuthService::with_repository(Arc::new(MockUsersRepository::new()), codec());

        let debug = format!("{service:?}");

        assert!(debug.starts_with("PgAuthService"), "unexpected debug: {debug}");
        assert!(!debug.contains("test-secret"), "secret leaked: {debug}");
    }
}
