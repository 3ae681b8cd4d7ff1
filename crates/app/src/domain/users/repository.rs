//! Users Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::{auth::Role, domain::users::models::User};

const FIND_USER_SQL: &str = include_str!("sql/find_user.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");

/// Stored user together with its password digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewUserRecord {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub role: Role,
}

#[automock]
#[async_trait]
pub(crate) trait UsersRepository: Send + Sync {
    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, sqlx::Error>;

    async fn create_user(&self, user: NewUserRecord) -> Result<User, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_SQL)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_user(&self, user: NewUserRecord) -> Result<User, sqlx::Error> {
        query_as::<Postgres, User>(CREATE_USER_SQL)
            .bind(user.username)
            .bind(user.password_hash)
            .bind(user.email)
            .bind(user.role.as_str())
            .fetch_one(&self.pool)
            .await
    }
}

fn try_get_role(row: &PgRow) -> Result<Role, sqlx::Error> {
    let role: String = row.try_get("role")?;

    role.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "role".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            role: try_get_role(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: User::from_row(row)?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}
