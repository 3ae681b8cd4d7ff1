//! Orders service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("invalid date bound: {0}")]
    InvalidDate(String),

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
