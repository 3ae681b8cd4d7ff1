//! Cart Entries Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{database::try_get_unsigned, domain::carts::models::CartEntry};

const UPSERT_ENTRY_SQL: &str = include_str!("sql/upsert_entry.sql");
const INCREMENT_ENTRY_SQL: &str = include_str!("sql/increment_entry.sql");
const LIST_ENTRIES_SQL: &str = include_str!("sql/list_entries.sql");
const DELETE_ENTRY_SQL: &str = include_str!("sql/delete_entry.sql");
const CLEAR_ENTRIES_SQL: &str = include_str!("sql/clear_entries.sql");

#[automock]
#[async_trait]
pub(crate) trait CartsRepository: Send + Sync {
    /// Insert an entry, or add `quantity` to the existing one.
    async fn upsert_entry(
        &self,
        owner: &str,
        product_id: &str,
        quantity: i64,
    ) -> Result<CartEntry, sqlx::Error>;

    /// Apply `delta` to an existing entry. Returns `None` when there is no
    /// entry or the result would not stay positive.
    async fn increment_entry(
        &self,
        owner: &str,
        product_id: &str,
        delta: i64,
    ) -> Result<Option<CartEntry>, sqlx::Error>;

    async fn list_entries(&self, owner: &str) -> Result<Vec<CartEntry>, sqlx::Error>;

    async fn delete_entry(&self, owner: &str, product_id: &str) -> Result<u64, sqlx::Error>;

    async fn clear_entries(&self, owner: &str) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgCartsRepository {
    pool: PgPool,
}

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartsRepository for PgCartsRepository {
    async fn upsert_entry(
        &self,
        owner: &str,
        product_id: &str,
        quantity: i64,
    ) -> Result<CartEntry, sqlx::Error> {
        query_as::<Postgres, CartEntry>(UPSERT_ENTRY_SQL)
            .bind(owner)
            .bind(product_id)
            .bind(quantity)
            .fetch_one(&self.pool)
            .await
    }

    async fn increment_entry(
        &self,
        owner: &str,
        product_id: &str,
        delta: i64,
    ) -> Result<Option<CartEntry>, sqlx::Error> {
        query_as::<Postgres, CartEntry>(INCREMENT_ENTRY_SQL)
            .bind(owner)
            .bind(product_id)
            .bind(delta)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list_entries(&self, owner: &str) -> Result<Vec<CartEntry>, sqlx::Error> {
        query_as::<Postgres, CartEntry>(LIST_ENTRIES_SQL)
            .bind(owner)
            .fetch_all(&self.pool)
            .await
    }

    async fn delete_entry(&self, owner: &str, product_id: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ENTRY_SQL)
            .bind(owner)
            .bind(product_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn clear_entries(&self, owner: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_ENTRIES_SQL)
            .bind(owner)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartEntry {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            owner: row.try_get("owner")?,
            product_id: row.try_get("product_id")?,
            quantity: try_get_unsigned(row, "quantity")?,
        })
    }
}
