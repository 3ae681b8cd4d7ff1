//! Orders Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, types::Json};

use crate::{
    database::{to_bigint, try_get_unsigned},
    domain::orders::models::{NewOrder, Order, OrderDateRange, OrderItem, OrderUuid},
};

const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");

#[automock]
#[async_trait]
pub(crate) trait OrdersRepository: Send + Sync {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, sqlx::Error>;

    async fn list_orders(
        &self,
        owner: &str,
        range: OrderDateRange,
    ) -> Result<Vec<Order>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgOrdersRepository {
    pool: PgPool,
}

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrdersRepository for PgOrdersRepository {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(INSERT_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.owner)
            .bind(Json(order.items))
            .bind(SqlxTimestamp::from(order.order_date))
            .bind(to_bigint(order.total_price, "total_price")?)
            .bind(order.discount_code)
            .fetch_one(&self.pool)
            .await
    }

    async fn list_orders(
        &self,
        owner: &str,
        range: OrderDateRange,
    ) -> Result<Vec<Order>, sqlx::Error> {
        query_as::<Postgres, Order>(LIST_ORDERS_SQL)
            .bind(owner)
            .bind(range.from.map(SqlxTimestamp::from))
            .bind(range.until.map(SqlxTimestamp::from))
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(items) = row.try_get::<Json<Vec<OrderItem>>, _>("items")?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            owner: row.try_get("owner")?,
            items,
            order_date: row.try_get::<SqlxTimestamp, _>("order_date")?.to_jiff(),
            total_price: try_get_unsigned(row, "total_price")?,
            discount_code: row.try_get("discount_code")?,
        })
    }
}
