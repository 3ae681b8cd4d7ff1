//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    database::{to_bigint, try_get_unsigned},
    domain::products::models::{
        NewProduct, Product, ProductFilter, ProductUpdate, ProductUuid, Rating,
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const RATE_PRODUCT_SQL: &str = include_str!("sql/rate_product.sql");
const FIND_PRICES_SQL: &str = include_str!("sql/find_prices.sql");

#[automock]
#[async_trait]
pub(crate) trait ProductsRepository: Send + Sync {
    async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, sqlx::Error>;

    async fn create_product(
        &self,
        uuid: ProductUuid,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error>;

    async fn update_product(
        &self,
        title: &str,
        update: ProductUpdate,
    ) -> Result<Option<Product>, sqlx::Error>;

    async fn delete_product(&self, title: &str) -> Result<u64, sqlx::Error>;

    /// Add one rating to the accumulator in a single statement.
    async fn rate_product(&self, title: &str, rating: u8) -> Result<Option<Product>, sqlx::Error>;
}

/// Read-only price lookup over the catalog.
#[automock]
#[async_trait]
pub(crate) trait CatalogLookup: Send + Sync {
    /// Prices for the given products. Unknown products are absent from the map.
    async fn prices(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<FxHashMap<ProductUuid, u64>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub(crate) struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Filter bounds past `i64::MAX` cannot match a stored value anyway.
fn bound(value: Option<u64>) -> Option<i64> {
    value.map(|value| i64::try_from(value).unwrap_or(i64::MAX))
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(bound(filter.min_stock))
            .bind(bound(filter.min_price))
            .bind(bound(filter.max_price))
            .bind(filter.category)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_product(
        &self,
        uuid: ProductUuid,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(product.title)
            .bind(to_bigint(product.price, "price")?)
            .bind(product.category)
            .bind(product.description)
            .bind(to_bigint(product.stock, "stock")?)
            .bind(product.image)
            .fetch_one(&self.pool)
            .await
    }

    async fn update_product(
        &self,
        title: &str,
        update: ProductUpdate,
    ) -> Result<Option<Product>, sqlx::Error> {
        let price = update
            .price
            .map(|price| to_bigint(price, "price"))
            .transpose()?;

        let stock = update
            .stock
            .map(|stock| to_bigint(stock, "stock"))
            .transpose()?;

        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(title)
            .bind(price)
            .bind(update.category)
            .bind(update.description)
            .bind(stock)
            .bind(update.image)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_product(&self, title: &str) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(title)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn rate_product(&self, title: &str, rating: u8) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(RATE_PRODUCT_SQL)
            .bind(title)
            .bind(i64::from(rating))
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl CatalogLookup for PgProductsRepository {
    async fn prices(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<FxHashMap<ProductUuid, u64>, sqlx::Error> {
        if products.is_empty() {
            return Ok(FxHashMap::default());
        }

        let uuids: Vec<Uuid> = products.into_iter().map(ProductUuid::into_uuid).collect();

        let rows = query(FIND_PRICES_SQL)
            .bind(uuids)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<(ProductUuid, u64), sqlx::Error> {
                Ok((
                    ProductUuid::from_uuid(row.try_get("uuid")?),
                    try_get_unsigned(row, "price")?,
                ))
            })
            .collect()
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            title: row.try_get("title")?,
            price: try_get_unsigned(row, "price")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
            stock: try_get_unsigned(row, "stock")?,
            image: row.try_get("image")?,
            rating: Rating {
                count: try_get_unsigned(row, "rating_count")?,
                sum: try_get_unsigned(row, "rating_sum")?,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
