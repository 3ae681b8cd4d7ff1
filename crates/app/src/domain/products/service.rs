//! Products service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::products::{
    errors::ProductsServiceError,
    models::{MAX_RATING, MIN_RATING, NewProduct, Product, ProductFilter, ProductUpdate, ProductUuid},
    repository::{PgProductsRepository, ProductsRepository},
};

#[derive(Clone)]
pub struct PgProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl fmt::Debug for PgProductsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgProductsService")
            .finish_non_exhaustive()
    }
}

impl PgProductsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgProductsRepository::new(pool)))
    }

    pub(crate) fn with_repository(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.repository.list_products(filter).await?)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if product.title.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        if !product.amounts_in_range() {
            return Err(ProductsServiceError::InvalidData);
        }

        let created = self
            .repository
            .create_product(ProductUuid::new(), product)
            .await?;

        info!(product = %created.uuid, title = %created.title, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        title: &str,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        if !update.amounts_in_range() {
            return Err(ProductsServiceError::InvalidData);
        }

        self.repository
            .update_product(title, update)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn delete_product(&self, title: &str) -> Result<(), ProductsServiceError> {
        let rows_affected = self.repository.delete_product(title).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        info!(title, "deleted product");

        Ok(())
    }

    async fn rate_product(&self, title: &str, rating: i64) -> Result<Product, ProductsServiceError> {
        let rating = u8::try_from(rating)
            .ok()
            .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))
            .ok_or(ProductsServiceError::InvalidRating)?;

        self.repository
            .rate_product(title, rating)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves products matching the filter.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Creates a new product. Titles are unique.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Updates the product with the given title.
    async fn update_product(
        &self,
        title: &str,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes the product with the given title.
    async fn delete_product(&self, title: &str) -> Result<(), ProductsServiceError>;

    /// Records one customer rating.
    async fn rate_product(&self, title: &str, rating: i64) -> Result<Product, ProductsServiceError>;
}
