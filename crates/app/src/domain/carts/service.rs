//! Carts service.

use std::{cmp::Ordering, fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::carts::{
    errors::CartsServiceError,
    models::CartEntry,
    repository::{CartsRepository, PgCartsRepository},
};

#[derive(Clone)]
pub struct PgCartsService {
    repository: Arc<dyn CartsRepository>,
}

impl fmt::Debug for PgCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgCartsService")
            .finish_non_exhaustive()
    }
}

impl PgCartsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgCartsRepository::new(pool)))
    }

    pub(crate) fn with_repository(repository: Arc<dyn CartsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_or_increment(
        &self,
        owner: &str,
        product_id: &str,
        quantity: i64,
    ) -> Result<CartEntry, CartsServiceError> {
        if product_id.trim().is_empty() {
            return Err(CartsServiceError::MissingRequiredData);
        }

        let entry = match quantity.cmp(&0) {
            Ordering::Greater => {
                self.repository
                    .upsert_entry(owner, product_id, quantity)
                    .await?
            }
            Ordering::Less => self
                .repository
                .increment_entry(owner, product_id, quantity)
                .await?
                .ok_or(CartsServiceError::InvalidQuantity)?,
            Ordering::Equal => return Err(CartsServiceError::InvalidQuantity),
        };

        debug!(owner, product_id, quantity = entry.quantity, "cart entry stored");

        Ok(entry)
    }

    async fn remove(&self, owner: &str, product_id: &str) -> Result<(), CartsServiceError> {
        let removed = self.repository.delete_entry(owner, product_id).await?;

        debug!(owner, product_id, removed, "cart entry removed");

        Ok(())
    }

    async fn list_for_owner(&self, owner: &str) -> Result<Vec<CartEntry>, CartsServiceError> {
        Ok(self.repository.list_entries(owner).await?)
    }

    async fn clear(&self, owner: &str) -> Result<(), CartsServiceError> {
        self.repository.clear_entries(owner).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add `quantity` of a product to the owner's cart, merging with an
    /// existing entry. A negative quantity decrements an existing entry but
    /// never takes it to zero or below.
    ///
    /// Decrements are for internal callers only. The HTTP add endpoint
    /// rejects non-positive quantities before reaching this method.
    async fn add_or_increment(
        &self,
        owner: &str,
        product_id: &str,
        quantity: i64,
    ) -> Result<CartEntry, CartsServiceError>;

    /// Remove a product from the owner's cart. Removing an absent entry is
    /// not an error.
    async fn remove(&self, owner: &str, product_id: &str) -> Result<(), CartsServiceError>;

    /// All entries in the owner's cart; empty when there is no cart.
    async fn list_for_owner(&self, owner: &str) -> Result<Vec<CartEntry>, CartsServiceError>;

    /// Remove every entry in the owner's cart.
    async fn clear(&self, owner: &str) -> Result<(), CartsServiceError>;
}
