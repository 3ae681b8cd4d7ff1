//! Price aggregation over cart entries and catalog prices.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::{
    carts::{
        models::CartEntry,
        repository::{CartsRepository, PgCartsRepository},
    },
    pricing::errors::PricingServiceError,
    products::{
        models::ProductUuid,
        repository::{CatalogLookup, PgProductsRepository},
    },
};

#[derive(Clone)]
pub struct PgPricingService {
    carts: Arc<dyn CartsRepository>,
    catalog: Arc<dyn CatalogLookup>,
}

impl fmt::Debug for PgPricingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgPricingService")
            .finish_non_exhaustive()
    }
}

impl PgPricingService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repositories(
            Arc::new(PgCartsRepository::new(pool.clone())),
            Arc::new(PgProductsRepository::new(pool)),
        )
    }

    pub(crate) fn with_repositories(
        carts: Arc<dyn CartsRepository>,
        catalog: Arc<dyn CatalogLookup>,
    ) -> Self {
        Self { carts, catalog }
    }
}

#[async_trait]
impl PricingService for PgPricingService {
    async fn total_for(&self, owner: &str) -> Result<u64, PricingServiceError> {
        let entries = self.carts.list_entries(owner).await?;

        self.total_for_entries(&entries).await
    }

    async fn total_for_entries(&self, entries: &[CartEntry]) -> Result<u64, PricingServiceError> {
        // Malformed keys cannot match a catalog row; they price as zero.
        let lines: Vec<(Option<ProductUuid>, u64)> = entries
            .iter()
            .map(|entry| (ProductUuid::parse(&entry.product_id), entry.quantity))
            .collect();

        let lookup: Vec<ProductUuid> = lines.iter().filter_map(|(product, _)| *product).collect();

        if lookup.is_empty() {
            return Ok(0);
        }

        let prices = self.catalog.prices(lookup).await?;

        lines.iter().try_fold(0_u64, |total, (product, quantity)| {
            let price = product
                .and_then(|product| prices.get(&product).copied())
                .unwrap_or_default();

            price
                .checked_mul(*quantity)
                .and_then(|line| total.checked_add(line))
                .ok_or(PricingServiceError::Overflow)
        })
    }
}

#[automock]
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Sum of quantity × price over the owner's cart.
    ///
    /// Entries whose product cannot be resolved contribute nothing. An empty
    /// cart totals zero.
    async fn total_for(&self, owner: &str) -> Result<u64, PricingServiceError>;

    /// Same aggregation over an already-read snapshot of cart entries.
    async fn total_for_entries(&self, entries: &[CartEntry]) -> Result<u64, PricingServiceError>;
}
