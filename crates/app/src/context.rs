//! App Context

use std::{fmt, sync::Arc};

use sqlx::{PgPool, migrate::MigrateError};
use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, PgAuthService, SigningSecret, TokenCodec},
    database,
    domain::{
        carts::{CartsService, PgCartsService},
        checkout::{CheckoutService, DiscountTable, PgCheckoutService},
        orders::{OrdersService, PgOrdersService},
        pricing::{PgPricingService, PricingService},
        products::{PgProductsService, ProductsService},
        users::{PgUsersService, UsersService},
    },
    notifier::{HttpNotifier, LogNotifier, Notifier},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),

    #[error("token signing secret must not be empty")]
    EmptySigningSecret,
}

/// Where order notifications go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifierSettings {
    /// Mail relay endpoint. Notifications are only logged when unset.
    pub endpoint: Option<String>,
    pub sender: String,
}

/// Process-wide settings fixed at startup.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub max_connections: u32,
    pub signing_secret: SigningSecret,
    pub discounts: DiscountTable,
    pub notifier: NotifierSettings,
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UsersService>,
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub pricing: Arc<dyn PricingService>,
    pub orders: Arc<dyn OrdersService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL, applying pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when the signing secret is empty, or when connecting
    /// to or migrating the database fails.
    pub async fn from_database_url(url: &str, settings: AppSettings) -> Result<Self, AppInitError> {
        if settings.signing_secret.is_empty() {
            return Err(AppInitError::EmptySigningSecret);
        }

        let pool = database::connect(url, settings.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_pool(pool, settings))
    }

    #[must_use]
    pub fn from_pool(pool: PgPool, settings: AppSettings) -> Self {
        let notifier: Arc<dyn Notifier> = match settings.notifier.endpoint {
            Some(endpoint) => {
                info!(endpoint = %endpoint, "order notifications enabled");

                Arc::new(HttpNotifier::new(endpoint, settings.notifier.sender))
            }
            None => Arc::new(LogNotifier),
        };

        let codec = TokenCodec::new(settings.signing_secret);
        let discounts = Arc::new(settings.discounts);

        Self {
            auth: Arc::new(PgAuthService::new(pool.clone(), codec)),
            users: Arc::new(PgUsersService::new(pool.clone())),
            products: Arc::new(PgProductsService::new(pool.clone())),
            carts: Arc::new(PgCartsService::new(pool.clone())),
            pricing: Arc::new(PgPricingService::new(pool.clone())),
            orders: Arc::new(PgOrdersService::new(pool.clone())),
            checkout: Arc::new(PgCheckoutService::new(pool, notifier, discounts)),
        }
    }
}
