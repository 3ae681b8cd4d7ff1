//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use storefront_app::auth::Claim;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Attach the authenticated identity for downstream handlers.
    fn insert_claim(&mut self, claim: Claim);

    /// The identity attached by the auth middleware.
    fn claim_or_401(&self) -> Result<&Claim, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_claim(&mut self, claim: Claim) {
        self.inject(claim);
    }

    fn claim_or_401(&self) -> Result<&Claim, StatusError> {
        self.obtain::<Claim>().map_err(|_ignored| {
            StatusError::unauthorized().brief("Missing or invalid Authorization header")
        })
    }
}
