//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, checkout::CheckoutConfig, db::DatabaseConfig, logging::LoggingConfig,
    notifier::NotifierConfig, server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod checkout;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod notifier;
pub(crate) mod server;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Identity token settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Checkout settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,

    /// Order notification settings.
    #[command(flatten)]
    pub notifier: NotifierConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_required_values_and_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--token-signing-secret",
            "shh",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.checkout.discount_codes.amount_for("AMOUNT100"), Some(10_000));
        assert_eq!(config.checkout.discount_codes.amount_for("AMOUNT200"), Some(20_000));
        assert!(config.notifier.notifier_url.is_none());

        Ok(())
    }

    #[test]
    fn rejects_malformed_discount_codes() {
        let result = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--token-signing-secret",
            "shh",
            "--discount-codes",
            "AMOUNT100",
        ]);

        assert!(result.is_err());
    }
}
