//! Notifier Config

use clap::Args;

/// Order notification settings.
#[derive(Debug, Args)]
pub struct NotifierConfig {
    /// Mail relay endpoint; notifications are only logged when unset
    #[arg(long, env = "NOTIFIER_URL")]
    pub notifier_url: Option<String>,

    /// Sender address on order notifications
    #[arg(long, env = "NOTIFIER_SENDER", default_value = "orders@storefront.local")]
    pub notifier_sender: String,
}
