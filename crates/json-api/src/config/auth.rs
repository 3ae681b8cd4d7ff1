//! Auth Config

use clap::Args;

/// Identity token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify identity tokens
    #[arg(long, env = "TOKEN_SIGNING_SECRET", hide_env_values = true)]
    pub token_signing_secret: String,
}
