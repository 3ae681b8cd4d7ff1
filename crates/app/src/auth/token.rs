//! Identity token encoding and verification.

use std::{fmt, sync::Arc};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use zeroize::Zeroize;

use crate::auth::Claim;

const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Process-wide HMAC signing secret.
#[derive(Clone)]
pub struct SigningSecret {
    bytes: Vec<u8>,
}

impl SigningSecret {
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: secret.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for SigningSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is malformed, unsigned or missing identity fields")]
    InvalidToken,

    #[error("failed to encode token")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

/// Signs and verifies identity claims. Tokens carry no expiry.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    secret: Arc<SigningSecret>,
}

impl TokenCodec {
    #[must_use]
    pub fn new(secret: SigningSecret) -> Self {
        Self {
            secret: Arc::new(secret),
        }
    }

    /// Produce a signed token for the given identity.
    ///
    /// # Errors
    ///
    /// Returns an error only if the claim cannot be serialized or signed.
    pub fn issue(&self, claim: &Claim) -> Result<String, TokenError> {
        encode(
            &Header::new(TOKEN_ALGORITHM),
            claim,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Encode)
    }

    /// Verify a token's signature and decode its identity claim.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidToken`] when the signature does not match,
    /// the token is malformed, or any identity field is missing.
    pub fn verify(&self, token: &str) -> Result<Claim, TokenError> {
        decode::<Claim>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation(),
        )
        .map(|data| data.claims)
        .map_err(|_rejected| TokenError::InvalidToken)
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(TOKEN_ALGORITHM);

    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    validation
}
