//! Password digests.

use sha2::{Digest, Sha256};

// TODO: move to a salted KDF (argon2) and re-hash on next successful login.
pub(crate) fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

pub(crate) fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password) == password_hash
}
