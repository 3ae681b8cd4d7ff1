//! Access guard.

use thiserror::Error;

use crate::auth::{Claim, Role};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("missing or invalid credentials")]
    Unauthenticated,

    #[error("role is not permitted to perform this action")]
    Forbidden,
}

/// Check that `claim` carries exactly the `required` role.
///
/// Admin does not satisfy a customer gate, and customer does not satisfy an
/// admin gate.
///
/// # Errors
///
/// Returns [`AccessError::Forbidden`] when the roles differ.
pub fn authorize(claim: &Claim, required: Role) -> Result<(), AccessError> {
    if claim.role == required {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}
