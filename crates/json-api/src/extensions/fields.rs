//! Required request field checks.

use salvo::prelude::StatusError;

/// Treat blank strings as absent.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Build the 400 listing every absent field, in declaration order.
pub(crate) fn missing_fields(fields: &[(&str, bool)]) -> StatusError {
    let missing = fields
        .iter()
        .filter(|(_, is_present)| !is_present)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");

    StatusError::bad_request().brief(format!("Missing fields: {missing}"))
}
