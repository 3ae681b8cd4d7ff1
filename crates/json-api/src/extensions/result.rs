//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::debug;

/// Map errors onto HTTP status errors.
pub(crate) trait ResultExt<T> {
    /// Reject the request as malformed with a caller-facing message.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("rejected request: {brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }
}
