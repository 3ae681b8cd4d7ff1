//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::auth::Credentials;

use crate::{auth::into_status_error, extensions::*, state::State};

/// Login Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for Credentials {
    type Error = StatusError;

    fn try_from(request: LoginRequest) -> Result<Self, Self::Error> {
        match (
            present(request.username),
            request.password.filter(|password| !password.is_empty()),
        ) {
            (Some(username), Some(password)) => Ok(Credentials { username, password }),
            (username, password) => Err(missing_fields(&[
                ("username", username.is_some()),
                ("password", password.is_some()),
            ])),
        }
    }
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Signed bearer token
    pub token: String,
}

/// Login Handler
///
/// Exchanges a username and password for a bearer token.
#[endpoint(
    tags("users"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid username or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let credentials = Credentials::try_from(json.into_inner())?;

    let token = state
        .app
        .auth
        .login(credentials)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LoginResponse { token }))
}
