//! Register User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::{auth::Role, domain::users::models::NewUser};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Register User Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    /// Either `customer` or `admin`
    pub role: Option<String>,
}

impl TryFrom<RegisterUserRequest> for NewUser {
    type Error = StatusError;

    fn try_from(request: RegisterUserRequest) -> Result<Self, Self::Error> {
        let fields = (
            present(request.username),
            request.password.filter(|password| !password.is_empty()),
            present(request.email),
            present(request.role),
        );

        match fields {
            (Some(username), Some(password), Some(email), Some(role)) => Ok(NewUser {
                username,
                password,
                email,
                role: role.parse::<Role>().or_400("Invalid role")?,
            }),
            (username, password, email, role) => Err(missing_fields(&[
                ("username", username.is_some()),
                ("password", password.is_some()),
                ("email", email.is_some()),
                ("role", role.is_some()),
            ])),
        }
    }
}

/// Register User Handler
#[endpoint(
    tags("users"),
    summary = "Register User",
    responses(
        (status_code = StatusCode::CREATED, description = "User registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterUserRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = NewUser::try_from(json.into_inner())?;

    state
        .app
        .users
        .register(user)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::CREATED)
}
