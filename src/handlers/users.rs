use crate::error::ApiError;
use crate::schemas::AppState;
use crate::store::StoreError;
use axum::{
    extract::{Path, State},
    response::Json,
};
use common::{CreateUserRequest, MessageResponse};
use tracing::{debug, instrument, trace};

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering create_user function");
    debug!("Creating user with name: {}", request.name);

    state.store.create_user(request.name, request.email).await?;

    Ok(Json(MessageResponse::new("User created")))
}

/// Delete a user together with its worksites and equipment
#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering delete_user function for user_id: {}", user_id);

    match state.store.delete_user(user_id).await {
        Ok(()) => Ok(Json(MessageResponse::new("User deleted"))),
        Err(StoreError::MissingUser) => Err(ApiError::NotFound {
            message: StoreError::MissingUser.to_string(),
        }),
        Err(err) => Err(err.into()),
    }
}
