use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use common::{CreateWorksiteRequest, MessageResponse, WorksiteDto};
use model::entities::worksite;
use tracing::{debug, info, instrument, trace};

fn to_dto(model: worksite::Model) -> WorksiteDto {
    WorksiteDto {
        id: model.id,
        name: model.name,
    }
}

/// Create a worksite owned by a user
#[utoipa::path(
    post,
    path = "/{user_id}/worksite",
    tag = "worksites",
    params(
        ("user_id" = i32, Path, description = "Owning user ID"),
    ),
    request_body = CreateWorksiteRequest,
    responses(
        (status = 200, description = "Worksite created", body = MessageResponse),
        (status = 400, description = "User does not exist", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument]
pub async fn create_worksite(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<CreateWorksiteRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering create_worksite function for user_id: {}", user_id);
    debug!("Creating worksite '{}' for user {}", request.name, user_id);

    state.store.create_worksite(user_id, request.name).await?;

    Ok(Json(MessageResponse::new("Worksite created")))
}

/// List the worksites owned by a user
#[utoipa::path(
    get,
    path = "/{user_id}/worksite",
    tag = "worksites",
    params(
        ("user_id" = i32, Path, description = "Owning user ID"),
    ),
    responses(
        (status = 200, description = "Worksites of the user", body = [WorksiteDto]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument]
pub async fn get_worksites(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Vec<WorksiteDto>>, ApiError> {
    trace!("Entering get_worksites function for user_id: {}", user_id);

    let worksites: Vec<WorksiteDto> = state
        .store
        .worksites_for_user(user_id)
        .await?
        .into_iter()
        .map(to_dto)
        .collect();

    info!("Returning {} worksites for user {}", worksites.len(), user_id);
    Ok(Json(worksites))
}
