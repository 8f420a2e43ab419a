use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use common::{CreateEquipmentRequest, EquipmentDto, EquipmentHoursDto, LinkedList, MessageResponse};
use tracing::{debug, info, instrument, trace};

/// Create equipment for a user on a worksite
#[utoipa::path(
    post,
    path = "/{user_id}/{worksite_id}/equipment",
    tag = "equipment",
    params(
        ("user_id" = i32, Path, description = "Owning user ID"),
        ("worksite_id" = i32, Path, description = "Worksite ID"),
    ),
    request_body = CreateEquipmentRequest,
    responses(
        (status = 200, description = "Equipment created", body = MessageResponse),
        (status = 400, description = "User or worksite does not exist", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument]
pub async fn create_equipment(
    Path((user_id, worksite_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
    Json(request): Json<CreateEquipmentRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!(
        "Entering create_equipment function for user_id: {}, worksite_id: {}",
        user_id, worksite_id
    );
    debug!(
        "Creating equipment '{}' with working hours '{}'",
        request.name, request.working_hour
    );

    state
        .store
        .create_equipment(user_id, worksite_id, request.name, request.working_hour)
        .await?;

    Ok(Json(MessageResponse::new("Equipment created")))
}

/// Look up a user's equipment.
///
/// The second path segment is matched against the equipment id, not the
/// worksite id, so at most one row comes back.
#[utoipa::path(
    get,
    path = "/{user_id}/equipment/{worksite_id}",
    tag = "equipment",
    params(
        ("user_id" = i32, Path, description = "Owning user ID"),
        ("worksite_id" = i32, Path, description = "Matched against the equipment ID"),
    ),
    responses(
        (status = 200, description = "Matching equipment", body = [EquipmentDto]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument]
pub async fn get_equipment(
    Path((user_id, worksite_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<Vec<EquipmentDto>>, ApiError> {
    trace!(
        "Entering get_equipment function for user_id: {}, worksite_id: {}",
        user_id, worksite_id
    );

    let equipment: Vec<EquipmentDto> = state
        .store
        .equipment_for_user(user_id, worksite_id)
        .await?
        .into_iter()
        .map(|e| EquipmentDto {
            id: e.id,
            working_hour: e.working_hour,
            user_id: e.user_id,
        })
        .collect();

    info!("Returning {} equipment rows for user {}", equipment.len(), user_id);
    Ok(Json(equipment))
}

/// List a user's equipment by descending working hours (text ordering)
#[utoipa::path(
    get,
    path = "/equipment/descending_working_hour/{user_id}",
    tag = "equipment",
    params(
        ("user_id" = i32, Path, description = "Owning user ID"),
    ),
    responses(
        (status = 200, description = "Equipment, highest working hours first", body = [EquipmentHoursDto]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument]
pub async fn get_equipment_descending(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<LinkedList<EquipmentHoursDto>>, ApiError> {
    trace!("Entering get_equipment_descending function for user_id: {}", user_id);

    let ascending = state.store.equipment_by_working_hour(user_id).await?;
    debug!("Reversing {} equipment rows", ascending.len());

    // Each row goes in front of the previous one, so the list reads descending.
    let mut descending = LinkedList::new();
    for equipment in ascending {
        descending.push_front(EquipmentHoursDto {
            id: equipment.id,
            name: equipment.name,
            working_hour: equipment.working_hour,
            worksite_id: equipment.worksite_id,
        });
    }

    Ok(Json(descending))
}
