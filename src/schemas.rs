use common::{
    CreateEquipmentRequest, CreateUserRequest, CreateWorksiteRequest, EquipmentDto,
    EquipmentHoursDto, MessageResponse, WorksiteDto,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::store::Store;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Relational store handle
    pub store: Store,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::create_user,
        crate::handlers::users::delete_user,
        crate::handlers::worksites::create_worksite,
        crate::handlers::worksites::get_worksites,
        crate::handlers::equipment::create_equipment,
        crate::handlers::equipment::get_equipment,
        crate::handlers::equipment::get_equipment_descending,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            CreateUserRequest,
            CreateWorksiteRequest,
            CreateEquipmentRequest,
            WorksiteDto,
            EquipmentDto,
            EquipmentHoursDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "worksites", description = "Worksite endpoints"),
        (name = "equipment", description = "Equipment endpoints"),
    ),
    info(
        title = "Sitegear API",
        description = "Tracks users, their worksites and the equipment deployed on them",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
