use crate::handlers::{
    equipment::{create_equipment, get_equipment, get_equipment_descending},
    health::health_check,
    users::{create_user, delete_user},
    worksites::{create_worksite, get_worksites},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Users
        .route("/user", post(create_user))
        .route("/user/:user_id", delete(delete_user))
        // Worksites
        .route("/:user_id/worksite", post(create_worksite).get(get_worksites))
        // Equipment
        .route("/:user_id/:worksite_id/equipment", post(create_equipment))
        .route("/:user_id/equipment/:worksite_id", get(get_equipment))
        .route(
            "/equipment/descending_working_hour/:user_id",
            get(get_equipment_descending),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
