pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::profile::handlers as profile_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile
        .route("/api/v1/profile", get(profile_handlers::handle_get_profile))
        .route("/api/v1/profile", put(profile_handlers::handle_upsert_profile))
        // Catalog
        .route("/api/v1/courses", get(catalog_handlers::handle_list_courses))
        .route(
            "/api/v1/courses/search",
            post(catalog_handlers::handle_search_courses),
        )
        .route("/api/v1/schools", get(catalog_handlers::handle_list_schools))
        .route(
            "/api/v1/schools/search",
            get(catalog_handlers::handle_search_schools),
        )
        .route(
            "/api/v1/scholarships",
            get(catalog_handlers::handle_list_scholarships),
        )
        .route(
            "/api/v1/scholarships/search",
            post(catalog_handlers::handle_search_scholarships),
        )
        .route("/api/v1/seed", post(catalog_handlers::handle_seed))
        // Guidance
        .route(
            "/api/v1/recommendations",
            post(recommend_handlers::handle_generate),
        )
        .route("/api/v1/chat", post(recommend_handlers::handle_chat))
        .with_state(state)
}
