use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use scaleflow_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let access_routes = Router::new()
        .route("/api/access/me", get(handlers::access::me_handler))
        .route(
            "/api/access/routes",
            get(handlers::access::route_access_handler),
        )
        .route("/api/access/gate", post(handlers::access::gate_handler))
        .route(
            "/api/access/shifts/{shift_id}",
            get(handlers::access::shift_access_handler),
        )
        .route(
            "/api/companies/{company_id}/shifts",
            get(handlers::access::company_shifts_handler),
        )
        .route(
            "/api/access/users/{user_id}",
            get(handlers::access::user_access_handler),
        )
        .route(
            "/api/access/users/{user_id}/role",
            post(handlers::access::assign_role_handler),
        )
        .route(
            "/api/access/swap-requests/{swap_request_id}/approval",
            post(handlers::access::approve_swap_request_handler),
        )
        .route(
            "/api/access/preferences/{preference_id}/approval",
            post(handlers::access::approve_preference_handler),
        )
        .route_layer(from_fn(middleware::require_actor));

    let cors_layer = cors::build_cors_layer(frontend_url)?;

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(access_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
