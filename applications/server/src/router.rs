/// HTTP router assembly
use crate::{api, config::ServerSettings, middleware, state::AppState};
use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_router(app_state: AppState, settings: &ServerSettings) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/register", post(api::auth::register))
        .route("/login", post(api::auth::login))
        // Profiles
        .route(
            "/students",
            get(api::profiles::list_profiles).post(api::profiles::create_profile),
        )
        .route("/students/stats", get(api::profiles::profile_stats))
        .route("/students/upload", post(api::upload::upload_csv))
        .route(
            "/students/:id",
            get(api::profiles::get_profile)
                .put(api::profiles::update_profile)
                .delete(api::profiles::delete_profile),
        );

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route("/dashboard", get(api::dashboard::dashboard))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
