//! rheum-server
//!
//! HTTP service around one intake session: form editing, submission to the
//! model and result export.

pub mod assessment;
pub mod aws;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the router with all routes, audit logging and CORS.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/catalog", get(routes::catalog::get_catalog))
        .route("/api/session", get(routes::session::get_session))
        .route("/api/session/abandon", post(routes::session::abandon))
        .route("/api/intake/field", put(routes::intake::update_field))
        .route(
            "/api/intake/flags/{flag}/toggle",
            post(routes::intake::toggle_flag),
        )
        .route("/api/intake/joints/toggle", post(routes::intake::toggle_joint))
        .route(
            "/api/intake/medications",
            post(routes::intake::append_medication),
        )
        .route("/api/intake/reset", post(routes::intake::reset))
        .route("/api/intake/submit", post(routes::intake::submit))
        .route("/api/result/back", post(routes::result::back))
        .route("/api/result/copy", get(routes::result::copy_text))
        .route("/api/result/html", get(routes::result::render_html))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
