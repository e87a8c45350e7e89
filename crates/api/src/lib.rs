//! HTTP API for student fee status lookups.
//!
//! Exposes `GET /GetFeeStatus`, plus health and Prometheus metrics endpoints,
//! with structured logging (tracing) on every request.

pub mod config;
pub mod error;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use fee_store::{PostgresStudentRepository, StudentRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use error::ApiError;
use routes::fee_status::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// Built once at startup; the route table is immutable afterwards.
pub fn create_app<R: StudentRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/GetFeeStatus", get(routes::fee_status::get::<R>))
        .with_state(state)
        .merge(metrics_router)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state backed by PostgreSQL.
pub fn create_default_state(config: &Config) -> Arc<AppState<PostgresStudentRepository>> {
    let repository = PostgresStudentRepository::new(config.db_connection_string.clone());
    Arc::new(AppState::new(repository))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    ApiError::ConnectionFailure(format!("handler panicked: {detail}")).into_response()
}
