use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_place::create_place;
use super::handlers::create_task::create_task;
use super::handlers::delete_photo::delete_photo;
use super::handlers::delete_place::delete_place;
use super::handlers::delete_task::delete_task;
use super::handlers::download_photo::download_photo;
use super::handlers::get_place::get_place;
use super::handlers::get_task::get_task;
use super::handlers::list_places::list_places;
use super::handlers::list_tasks::list_tasks;
use super::handlers::me::me;
use super::handlers::refresh_token::refresh_token;
use super::handlers::register::register;
use super::handlers::sign_in::sign_in;
use super::handlers::update_place::update_place;
use super::handlers::update_task::update_task;
use super::handlers::upload_photo::upload_photo;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::photo::ports::PhotoServicePort;
use crate::domain::place::ports::PlaceServicePort;
use crate::domain::task::ports::TaskServicePort;

/// Unified application state for all HTTP handlers.
///
/// Services are held behind their ports, so the composition root (and the
/// test harness) decides the concrete adapters.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub place_service: Arc<dyn PlaceServicePort>,
    pub task_service: Arc<dyn TaskServicePort>,
    pub photo_service: Arc<dyn PhotoServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState, max_upload_size: usize) -> Router {
    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(sign_in))
        .route("/auth/refresh", post(refresh_token));

    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/places", post(create_place).get(list_places))
        .route(
            "/places/:id",
            get(get_place).put(update_place).delete(delete_place),
        )
        .route("/tasks", post(create_task).get(list_tasks))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route(
            "/photos/upload",
            // Multipart envelope adds some overhead on top of the file cap
            post(upload_photo)
                .layer(DefaultBodyLimit::max(max_upload_size.saturating_add(64 * 1024))),
        )
        .route(
            "/photos/:filename",
            get(download_photo).delete(delete_photo),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
