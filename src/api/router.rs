use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{availability, health, pass, pass_type, profile};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Pass types (admin create, public listing with embedded profile)
        .route("/api/v1/pass-types", get(pass_type::list_pass_types).post(pass_type::create_pass_type))
        .route("/api/v1/pass-types/{pass_type_id}", get(pass_type::get_pass_type))

        // Profile configuration
        .route("/api/v1/profiles", get(profile::list_profiles).post(profile::create_profile))
        .route("/api/v1/profiles/{profile_id}", get(profile::get_profile).put(profile::update_profile).delete(profile::delete_profile))

        // Booking flow
        .route("/api/v1/availability", get(availability::check_slot))
        .route("/api/v1/passes", get(pass::get_pass).post(pass::create_pass))
        .route("/api/v1/passes/{pass_id}/activate", post(pass::activate_pass))
        .route("/api/v1/passes/{pass_id}/cancel", post(pass::cancel_pass))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
