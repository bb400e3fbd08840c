//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/events`, `POST /api/events` - List approved events, submit an event
/// - `GET /api/events/localities` - Localities used by events
/// - `GET|PUT|DELETE /api/events/{event_id}` - Event detail, edit, delete
/// - `GET /api/events/{event_id}/availability` - Seat availability
/// - `GET|POST /api/events/{event_id}/attendance` - Checkout quote, request attendance
/// - `GET /api/events/{event_id}/attendance/mine` - Own registration
/// - `GET /api/user/registrations` - Own registrations
/// - `GET /api/moderation/summary` - Moderation dashboard
/// - `PUT /api/moderation/events/{event_id}/status/{status}` - Lifecycle override
/// - `GET|POST /api/admin/users`, `PUT /api/admin/users/{user_id}` - User administration
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Barrio", description = "Barrio community events API"), tags(
        (name = controller::event::EVENT_TAG, description = "Event listing and submission"),
        (name = controller::registration::REGISTRATION_TAG, description = "Attendance checkout"),
        (name = controller::user::USER_TAG, description = "Signed-in user routes"),
        (name = controller::moderation::MODERATION_TAG, description = "Event moderation"),
        (name = controller::admin::ADMIN_TAG, description = "User administration"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::event::list_events,
            controller::event::create_event
        ))
        .routes(routes!(controller::event::list_localities))
        .routes(routes!(
            controller::event::get_event,
            controller::event::update_event,
            controller::event::delete_event
        ))
        .routes(routes!(controller::event::get_availability))
        .routes(routes!(
            controller::registration::get_attendance_quote,
            controller::registration::request_attendance
        ))
        .routes(routes!(controller::registration::get_own_registration))
        .routes(routes!(controller::user::get_user_registrations))
        .routes(routes!(controller::moderation::get_moderation_summary))
        .routes(routes!(controller::moderation::set_event_status))
        .routes(routes!(
            controller::admin::list_users,
            controller::admin::create_user
        ))
        .routes(routes!(controller::admin::update_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
