//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! collected into a unified OpenAPI document, and served alongside Swagger
//! UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tripdesk", description = "Tripdesk API"), tags(
        (name = controller::registration::REGISTRATION_TAG, description = "Trip registration API routes"),
        (name = controller::assignment::ASSIGNMENT_TAG, description = "Group flight assignment API routes"),
        (name = controller::flight::FLIGHT_TAG, description = "Flight directory API routes"),
        (name = controller::event::EVENT_TAG, description = "Trip event API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::registration::submit_registration))
        .routes(routes!(controller::registration::get_own_registration))
        .routes(routes!(controller::registration::cancel_own_registration))
        .routes(routes!(controller::registration::set_registration_status))
        .routes(routes!(controller::assignment::upsert_assignment))
        .routes(routes!(controller::assignment::increment_capacity))
        .routes(routes!(controller::assignment::decrement_capacity))
        .routes(routes!(
            controller::flight::create_flight,
            controller::flight::find_flights
        ))
        .routes(routes!(controller::flight::get_flight))
        .routes(routes!(controller::event::create_event))
        .routes(routes!(controller::event::get_event))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
