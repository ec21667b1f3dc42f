use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, booking, hotel, room},
    doc::ApiDoc,
    state::AppState,
};

/// Builds every `/api` route and serves the generated OpenAPI document.
///
/// Swagger UI is mounted at `/api/docs`, the raw document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(hotel::get_hotels, hotel::create_hotel))
        .routes(routes!(hotel::get_hotel, hotel::update_hotel, hotel::delete_hotel))
        .routes(routes!(room::get_rooms, room::create_room))
        .routes(routes!(room::get_available_rooms))
        .routes(routes!(room::get_room, room::update_room, room::delete_room))
        .routes(routes!(booking::get_bookings, booking::create_booking))
        .routes(routes!(booking::get_booking, booking::cancel_booking))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
