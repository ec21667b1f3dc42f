use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

/// OpenAPI document; handler paths are collected by the router.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Booking API",
        description = "Hotel catalog, room availability and booking ledger"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and bearer tokens"),
        (name = "hotel", description = "Hotel catalog"),
        (name = "room", description = "Rooms and availability search"),
        (name = "booking", description = "Reservations owned by the caller")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected handlers.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}
