use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, StatusMessageDto, SuccessMessageDto},
        automated_message::{AutomatedMessageDto, AutomatedMessageRequestDto},
        listing::{DeviceIdDto, GuideBookDto, ListingDto, ListingImageDto, ListingsDto},
        upsell::{UpsellDto, UpsellRequestDto},
    },
    server::{
        controller::{
            automated_message::{
                self, create_automated_message, delete_automated_message, get_automated_message,
                get_automated_messages, update_automated_message,
            },
            listing::{self, get_device_id, get_listing_by_id, get_listings, sync_listings},
            upsell::{self, create_upsell, delete_upsell, get_upsell, get_upsells, update_upsell},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        listing::get_listings,
        listing::get_listing_by_id,
        listing::get_device_id,
        listing::sync_listings,
        upsell::create_upsell,
        upsell::get_upsells,
        upsell::get_upsell,
        upsell::update_upsell,
        upsell::delete_upsell,
        automated_message::create_automated_message,
        automated_message::get_automated_messages,
        automated_message::get_automated_message,
        automated_message::update_automated_message,
        automated_message::delete_automated_message,
    ),
    components(schemas(
        ErrorDto,
        StatusMessageDto,
        SuccessMessageDto,
        ListingDto,
        ListingImageDto,
        GuideBookDto,
        ListingsDto,
        DeviceIdDto,
        UpsellDto,
        UpsellRequestDto,
        AutomatedMessageDto,
        AutomatedMessageRequestDto,
    )),
    tags(
        (name = "listing", description = "HostAway listings and lock devices"),
        (name = "upsell", description = "Paid guest extras"),
        (name = "automated_message", description = "Guest message templates"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/listings", get(get_listings))
        .route("/api/listings/sync", post(sync_listings))
        .route("/api/listings/{id}", get(get_listing_by_id))
        .route("/api/listings/{id}/device", get(get_device_id))
        .route("/api/upsells", post(create_upsell).get(get_upsells))
        .route(
            "/api/upsells/{id}",
            get(get_upsell).put(update_upsell).delete(delete_upsell),
        )
        .route(
            "/api/automated-messages",
            post(create_automated_message).get(get_automated_messages),
        )
        .route(
            "/api/automated-messages/{id}",
            get(get_automated_message)
                .put(update_automated_message)
                .delete(delete_automated_message),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
