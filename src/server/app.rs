use anyhow::Result;
use axum::http::HeaderValue;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use super::handlers::{events, health, sponsors};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        events::list_events,
        events::create_event,
        sponsors::list_sponsors,
        sponsors::create_sponsor,
        sponsors::update_sponsor_status,
    ),
    components(schemas(
        events::CreateEventRequest,
        sponsors::CreateSponsorRequest,
        sponsors::UpdateSponsorStatusRequest,
        crate::database::entities::events::Model,
        crate::database::entities::sponsors::Model,
    ))
)]
struct ApiDoc;

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState { db };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/sponsors",
            get(sponsors::list_sponsors)
                .post(sponsors::create_sponsor)
                .patch(sponsors::update_sponsor_status),
        )
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
