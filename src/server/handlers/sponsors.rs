use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::database::entities::events::Entity as Events;
use crate::database::entities::sponsors::{self, Entity as Sponsors, SPONSOR_STATUSES};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSponsorsQuery {
    pub event_id: Option<i32>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSponsorRequest {
    pub event: Option<i32>,
    pub company: Option<String>,
    pub participant: Option<String>,
    pub logo: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSponsorStatusRequest {
    pub sponsor_id: Option<i32>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/sponsors",
    params(
        ("eventId" = Option<i32>, Query, description = "Filter by event"),
        ("status" = Option<String>, Query, description = "Filter by sponsor status")
    ),
    responses(
        (status = 200, description = "Sponsors in display order", body = [sponsors::Model])
    )
)]
pub async fn list_sponsors(
    State(state): State<AppState>,
    Query(query): Query<ListSponsorsQuery>,
) -> Result<Json<Value>, ApiError> {
    let mut find = Sponsors::find();
    if let Some(event_id) = query.event_id {
        find = find.filter(sponsors::Column::EventId.eq(event_id));
    }
    if let Some(status) = &query.status {
        find = find.filter(sponsors::Column::Status.eq(status.clone()));
    }

    let data = find
        .order_by_asc(sponsors::Column::DisplayOrder)
        .order_by_desc(sponsors::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": data,
    })))
}

#[utoipa::path(
    post,
    path = "/api/sponsors",
    request_body = CreateSponsorRequest,
    responses(
        (status = 201, description = "Sponsor created", body = sponsors::Model),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_sponsor(
    State(state): State<AppState>,
    Json(payload): Json<CreateSponsorRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(event_id), Some(company), Some(participant)) =
        (payload.event, payload.company, payload.participant)
    else {
        return Err(ApiError::Validation(
            "missing required fields: event, company, participant".to_string(),
        ));
    };

    Events::find_by_id(event_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::Validation(format!("unknown event: {}", event_id)))?;

    let now = Utc::now();
    let sponsor = sponsors::ActiveModel {
        event_id: Set(event_id),
        company: Set(company),
        logo: Set(payload.logo),
        participant: Set(participant),
        display_order: Set(payload.display_order.unwrap_or(0)),
        status: Set("pending".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let sponsor = sponsor.insert(&state.db).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": sponsor,
        })),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/sponsors",
    request_body = UpdateSponsorStatusRequest,
    responses(
        (status = 200, description = "Sponsor status updated", body = sponsors::Model),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Sponsor not found")
    )
)]
pub async fn update_sponsor_status(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSponsorStatusRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(sponsor_id), Some(status)) = (payload.sponsor_id, payload.status) else {
        return Err(ApiError::Validation(
            "missing required fields: sponsorId, status".to_string(),
        ));
    };

    if !SPONSOR_STATUSES.contains(&status.as_str()) {
        return Err(ApiError::Validation(format!(
            "invalid status: {} (expected one of {})",
            status,
            SPONSOR_STATUSES.join(", ")
        )));
    }

    let sponsor = Sponsors::find_by_id(sponsor_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("sponsor not found: {}", sponsor_id)))?;

    let mut sponsor: sponsors::ActiveModel = sponsor.into();
    // A sponsor reaching the venue screen records when it first went up.
    if status == "displayed" {
        sponsor.displayed_at = Set(Some(Utc::now()));
    }
    sponsor.status = Set(status);
    sponsor.updated_at = Set(Utc::now());

    let sponsor = sponsor.update(&state.db).await?;

    Ok(Json(json!({
        "success": true,
        "data": sponsor,
    })))
}
