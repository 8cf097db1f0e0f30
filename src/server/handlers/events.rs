use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::database::entities::events::{self, Entity as Events, EVENT_STATUSES};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct ListEventsQuery {
    pub status: Option<String>,
    pub limit: Option<u64>,
    pub page: Option<u64>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// RFC 3339 timestamp.
    pub date: Option<String>,
    pub location: Option<String>,
    pub producer: Option<String>,
    pub max_participants: Option<i32>,
    pub status: Option<String>,
    pub banner: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/events",
    params(
        ("status" = Option<String>, Query, description = "Filter by event status"),
        ("limit" = Option<u64>, Query, description = "Page size, default 10"),
        ("page" = Option<u64>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Paginated event list, newest date first", body = [events::Model])
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<Value>, ApiError> {
    let limit = query.limit.unwrap_or(10).max(1);
    let page = query.page.unwrap_or(1).max(1);

    let mut find = Events::find();
    if let Some(status) = &query.status {
        find = find.filter(events::Column::Status.eq(status.clone()));
    }

    let paginator = find
        .order_by_desc(events::Column::Date)
        .paginate(&state.db, limit);
    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(page - 1).await?;

    Ok(Json(json!({
        "success": true,
        "data": data,
        "pagination": {
            "total": total,
            "page": page,
            "limit": limit,
            "pages": total.div_ceil(limit),
        },
    })))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = events::Model),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(title), Some(description), Some(date), Some(location)) = (
        payload.title,
        payload.description,
        payload.date,
        payload.location,
    ) else {
        return Err(ApiError::Validation(
            "missing required fields: title, description, date, location".to_string(),
        ));
    };

    let date = DateTime::parse_from_rfc3339(&date)
        .map_err(|_| ApiError::Validation(format!("invalid date: {}", date)))?
        .with_timezone(&Utc);

    let status = payload.status.unwrap_or_else(|| "draft".to_string());
    if !EVENT_STATUSES.contains(&status.as_str()) {
        return Err(ApiError::Validation(format!(
            "invalid status: {} (expected one of {})",
            status,
            EVENT_STATUSES.join(", ")
        )));
    }

    let now = Utc::now();
    let event = events::ActiveModel {
        title: Set(title),
        description: Set(description),
        date: Set(date),
        location: Set(location),
        producer: Set(payload.producer),
        max_participants: Set(payload.max_participants),
        current_participants: Set(0),
        status: Set(status),
        banner: Set(payload.banner),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let event = event.insert(&state.db).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": event,
        })),
    ))
}
