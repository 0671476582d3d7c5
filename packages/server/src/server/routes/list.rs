use axum::extract::{Extension, Query};
use axum::Json;
use serde::Deserialize;

use crate::domains::ideas::Idea;
use crate::domains::people::Person;
use crate::domains::tools::Tool;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Listing is capped regardless of table size.
pub const LIST_LIMIT: i64 = 200;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /api/list?type=idea|person|tool
///
/// Returns up to [`LIST_LIMIT`] rows of the requested type, newest first.
/// Anything outside the allow-list is a 400.
pub async fn list_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let pool = &state.db_pool;

    let rows = match params.kind.as_deref() {
        Some("idea") => serde_json::to_value(Idea::list_recent(LIST_LIMIT, pool).await?),
        Some("person") => serde_json::to_value(Person::list_recent(LIST_LIMIT, pool).await?),
        Some("tool") => serde_json::to_value(Tool::list_recent(LIST_LIMIT, pool).await?),
        _ => return Err(ApiError::validation("type must be idea, person, or tool")),
    }
    .map_err(anyhow::Error::from)?;

    Ok(Json(rows))
}
