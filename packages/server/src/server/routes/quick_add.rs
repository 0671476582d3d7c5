use axum::extract::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domains::ideas::Idea;
use crate::domains::people::{CreatePerson, Person};
use crate::domains::tools::{CreateTool, Tool};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Quick-add request: a type discriminator plus a flat payload.
#[derive(Debug, Deserialize)]
pub struct QuickAddRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: QuickAddPayload,
}

/// Union of the fields any quick-add type may carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuickAddPayload {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct QuickAddResponse {
    pub ok: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A validated quick-add, ready to insert.
#[derive(Debug)]
pub enum QuickAddInsert {
    Idea {
        title: String,
        summary: Option<String>,
    },
    Person(CreatePerson),
    Tool(CreateTool),
}

/// Validate the discriminator and the type-specific required field.
///
/// Required fields are enforced here at the handler boundary, never at the
/// store layer.
pub fn validate_quick_add(req: &QuickAddRequest) -> Result<QuickAddInsert, ApiError> {
    let payload = &req.payload;

    match req.kind.as_str() {
        "idea" => {
            let title = clean(&payload.title).ok_or_else(|| ApiError::validation("title required"))?;
            Ok(QuickAddInsert::Idea {
                title,
                summary: clean(&payload.summary),
            })
        }
        "person" => {
            let name = clean(&payload.name).ok_or_else(|| ApiError::validation("name required"))?;
            Ok(QuickAddInsert::Person(CreatePerson {
                name,
                phone: clean(&payload.phone),
                email: clean(&payload.email),
                company: clean(&payload.company),
                role: clean(&payload.role),
                school: clean(&payload.school),
                location: clean(&payload.location),
            }))
        }
        "tool" => {
            let name = clean(&payload.name).ok_or_else(|| ApiError::validation("name required"))?;
            Ok(QuickAddInsert::Tool(CreateTool {
                name,
                url: clean(&payload.url),
                category: clean(&payload.category),
                description: clean(&payload.description),
            }))
        }
        _ => Err(ApiError::validation("type must be idea, person, or tool")),
    }
}

/// POST /api/quick-add
pub async fn quick_add_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<QuickAddRequest>,
) -> Result<Json<QuickAddResponse>, ApiError> {
    let insert = validate_quick_add(&req)?;
    let pool = &state.db_pool;

    match insert {
        QuickAddInsert::Idea { title, summary } => {
            Idea::create(&title, summary.as_deref(), pool).await?;
        }
        QuickAddInsert::Person(input) => {
            Person::create(input, pool).await?;
        }
        QuickAddInsert::Tool(input) => {
            Tool::create(input, pool).await?;
        }
    }

    Ok(Json(QuickAddResponse {
        ok: true,
        kind: req.kind,
    }))
}

fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
