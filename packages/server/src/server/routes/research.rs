//! Research-add and research-read endpoints.
//!
//! Research records attach to an idea resolved by exact title, creating the
//! idea just-in-time when it doesn't exist yet.

use axum::extract::{Extension, Path};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::IdeaId;
use crate::domains::ideas::{Idea, IdeaFact, IdeaNote, IdeaSource};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ResearchAddRequest {
    pub rtype: String,
    pub idea_title: Option<String>,
    pub note: Option<String>,
    pub source_url: Option<String>,
    pub source_title: Option<String>,
    pub fact: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(Serialize)]
pub struct ResearchAddResponse {
    pub ok: bool,
    pub rtype: String,
}

/// A validated research child record, ready to insert.
#[derive(Debug)]
pub enum ResearchInsert {
    Note {
        note: String,
    },
    Ref {
        source_url: Option<String>,
        source_title: Option<String>,
    },
    Fact {
        fact: String,
        confidence: Option<f64>,
    },
}

/// Validate the rtype discriminator, the idea title, and the per-type
/// required field. Returns the cleaned title and the insert.
pub fn validate_research(req: &ResearchAddRequest) -> Result<(String, ResearchInsert), ApiError> {
    let idea_title = req
        .idea_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("idea_title required"))?
        .to_string();

    let insert = match req.rtype.as_str() {
        "note" => {
            let note = clean(&req.note).ok_or_else(|| ApiError::validation("note required"))?;
            ResearchInsert::Note { note }
        }
        "ref" => {
            let source_url = clean(&req.source_url);
            let source_title = clean(&req.source_title);
            if source_url.is_none() && source_title.is_none() {
                return Err(ApiError::validation("source_url or source_title required"));
            }
            ResearchInsert::Ref {
                source_url,
                source_title,
            }
        }
        "fact" => {
            let fact = clean(&req.fact).ok_or_else(|| ApiError::validation("fact required"))?;
            ResearchInsert::Fact {
                fact,
                confidence: req.confidence,
            }
        }
        _ => return Err(ApiError::validation("rtype must be note, ref, or fact")),
    };

    Ok((idea_title, insert))
}

/// POST /api/research-add
pub async fn research_add_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<ResearchAddRequest>,
) -> Result<Json<ResearchAddResponse>, ApiError> {
    let (idea_title, insert) = validate_research(&req)?;
    let pool = &state.db_pool;

    let idea = Idea::find_or_create_by_title(&idea_title, pool).await?;

    match insert {
        ResearchInsert::Note { note } => {
            IdeaNote::create(idea.id, &note, pool).await?;
        }
        ResearchInsert::Ref {
            source_url,
            source_title,
        } => {
            IdeaSource::create(idea.id, source_url.as_deref(), source_title.as_deref(), pool)
                .await?;
        }
        ResearchInsert::Fact { fact, confidence } => {
            IdeaFact::create(idea.id, &fact, confidence, pool).await?;
        }
    }

    Ok(Json(ResearchAddResponse {
        ok: true,
        rtype: req.rtype,
    }))
}

#[derive(Serialize)]
pub struct IdeaResearchResponse {
    pub notes: Vec<IdeaNote>,
    pub refs: Vec<IdeaSource>,
    pub facts: Vec<IdeaFact>,
}

/// GET /api/idea/:id/research
pub async fn idea_research_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<IdeaResearchResponse>, ApiError> {
    let pool = &state.db_pool;
    let idea_id = IdeaId::from_uuid(id);

    let notes = IdeaNote::list_for_idea(idea_id, pool).await?;
    let refs = IdeaSource::list_for_idea(idea_id, pool).await?;
    let facts = IdeaFact::list_for_idea(idea_id, pool).await?;

    Ok(Json(IdeaResearchResponse { notes, refs, facts }))
}

fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
