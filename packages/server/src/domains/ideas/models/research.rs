//! Research records attached to an idea: notes, sources, facts.
//!
//! All three are append-only children referencing an idea row.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{IdeaFactId, IdeaId, IdeaNoteId, IdeaSourceId};

/// Free-text research note on an idea.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct IdeaNote {
    pub id: IdeaNoteId,
    pub idea_id: IdeaId,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// Reference attached to an idea; at least one of url/title is present.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct IdeaSource {
    pub id: IdeaSourceId,
    pub idea_id: IdeaId,
    pub source_url: Option<String>,
    pub source_title: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fact statement about an idea, optionally with a confidence score.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct IdeaFact {
    pub id: IdeaFactId,
    pub idea_id: IdeaId,
    pub fact: String,
    pub confidence: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl IdeaNote {
    pub async fn create(idea_id: IdeaId, note: &str, pool: &PgPool) -> Result<Self> {
        let row = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO idea_note (id, idea_id, note)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(IdeaNoteId::new())
        .bind(idea_id)
        .bind(note)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// All notes for an idea, newest first.
    pub async fn list_for_idea(idea_id: IdeaId, pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM idea_note
            WHERE idea_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(idea_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

impl IdeaSource {
    pub async fn create(
        idea_id: IdeaId,
        source_url: Option<&str>,
        source_title: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        let row = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO idea_source (id, idea_id, source_url, source_title)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(IdeaSourceId::new())
        .bind(idea_id)
        .bind(source_url)
        .bind(source_title)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// All sources for an idea, newest first.
    pub async fn list_for_idea(idea_id: IdeaId, pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM idea_source
            WHERE idea_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(idea_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

impl IdeaFact {
    pub async fn create(
        idea_id: IdeaId,
        fact: &str,
        confidence: Option<f64>,
        pool: &PgPool,
    ) -> Result<Self> {
        let row = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO idea_fact (id, idea_id, fact, confidence)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(IdeaFactId::new())
        .bind(idea_id)
        .bind(fact)
        .bind(confidence)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// All facts for an idea, newest first.
    pub async fn list_for_idea(idea_id: IdeaId, pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM idea_fact
            WHERE idea_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(idea_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
