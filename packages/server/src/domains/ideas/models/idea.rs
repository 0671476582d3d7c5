use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::IdeaId;

/// A captured idea. Title is required; everything else is optional.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Create a new idea.
    pub async fn create(title: &str, summary: Option<&str>, pool: &PgPool) -> Result<Self> {
        let idea = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO idea (id, title, summary)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(IdeaId::new())
        .bind(title)
        .bind(summary)
        .fetch_one(pool)
        .await?;
        Ok(idea)
    }

    /// Most recently created idea with this exact title, if any.
    ///
    /// Titles are not unique; most-recent wins on duplicates.
    pub async fn find_latest_by_title(title: &str, pool: &PgPool) -> Result<Option<Self>> {
        let idea = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM idea
            WHERE title = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(pool)
        .await?;
        Ok(idea)
    }

    /// Resolve an idea by exact title, creating a title-only row if absent.
    ///
    /// Two concurrent calls for the same new title can each create a row;
    /// the store does not enforce title uniqueness.
    pub async fn find_or_create_by_title(title: &str, pool: &PgPool) -> Result<Self> {
        match Self::find_latest_by_title(title, pool).await? {
            Some(idea) => Ok(idea),
            None => Self::create(title, None, pool).await,
        }
    }

    /// Most recent ideas, newest first.
    pub async fn list_recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let ideas = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM idea
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(ideas)
    }
}
