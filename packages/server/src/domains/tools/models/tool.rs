use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ToolId;

/// A captured tool or resource link. Name is required.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    pub url: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new tool
#[derive(Debug, Clone, Default)]
pub struct CreateTool {
    pub name: String,
    pub url: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Tool {
    /// Create a new tool.
    pub async fn create(input: CreateTool, pool: &PgPool) -> Result<Self> {
        let tool = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO tool (id, name, url, category, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(ToolId::new())
        .bind(&input.name)
        .bind(&input.url)
        .bind(&input.category)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;
        Ok(tool)
    }

    /// Most recent tools, newest first.
    pub async fn list_recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let tools = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM tool
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(tools)
    }
}
