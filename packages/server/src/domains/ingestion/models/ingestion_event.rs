use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use twilio::MediaItem;

use crate::common::IngestionEventId;

/// Append-only log row for one inbound webhook call.
///
/// Written before classification so the raw message survives even when
/// nothing downstream is created. Never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct IngestionEvent {
    pub id: IngestionEventId,
    pub from_number: String,
    pub body: String,
    pub media: Json<Vec<MediaItem>>,
    pub created_at: DateTime<Utc>,
}

impl IngestionEvent {
    /// Log an inbound message.
    pub async fn create(
        from_number: &str,
        body: &str,
        media: &[MediaItem],
        pool: &PgPool,
    ) -> Result<Self> {
        let event = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO ingestion_event (id, from_number, body, media)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(IngestionEventId::new())
        .bind(from_number)
        .bind(body)
        .bind(Json(media.to_vec()))
        .fetch_one(pool)
        .await?;
        Ok(event)
    }
}
