use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::PersonId;

/// A captured contact. Name is required; everything else is optional.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new person
#[derive(Debug, Clone, Default)]
pub struct CreatePerson {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
}

impl Person {
    /// Create a new person.
    pub async fn create(input: CreatePerson, pool: &PgPool) -> Result<Self> {
        let person = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO person (id, name, phone, email, company, role, school, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(PersonId::new())
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.company)
        .bind(&input.role)
        .bind(&input.school)
        .bind(&input.location)
        .fetch_one(pool)
        .await?;
        Ok(person)
    }

    /// Most recent people, newest first.
    pub async fn list_recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let people = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM person
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(people)
    }
}
