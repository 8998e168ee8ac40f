//! Contact form messages

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::models::ContactMessage;
use shared::validation::validate_phone;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct ContactService {
    db: PgPool,
}

/// Input for submitting a contact message
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactInput {
    #[validate(length(min = 1, max = 200))]
    pub nom: String,
    #[validate(email)]
    pub email: String,
    pub telephone: Option<String>,
    #[validate(length(max = 200))]
    pub entreprise: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: Uuid,
    nom: String,
    email: String,
    telephone: Option<String>,
    entreprise: Option<String>,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for ContactMessage {
    fn from(row: ContactRow) -> Self {
        ContactMessage {
            id: row.id,
            nom: row.nom,
            email: row.email,
            telephone: row.telephone,
            entreprise: row.entreprise,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

impl ContactService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Store a contact message
    pub async fn submit(&self, input: CreateContactInput) -> AppResult<ContactMessage> {
        input.validate()?;

        let telephone = input
            .telephone
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        if let Some(phone) = telephone {
            validate_phone(phone).map_err(|msg| {
                AppError::validation("telephone", msg, "Numéro de téléphone invalide")
            })?;
        }

        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contact_messages (nom, email, telephone, entreprise, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nom, email, telephone, entreprise, message, created_at
            "#,
        )
        .bind(input.nom.trim())
        .bind(input.email.trim())
        .bind(telephone)
        .bind(&input.entreprise)
        .bind(&input.message)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(contact_id = %row.id, "Contact message received");

        Ok(row.into())
    }

    /// List contact messages, most recent first
    pub async fn list(&self) -> AppResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, nom, email, telephone, entreprise, message, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }
}
