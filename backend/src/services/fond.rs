//! Funds service: money received from creditors

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::Fond;
use shared::reporting::Interval;
use shared::validation::{parse_iso_date, validate_positive_amount};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Funds service
#[derive(Clone)]
pub struct FondService {
    db: PgPool,
}

/// Input for recording received funds
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFondInput {
    #[validate(length(min = 1, max = 200))]
    pub nom_crediteur: String,
    pub somme_percue: Decimal,
    /// YYYY-MM-DD
    pub date_fonds: String,
}

#[derive(Debug, FromRow)]
struct FondRow {
    id: Uuid,
    nom_crediteur: String,
    somme_percue: Decimal,
    date_fonds: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<FondRow> for Fond {
    fn from(row: FondRow) -> Self {
        Fond {
            id: row.id,
            nom_crediteur: row.nom_crediteur,
            somme_percue: row.somme_percue,
            date_fonds: row.date_fonds,
            created_at: row.created_at,
        }
    }
}

impl FondService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record received funds
    pub async fn create(&self, input: CreateFondInput) -> AppResult<Fond> {
        input.validate()?;

        validate_positive_amount(input.somme_percue).map_err(|msg| {
            AppError::validation("sommePercue", msg, "La somme perçue doit être positive")
        })?;
        let date_fonds = parse_iso_date(&input.date_fonds).map_err(|msg| {
            AppError::validation("dateFonds", msg, "La date doit être au format AAAA-MM-JJ")
        })?;

        let row = sqlx::query_as::<_, FondRow>(
            r#"
            INSERT INTO fonds (nom_crediteur, somme_percue, date_fonds)
            VALUES ($1, $2, $3)
            RETURNING id, nom_crediteur, somme_percue, date_fonds, created_at
            "#,
        )
        .bind(input.nom_crediteur.trim())
        .bind(input.somme_percue)
        .bind(date_fonds)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(fond_id = %row.id, somme = %row.somme_percue, "Funds recorded");

        Ok(row.into())
    }

    /// List all funds, most recent first
    pub async fn list(&self) -> AppResult<Vec<Fond>> {
        let rows = sqlx::query_as::<_, FondRow>(
            r#"
            SELECT id, nom_crediteur, somme_percue, date_fonds, created_at
            FROM fonds
            ORDER BY date_fonds DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Fond::from).collect())
    }

    /// Get a single funds entry
    pub async fn get(&self, fond_id: Uuid) -> AppResult<Fond> {
        let row = sqlx::query_as::<_, FondRow>(
            "SELECT id, nom_crediteur, somme_percue, date_fonds, created_at FROM fonds WHERE id = $1",
        )
        .bind(fond_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Fond".to_string()))?;

        Ok(row.into())
    }

    /// Delete a funds entry
    pub async fn delete(&self, fond_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM fonds WHERE id = $1")
            .bind(fond_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Fond".to_string()));
        }

        Ok(())
    }

    /// Funds dated inside `interval`, oldest first
    pub async fn list_in(&self, interval: &Interval) -> AppResult<Vec<Fond>> {
        let rows = sqlx::query_as::<_, FondRow>(
            r#"
            SELECT id, nom_crediteur, somme_percue, date_fonds, created_at
            FROM fonds
            WHERE date_fonds >= $1 AND date_fonds < $2
            ORDER BY date_fonds, created_at
            "#,
        )
        .bind(interval.start)
        .bind(interval.end_exclusive())
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Fond::from).collect())
    }
}
