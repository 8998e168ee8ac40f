//! Stock exit service

use chrono::NaiveDate;
use serde::Deserialize;
use shared::models::Sortie;
use shared::reporting::Interval;
use shared::validation::{parse_iso_date, validate_not_blank};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Stock exit service
#[derive(Clone)]
pub struct SortieService {
    db: PgPool,
}

/// Input for recording a stock exit
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSortieInput {
    #[validate(length(min = 1, max = 200))]
    pub article: String,
    #[validate(range(min = 1))]
    pub quantite: i32,
    #[validate(length(min = 1, max = 200))]
    pub motif: String,
    #[validate(length(min = 1, max = 100))]
    pub responsable: String,
    /// YYYY-MM-DD
    pub date: String,
}

#[derive(Debug, FromRow)]
struct SortieRow {
    id: Uuid,
    article: String,
    quantite: i32,
    motif: String,
    responsable: String,
    date_sortie: NaiveDate,
}

impl From<SortieRow> for Sortie {
    fn from(row: SortieRow) -> Self {
        Sortie {
            id: row.id,
            article: row.article,
            quantite: row.quantite,
            motif: row.motif,
            responsable: row.responsable,
            date_sortie: row.date_sortie,
        }
    }
}

impl SortieService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a stock exit
    pub async fn create(&self, input: CreateSortieInput) -> AppResult<Sortie> {
        input.validate()?;

        validate_not_blank(&input.article).map_err(|msg| {
            AppError::validation("article", msg, "L'article est obligatoire")
        })?;
        let date_sortie = parse_iso_date(&input.date).map_err(|msg| {
            AppError::validation("date", msg, "La date doit être au format AAAA-MM-JJ")
        })?;

        let row = sqlx::query_as::<_, SortieRow>(
            r#"
            INSERT INTO sorties (article, quantite, motif, responsable, date_sortie)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, article, quantite, motif, responsable, date_sortie
            "#,
        )
        .bind(input.article.trim())
        .bind(input.quantite)
        .bind(input.motif.trim())
        .bind(input.responsable.trim())
        .bind(date_sortie)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(sortie_id = %row.id, article = %row.article, quantite = row.quantite, "Stock exit recorded");

        Ok(row.into())
    }

    /// List all stock exits, most recent first
    pub async fn list(&self) -> AppResult<Vec<Sortie>> {
        let rows = sqlx::query_as::<_, SortieRow>(
            r#"
            SELECT id, article, quantite, motif, responsable, date_sortie
            FROM sorties
            ORDER BY date_sortie DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Sortie::from).collect())
    }

    /// Get a single stock exit
    pub async fn get(&self, sortie_id: Uuid) -> AppResult<Sortie> {
        let row = sqlx::query_as::<_, SortieRow>(
            "SELECT id, article, quantite, motif, responsable, date_sortie FROM sorties WHERE id = $1",
        )
        .bind(sortie_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Sortie".to_string()))?;

        Ok(row.into())
    }

    /// Delete a stock exit
    pub async fn delete(&self, sortie_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM sorties WHERE id = $1")
            .bind(sortie_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Sortie".to_string()));
        }

        Ok(())
    }

    /// Stock exits dated inside `interval`, oldest first
    pub async fn list_in(&self, interval: &Interval) -> AppResult<Vec<Sortie>> {
        let rows = sqlx::query_as::<_, SortieRow>(
            r#"
            SELECT id, article, quantite, motif, responsable, date_sortie
            FROM sorties
            WHERE date_sortie >= $1 AND date_sortie < $2
            ORDER BY date_sortie, created_at
            "#,
        )
        .bind(interval.start)
        .bind(interval.end_exclusive())
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Sortie::from).collect())
    }
}
