//! Acquisition service: goods entering the stock

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{Acquisition, AcquisitionCosts};
use shared::reporting::Interval;
use shared::validation::{parse_iso_date, validate_non_negative_amount, validate_positive_amount};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Acquisition service
#[derive(Clone)]
pub struct AcquisitionService {
    db: PgPool,
}

/// Input for recording an acquisition; costs are derived server-side
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcquisitionInput {
    #[validate(length(min = 1, max = 100))]
    pub responsable_acquisition: String,
    #[validate(length(min = 1, max = 200))]
    pub nature_acquisition: String,
    pub quantite_acquise: Decimal,
    pub prix_unitaire: Decimal,
    #[serde(default)]
    pub frais_connexes: Decimal,
    #[validate(length(min = 1, max = 100))]
    pub type_acquisition: String,
    /// YYYY-MM-DD
    pub date_acquisition: String,
    pub details: Option<String>,
    pub commentaires: Option<String>,
}

#[derive(Debug, FromRow)]
struct AcquisitionRow {
    id: Uuid,
    responsable_acquisition: String,
    nature_acquisition: String,
    quantite_acquise: Decimal,
    prix_unitaire: Decimal,
    frais_acquisition: Decimal,
    frais_connexes: Decimal,
    total_frais: Decimal,
    type_acquisition: String,
    date_acquisition: NaiveDate,
    details: Option<String>,
    commentaires: Option<String>,
    updated_at: DateTime<Utc>,
}

impl From<AcquisitionRow> for Acquisition {
    fn from(row: AcquisitionRow) -> Self {
        Acquisition {
            id: row.id,
            responsable_acquisition: row.responsable_acquisition,
            nature_acquisition: row.nature_acquisition,
            quantite_acquise: row.quantite_acquise,
            prix_unitaire: row.prix_unitaire,
            frais_acquisition: row.frais_acquisition,
            frais_connexes: row.frais_connexes,
            total_frais: row.total_frais,
            type_acquisition: row.type_acquisition,
            date_acquisition: row.date_acquisition,
            details: row.details,
            commentaires: row.commentaires,
            updated_at: row.updated_at,
        }
    }
}

const ACQUISITION_COLUMNS: &str = "id, responsable_acquisition, nature_acquisition, quantite_acquise, \
     prix_unitaire, frais_acquisition, frais_connexes, total_frais, type_acquisition, \
     date_acquisition, details, commentaires, updated_at";

impl AcquisitionService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record an acquisition
    pub async fn create(&self, input: CreateAcquisitionInput) -> AppResult<Acquisition> {
        input.validate()?;

        validate_positive_amount(input.quantite_acquise).map_err(|msg| {
            AppError::validation("quantiteAcquise", msg, "La quantité acquise doit être positive")
        })?;
        validate_non_negative_amount(input.prix_unitaire).map_err(|msg| {
            AppError::validation("prixUnitaire", msg, "Le prix unitaire ne peut pas être négatif")
        })?;
        validate_non_negative_amount(input.frais_connexes).map_err(|msg| {
            AppError::validation("fraisConnexes", msg, "Les frais connexes ne peuvent pas être négatifs")
        })?;
        let date_acquisition = parse_iso_date(&input.date_acquisition).map_err(|msg| {
            AppError::validation("dateAcquisition", msg, "La date doit être au format AAAA-MM-JJ")
        })?;

        let costs = AcquisitionCosts::compute(
            input.quantite_acquise,
            input.prix_unitaire,
            input.frais_connexes,
        )
        .map_err(|msg| {
            AppError::validation("quantiteAcquise", msg, "Le coût d'acquisition est trop élevé")
        })?;

        let row = sqlx::query_as::<_, AcquisitionRow>(&format!(
            r#"
            INSERT INTO acquisitions (
                responsable_acquisition, nature_acquisition, quantite_acquise, prix_unitaire,
                frais_acquisition, frais_connexes, total_frais, type_acquisition,
                date_acquisition, details, commentaires
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            ACQUISITION_COLUMNS
        ))
        .bind(input.responsable_acquisition.trim())
        .bind(input.nature_acquisition.trim())
        .bind(input.quantite_acquise)
        .bind(input.prix_unitaire)
        .bind(costs.frais_acquisition)
        .bind(input.frais_connexes)
        .bind(costs.total_frais)
        .bind(input.type_acquisition.trim())
        .bind(date_acquisition)
        .bind(&input.details)
        .bind(&input.commentaires)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            acquisition_id = %row.id,
            article = %row.nature_acquisition,
            total_frais = %row.total_frais,
            "Acquisition recorded"
        );

        Ok(row.into())
    }

    /// List all acquisitions, most recent first
    pub async fn list(&self) -> AppResult<Vec<Acquisition>> {
        let rows = sqlx::query_as::<_, AcquisitionRow>(&format!(
            "SELECT {} FROM acquisitions ORDER BY date_acquisition DESC, updated_at DESC",
            ACQUISITION_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Acquisition::from).collect())
    }

    /// Get a single acquisition
    pub async fn get(&self, acquisition_id: Uuid) -> AppResult<Acquisition> {
        let row = sqlx::query_as::<_, AcquisitionRow>(&format!(
            "SELECT {} FROM acquisitions WHERE id = $1",
            ACQUISITION_COLUMNS
        ))
        .bind(acquisition_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Acquisition".to_string()))?;

        Ok(row.into())
    }

    /// Delete an acquisition
    pub async fn delete(&self, acquisition_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM acquisitions WHERE id = $1")
            .bind(acquisition_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Acquisition".to_string()));
        }

        Ok(())
    }

    /// Acquisitions dated inside `interval`, in acquisition order
    pub async fn list_in(&self, interval: &Interval) -> AppResult<Vec<Acquisition>> {
        let rows = sqlx::query_as::<_, AcquisitionRow>(&format!(
            "SELECT {} FROM acquisitions \
             WHERE date_acquisition >= $1 AND date_acquisition < $2 \
             ORDER BY date_acquisition, updated_at",
            ACQUISITION_COLUMNS
        ))
        .bind(interval.start)
        .bind(interval.end_exclusive())
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Acquisition::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_state;

    fn input(quantite: &str, prix: &str) -> CreateAcquisitionInput {
        CreateAcquisitionInput {
            responsable_acquisition: "Kouassi".to_string(),
            nature_acquisition: "Riz".to_string(),
            quantite_acquise: quantite.parse().unwrap(),
            prix_unitaire: prix.parse().unwrap(),
            frais_connexes: Decimal::ZERO,
            type_acquisition: "Achat".to_string(),
            date_acquisition: "2024-05-02".to_string(),
            details: None,
            commentaires: None,
        }
    }

    #[tokio::test]
    async fn test_oversized_cost_is_a_validation_error() {
        let service = AcquisitionService::new(test_state().db);
        let err = service
            .create(input("1000000000000000", "1000000000000000"))
            .await
            .unwrap_err();

        match err {
            AppError::Validation { field, .. } => assert_eq!(field, "quantiteAcquise"),
            other => panic!("expected a validation error, got {:?}", other),
        }
    }
}
