//! Sales service: recording sales and fetching them for reports

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::Sale;
use shared::reporting::Interval;
use shared::types::PaymentMode;
use shared::validation::{parse_iso_date, validate_non_negative_amount, validate_positive_amount};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Sales service
#[derive(Clone)]
pub struct SaleService {
    db: PgPool,
}

/// Input for recording a sale
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleInput {
    #[validate(length(min = 1, max = 100))]
    pub responsable: String,
    #[validate(length(max = 100))]
    pub livreur: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub produit: String,
    #[validate(range(min = 1))]
    pub quantite: i32,
    pub montant_net: Decimal,
    pub montant_recu: Decimal,
    pub mode_paiement: PaymentMode,
    pub frais: Option<Decimal>,
    #[serde(default)]
    pub poids: Decimal,
    /// YYYY-MM-DD
    pub date_vente: String,
}

/// Row of the `sales` table
#[derive(Debug, FromRow)]
struct SaleRow {
    id: Uuid,
    responsable: String,
    livreur: Option<String>,
    produit: String,
    quantite: i32,
    montant_net: Decimal,
    montant_recu: Decimal,
    mode_paiement: i32,
    frais: Option<Decimal>,
    poids: Decimal,
    sale_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SaleRow> for Sale {
    type Error = AppError;

    fn try_from(row: SaleRow) -> Result<Self, Self::Error> {
        let mode_paiement = PaymentMode::try_from(row.mode_paiement)
            .map_err(|e| AppError::Internal(format!("sale {}: {}", row.id, e)))?;

        Ok(Sale {
            id: row.id,
            responsable: row.responsable,
            livreur: row.livreur,
            produit: row.produit,
            quantite: row.quantite,
            montant_net: row.montant_net,
            montant_recu: row.montant_recu,
            mode_paiement,
            frais: row.frais,
            poids: row.poids,
            date_vente: row.sale_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SALE_COLUMNS: &str = "id, responsable, livreur, produit, quantite, montant_net, montant_recu, \
     mode_paiement, frais, poids, sale_date, created_at, updated_at";

impl SaleService {
    /// Create a new SaleService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a sale
    pub async fn create(&self, input: CreateSaleInput) -> AppResult<Sale> {
        input.validate()?;

        validate_positive_amount(input.montant_net).map_err(|msg| {
            AppError::validation("montantNet", msg, "Le montant net doit être positif")
        })?;
        validate_non_negative_amount(input.montant_recu).map_err(|msg| {
            AppError::validation("montantRecu", msg, "Le montant reçu ne peut pas être négatif")
        })?;
        if let Some(frais) = input.frais {
            validate_non_negative_amount(frais).map_err(|msg| {
                AppError::validation("frais", msg, "Les frais ne peuvent pas être négatifs")
            })?;
        }
        validate_non_negative_amount(input.poids).map_err(|msg| {
            AppError::validation("poids", msg, "Le poids ne peut pas être négatif")
        })?;
        let sale_date = parse_iso_date(&input.date_vente).map_err(|msg| {
            AppError::validation("dateVente", msg, "La date doit être au format AAAA-MM-JJ")
        })?;

        let row = sqlx::query_as::<_, SaleRow>(&format!(
            r#"
            INSERT INTO sales (
                responsable, livreur, produit, quantite, montant_net, montant_recu,
                mode_paiement, frais, poids, sale_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            SALE_COLUMNS
        ))
        .bind(input.responsable.trim())
        .bind(input.livreur.as_deref().map(str::trim))
        .bind(input.produit.trim())
        .bind(input.quantite)
        .bind(input.montant_net)
        .bind(input.montant_recu)
        .bind(input.mode_paiement.code())
        .bind(input.frais)
        .bind(input.poids)
        .bind(sale_date)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(sale_id = %row.id, produit = %row.produit, "Sale recorded");

        Sale::try_from(row)
    }

    /// List all sales, most recent first
    pub async fn list(&self) -> AppResult<Vec<Sale>> {
        let rows = sqlx::query_as::<_, SaleRow>(&format!(
            "SELECT {} FROM sales ORDER BY sale_date DESC, created_at DESC",
            SALE_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(Sale::try_from).collect()
    }

    /// Get a single sale
    pub async fn get(&self, sale_id: Uuid) -> AppResult<Sale> {
        let row = sqlx::query_as::<_, SaleRow>(&format!(
            "SELECT {} FROM sales WHERE id = $1",
            SALE_COLUMNS
        ))
        .bind(sale_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;

        Sale::try_from(row)
    }

    /// Delete a sale
    pub async fn delete(&self, sale_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM sales WHERE id = $1")
            .bind(sale_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Sale".to_string()));
        }

        Ok(())
    }

    /// Sales dated inside `interval`, oldest first
    pub async fn list_in(&self, interval: &Interval) -> AppResult<Vec<Sale>> {
        let rows = sqlx::query_as::<_, SaleRow>(&format!(
            "SELECT {} FROM sales WHERE sale_date >= $1 AND sale_date < $2 ORDER BY sale_date, created_at",
            SALE_COLUMNS
        ))
        .bind(interval.start)
        .bind(interval.end_exclusive())
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(Sale::try_from).collect()
    }
}
