//! Stock item service: tracked articles with alert thresholds

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{StockItem, StockStatus};
use shared::validation::{validate_non_negative_amount, validate_stock_thresholds};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Stock item service
#[derive(Clone)]
pub struct StockService {
    db: PgPool,
}

fn default_categorie() -> String {
    "Autre".to_string()
}

fn default_emplacement() -> String {
    "Principal".to_string()
}

fn default_seuil_min() -> i32 {
    10
}

fn default_seuil_max() -> i32 {
    100
}

/// Input for registering a stock item
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockInput {
    #[validate(length(min = 1, max = 200))]
    pub nom: String,
    #[validate(range(min = 0))]
    pub total_acquis: i32,
    #[validate(range(min = 0))]
    pub quantite: i32,
    #[serde(default)]
    pub prix: Decimal,
    #[serde(default = "default_categorie")]
    #[validate(length(min = 1, max = 100))]
    pub categorie: String,
    #[serde(default = "default_emplacement")]
    #[validate(length(min = 1, max = 100))]
    pub emplacement: String,
    #[serde(default = "default_seuil_min")]
    pub seuil_min: i32,
    #[serde(default = "default_seuil_max")]
    pub seuil_max: i32,
}

#[derive(Debug, FromRow)]
struct StockRow {
    id: Uuid,
    nom: String,
    total_acquis: i32,
    quantite: i32,
    prix: Decimal,
    categorie: String,
    emplacement: String,
    seuil_min: i32,
    seuil_max: i32,
}

impl From<StockRow> for StockItem {
    fn from(row: StockRow) -> Self {
        StockItem {
            status: StockStatus::classify(row.quantite, row.seuil_min),
            id: row.id,
            nom: row.nom,
            total_acquis: row.total_acquis,
            quantite: row.quantite,
            prix: row.prix,
            categorie: row.categorie,
            emplacement: row.emplacement,
            seuil_min: row.seuil_min,
            seuil_max: row.seuil_max,
        }
    }
}

const STOCK_COLUMNS: &str =
    "id, nom, total_acquis, quantite, prix, categorie, emplacement, seuil_min, seuil_max";

impl StockService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a stock item
    pub async fn create(&self, input: CreateStockInput) -> AppResult<StockItem> {
        input.validate()?;

        validate_non_negative_amount(input.prix).map_err(|msg| {
            AppError::validation("prix", msg, "Le prix ne peut pas être négatif")
        })?;
        validate_stock_thresholds(input.seuil_min, input.seuil_max).map_err(|msg| {
            AppError::validation("seuilMin", msg, "Les seuils de stock sont incohérents")
        })?;

        let row = sqlx::query_as::<_, StockRow>(&format!(
            r#"
            INSERT INTO stocks (nom, total_acquis, quantite, prix, categorie, emplacement, seuil_min, seuil_max)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            STOCK_COLUMNS
        ))
        .bind(input.nom.trim())
        .bind(input.total_acquis)
        .bind(input.quantite)
        .bind(input.prix)
        .bind(input.categorie.trim())
        .bind(input.emplacement.trim())
        .bind(input.seuil_min)
        .bind(input.seuil_max)
        .fetch_one(&self.db)
        .await?;

        let item = StockItem::from(row);
        tracing::info!(stock_id = %item.id, nom = %item.nom, status = %item.status, "Stock item registered");

        Ok(item)
    }

    /// List stock items with their computed status
    pub async fn list(&self) -> AppResult<Vec<StockItem>> {
        let rows = sqlx::query_as::<_, StockRow>(&format!(
            "SELECT {} FROM stocks ORDER BY nom",
            STOCK_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(StockItem::from).collect())
    }

    /// Get a single stock item
    pub async fn get(&self, stock_id: Uuid) -> AppResult<StockItem> {
        let row = sqlx::query_as::<_, StockRow>(&format!(
            "SELECT {} FROM stocks WHERE id = $1",
            STOCK_COLUMNS
        ))
        .bind(stock_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Stock".to_string()))?;

        Ok(row.into())
    }

    /// Delete a stock item
    pub async fn delete(&self, stock_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM stocks WHERE id = $1")
            .bind(stock_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Stock".to_string()));
        }

        Ok(())
    }
}
