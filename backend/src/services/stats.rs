//! Dashboard counters

use rust_decimal::Decimal;
use shared::types::{DashboardStats, EntityStats};
use sqlx::PgPool;

use crate::error::AppResult;

/// Dashboard statistics service
#[derive(Clone)]
pub struct StatsService {
    db: PgPool,
}

impl StatsService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Count and sum every ledger table
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let acquisitions: (i64, Decimal) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(total_frais), 0) FROM acquisitions",
        )
        .fetch_one(&self.db)
        .await?;

        let sorties: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sorties")
            .fetch_one(&self.db)
            .await?;

        let stocks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stocks")
            .fetch_one(&self.db)
            .await?;

        let ventes: (i64, Decimal) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(montant_recu), 0) FROM sales",
        )
        .fetch_one(&self.db)
        .await?;

        let fonds: (i64, Decimal) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(somme_percue), 0) FROM fonds",
        )
        .fetch_one(&self.db)
        .await?;

        Ok(DashboardStats {
            acquisitions: EntityStats {
                count: acquisitions.0,
                amount: Some(acquisitions.1),
            },
            sorties: EntityStats {
                count: sorties,
                amount: None,
            },
            stocks: EntityStats {
                count: stocks,
                amount: None,
            },
            ventes: EntityStats {
                count: ventes.0,
                amount: Some(ventes.1),
            },
            fonds: EntityStats {
                count: fonds.0,
                amount: Some(fonds.1),
            },
        })
    }
}
