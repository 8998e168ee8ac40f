//! Stock items and their alert status

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stocked article with its alert thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: Uuid,
    pub nom: String,
    pub total_acquis: i32,
    pub quantite: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub prix: Decimal,
    pub categorie: String,
    pub emplacement: String,
    pub seuil_min: i32,
    pub seuil_max: i32,
    pub status: StockStatus,
}

/// Stock level relative to the minimum threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Critique,
    Faible,
    #[serde(rename = "OK")]
    Ok,
}

impl StockStatus {
    /// `Critique` at or below the minimum, `Faible` up to one and a half times it
    pub fn classify(quantite: i32, seuil_min: i32) -> Self {
        let quantite = Decimal::from(quantite);
        let seuil_min = Decimal::from(seuil_min);

        if quantite <= seuil_min {
            StockStatus::Critique
        } else if quantite <= seuil_min * Decimal::new(15, 1) {
            StockStatus::Faible
        } else {
            StockStatus::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Critique => "Critique",
            StockStatus::Faible => "Faible",
            StockStatus::Ok => "OK",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::classify(10, 10), StockStatus::Critique);
        assert_eq!(StockStatus::classify(0, 10), StockStatus::Critique);
        assert_eq!(StockStatus::classify(15, 10), StockStatus::Faible);
        assert_eq!(StockStatus::classify(16, 10), StockStatus::Ok);
        // 1.5 * 3 = 4.5, so 5 is already fine
        assert_eq!(StockStatus::classify(4, 3), StockStatus::Faible);
        assert_eq!(StockStatus::classify(5, 3), StockStatus::Ok);
    }
}
