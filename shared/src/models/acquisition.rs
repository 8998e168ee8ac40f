//! Acquisitions of goods

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

/// A purchase of goods entering the stock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acquisition {
    pub id: Uuid,
    pub responsable_acquisition: String,
    /// Article acquired
    pub nature_acquisition: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantite_acquise: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub prix_unitaire: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub frais_acquisition: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub frais_connexes: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_frais: Decimal,
    pub type_acquisition: String,
    pub date_acquisition: NaiveDate,
    pub details: Option<String>,
    pub commentaires: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Cost breakdown of an acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionCosts {
    pub frais_acquisition: Decimal,
    pub total_frais: Decimal,
}

impl AcquisitionCosts {
    /// Purchase cost is quantity times unit price; related fees come on top
    pub fn compute(
        quantite: Decimal,
        prix_unitaire: Decimal,
        frais_connexes: Decimal,
    ) -> Result<Self, &'static str> {
        let frais_acquisition = quantite
            .checked_mul(prix_unitaire)
            .ok_or("Acquisition cost is too large")?;
        let total_frais = frais_acquisition
            .checked_add(frais_connexes)
            .ok_or("Acquisition cost is too large")?;

        Ok(Self {
            frais_acquisition,
            total_frais,
        })
    }
}

impl Acquisition {
    /// Total cost, for the acquisitions report
    pub fn cost_record(&self) -> Record {
        Record::for_article(
            self.nature_acquisition.clone(),
            self.total_frais,
            self.date_acquisition,
        )
    }

    /// Quantity acquired, for the stock report
    pub fn quantity_record(&self) -> Record {
        Record::for_article(
            self.nature_acquisition.clone(),
            self.quantite_acquise,
            self.date_acquisition,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_include_related_fees() {
        let costs =
            AcquisitionCosts::compute(Decimal::new(125, 1), Decimal::from(200), Decimal::from(500))
                .unwrap();
        assert_eq!(costs.frais_acquisition, Decimal::from(2500));
        assert_eq!(costs.total_frais, Decimal::from(3000));
    }

    #[test]
    fn test_costs_out_of_range_are_rejected() {
        let huge = Decimal::from(1_000_000_000_000_000i64);
        assert!(AcquisitionCosts::compute(huge, huge, Decimal::ZERO).is_err());
        assert!(AcquisitionCosts::compute(Decimal::ONE, Decimal::MAX, Decimal::ONE).is_err());
        assert!(AcquisitionCosts::compute(Decimal::ONE, Decimal::MAX, Decimal::ZERO).is_ok());
    }
}
