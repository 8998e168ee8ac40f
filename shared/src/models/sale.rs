//! Sales (ventes)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;
use crate::types::PaymentMode;

/// A recorded sale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub responsable: String,
    /// Delivery person, when the goods were delivered
    pub livreur: Option<String>,
    pub produit: String,
    pub quantite: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant_net: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub montant_recu: Decimal,
    pub mode_paiement: PaymentMode,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub frais: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub poids: Decimal,
    pub date_vente: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sale {
    /// Net proceeds of the sale, for the sales report
    pub fn net_record(&self) -> Record {
        Record::for_article(self.produit.clone(), self.montant_net, self.date_vente)
    }

    /// Units sold, for the stock report
    pub fn quantity_record(&self) -> Record {
        Record::for_article(self.produit.clone(), Decimal::from(self.quantite), self.date_vente)
    }
}
