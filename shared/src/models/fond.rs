//! Funds received (fonds)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

/// Money received from a creditor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fond {
    pub id: Uuid,
    pub nom_crediteur: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub somme_percue: Decimal,
    pub date_fonds: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Fond {
    pub fn amount_record(&self) -> Record {
        Record::new(self.somme_percue, self.date_fonds)
    }
}
