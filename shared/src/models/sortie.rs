//! Stock exits (sorties)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;

/// Goods taken out of the stock for a reason other than a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sortie {
    pub id: Uuid,
    pub article: String,
    pub quantite: i32,
    pub motif: String,
    pub responsable: String,
    pub date_sortie: NaiveDate,
}

impl Sortie {
    pub fn quantity_record(&self) -> Record {
        Record::for_article(self.article.clone(), Decimal::from(self.quantite), self.date_sortie)
    }
}
