//! Canonical ledger record consumed by the reporting core

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated amount, optionally attached to an article.
///
/// Persisted entities never reach the reporting core directly: each one exposes
/// adapters that pick the measure a report needs and build a `Record` from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
}

impl Record {
    pub fn new(amount: Decimal, date: NaiveDate) -> Self {
        Self {
            amount,
            date,
            article: None,
        }
    }

    pub fn for_article(article: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            amount,
            date,
            article: Some(article.into()),
        }
    }
}
