//! Remaining stock per article: acquired quantity minus exited quantity over a window

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{add_amount, resolve, Interval, ReportError, ReportRequest};
use crate::models::Record;

/// Stock position of one article over a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    #[serde(rename = "nom")]
    pub article: String,
    #[serde(rename = "totalAcquis", with = "rust_decimal::serde::float")]
    pub total_acquired: Decimal,
    /// May be negative when more was consumed than acquired in the window
    #[serde(rename = "quantiteRestante", with = "rust_decimal::serde::float")]
    pub remaining: Decimal,
}

/// Per-article totals, keeping the order in which articles were first seen
struct ArticleTotals<'a> {
    order: Vec<&'a str>,
    totals: HashMap<&'a str, Decimal>,
}

impl<'a> ArticleTotals<'a> {
    fn collect(records: &'a [Record], interval: &Interval) -> Result<Self, ReportError> {
        let mut order = Vec::new();
        let mut totals: HashMap<&'a str, Decimal> = HashMap::new();

        for record in records.iter().filter(|r| interval.contains(r.date)) {
            let Some(article) = record.article.as_deref() else {
                continue;
            };
            let total = totals.entry(article).or_insert_with(|| {
                order.push(article);
                Decimal::ZERO
            });
            *total = add_amount(*total, record.amount)?;
        }

        Ok(Self { order, totals })
    }

    fn get(&self, article: &str) -> Decimal {
        self.totals.get(article).copied().unwrap_or(Decimal::ZERO)
    }
}

/// Remaining stock for every article acquired inside `interval`.
///
/// Lines follow the first appearance of each article among the in-window acquisitions.
/// Articles that only appear among the exits are left out; see [`orphan_exits`].
pub fn stock_remaining(
    acquisitions: &[Record],
    exits: &[Record],
    interval: &Interval,
) -> Result<Vec<StockLine>, ReportError> {
    let acquired = ArticleTotals::collect(acquisitions, interval)?;
    let exited = ArticleTotals::collect(exits, interval)?;

    acquired
        .order
        .iter()
        .map(|article| {
            let total_acquired = acquired.get(article);
            let remaining = total_acquired
                .checked_sub(exited.get(article))
                .ok_or(ReportError::Overflow)?;
            Ok(StockLine {
                article: (*article).to_string(),
                total_acquired,
                remaining,
            })
        })
        .collect()
}

/// Articles exited inside `interval` without any acquisition in the same window
pub fn orphan_exits(
    acquisitions: &[Record],
    exits: &[Record],
    interval: &Interval,
) -> Result<Vec<String>, ReportError> {
    let acquired = ArticleTotals::collect(acquisitions, interval)?;
    let exited = ArticleTotals::collect(exits, interval)?;

    Ok(exited
        .order
        .into_iter()
        .filter(|article| !acquired.totals.contains_key(article))
        .map(str::to_string)
        .collect())
}

/// Resolve `request` and compute the stock lines over the resulting window
pub fn stock_report(
    acquisitions: &[Record],
    exits: &[Record],
    request: &ReportRequest,
) -> Result<Vec<StockLine>, ReportError> {
    let (interval, _) = resolve(request)?;
    stock_remaining(acquisitions, exits, &interval)
}
