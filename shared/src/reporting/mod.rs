//! Reporting core: period resolution, time-series aggregation and stock merge
//!
//! Every function here is pure. Callers fetch the records for the window returned by
//! [`resolve`], adapt them to [`Record`](crate::models::Record) and pass them in.

mod aggregate;
mod period;
mod stock;

pub use aggregate::*;
pub use period::*;
pub use stock::*;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while interpreting a report request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid report request: {0}")]
    InvalidRequest(String),

    #[error("Amount overflow while totalling report")]
    Overflow,
}

impl ReportError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ReportError::InvalidRequest(message.into())
    }
}

/// `total + amount`, or [`ReportError::Overflow`] past the `Decimal` range
pub(crate) fn add_amount(total: Decimal, amount: Decimal) -> Result<Decimal, ReportError> {
    total.checked_add(amount).ok_or(ReportError::Overflow)
}
