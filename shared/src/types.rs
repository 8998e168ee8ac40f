//! Common types used across the platform

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a client paid for a sale, stored as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PaymentMode {
    Especes,
    MobileMoney,
    Virement,
    Cheque,
}

impl PaymentMode {
    pub fn code(&self) -> i32 {
        match self {
            PaymentMode::Especes => 1,
            PaymentMode::MobileMoney => 2,
            PaymentMode::Virement => 3,
            PaymentMode::Cheque => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Especes => "Espèces",
            PaymentMode::MobileMoney => "Mobile Money",
            PaymentMode::Virement => "Virement",
            PaymentMode::Cheque => "Chèque",
        }
    }
}

impl TryFrom<i32> for PaymentMode {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(PaymentMode::Especes),
            2 => Ok(PaymentMode::MobileMoney),
            3 => Ok(PaymentMode::Virement),
            4 => Ok(PaymentMode::Cheque),
            other => Err(format!("unknown payment mode {}", other)),
        }
    }
}

impl From<PaymentMode> for i32 {
    fn from(mode: PaymentMode) -> Self {
        mode.code()
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count and optional amount for one entity on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityStats {
    pub count: i64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub amount: Option<Decimal>,
}

/// Dashboard counters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub acquisitions: EntityStats,
    pub sorties: EntityStats,
    pub stocks: EntityStats,
    pub ventes: EntityStats,
    pub fonds: EntityStats,
}
