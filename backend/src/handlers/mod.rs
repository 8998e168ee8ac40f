//! HTTP handlers for the K2N backend

mod acquisitions;
mod contacts;
mod fonds;
mod health;
mod sales;
mod sorties;
mod stats;
mod stocks;

pub use acquisitions::*;
pub use contacts::*;
pub use fonds::*;
pub use health::*;
pub use sales::*;
pub use sorties::*;
pub use stats::*;
pub use stocks::*;
