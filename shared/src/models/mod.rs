//! Domain models for the K2N inventory and sales ledger

mod acquisition;
mod contact;
mod fond;
mod record;
mod sale;
mod sortie;
mod stock;

pub use acquisition::*;
pub use contact::*;
pub use fond::*;
pub use record::*;
pub use sale::*;
pub use sortie::*;
pub use stock::*;
