//! Business logic services for the K2N backend

pub mod acquisition;
pub mod contact;
pub mod fond;
pub mod reporting;
pub mod sale;
pub mod sortie;
pub mod stats;
pub mod stock;

pub use acquisition::AcquisitionService;
pub use contact::ContactService;
pub use fond::FondService;
pub use reporting::ReportingService;
pub use sale::SaleService;
pub use sortie::SortieService;
pub use stats::StatsService;
pub use stock::StockService;
