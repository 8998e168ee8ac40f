//! Reporting service: fetches the ledger rows of a report window and runs the
//! reporting core over them

use shared::models::{Acquisition, Fond, Record, Sale, Sortie};
use shared::reporting::{
    aggregate, orphan_exits, resolve, stock_remaining, Bucket, ReportRequest, StockLine,
};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::{AcquisitionService, FondService, SaleService, SortieService};

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    db: PgPool,
}

impl ReportingService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Net sales per period
    pub async fn sales_report(&self, request: &ReportRequest) -> AppResult<Vec<Bucket>> {
        let (interval, granularity) = resolve(request)?;
        let sales = SaleService::new(self.db.clone()).list_in(&interval).await?;
        let records: Vec<Record> = sales.iter().map(Sale::net_record).collect();

        tracing::debug!(kind = %request.kind, records = records.len(), "Building sales report");

        Ok(aggregate(&records, &interval, &granularity)?)
    }

    /// Acquisition costs per period
    pub async fn acquisitions_report(&self, request: &ReportRequest) -> AppResult<Vec<Bucket>> {
        let (interval, granularity) = resolve(request)?;
        let acquisitions = AcquisitionService::new(self.db.clone()).list_in(&interval).await?;
        let records: Vec<Record> = acquisitions.iter().map(Acquisition::cost_record).collect();

        tracing::debug!(kind = %request.kind, records = records.len(), "Building acquisitions report");

        Ok(aggregate(&records, &interval, &granularity)?)
    }

    /// Funds received per period
    pub async fn funds_report(&self, request: &ReportRequest) -> AppResult<Vec<Bucket>> {
        let (interval, granularity) = resolve(request)?;
        let fonds = FondService::new(self.db.clone()).list_in(&interval).await?;
        let records: Vec<Record> = fonds.iter().map(Fond::amount_record).collect();

        tracing::debug!(kind = %request.kind, records = records.len(), "Building funds report");

        Ok(aggregate(&records, &interval, &granularity)?)
    }

    /// Quantities taken out of the stock per period
    pub async fn exits_report(&self, request: &ReportRequest) -> AppResult<Vec<Bucket>> {
        let (interval, granularity) = resolve(request)?;
        let sorties = SortieService::new(self.db.clone()).list_in(&interval).await?;
        let records: Vec<Record> = sorties.iter().map(Sortie::quantity_record).collect();

        tracing::debug!(kind = %request.kind, records = records.len(), "Building exits report");

        Ok(aggregate(&records, &interval, &granularity)?)
    }

    /// Remaining stock per article: acquired quantities against sold and exited ones
    pub async fn stock_report(&self, request: &ReportRequest) -> AppResult<Vec<StockLine>> {
        let (interval, _) = resolve(request)?;

        let acquisitions = AcquisitionService::new(self.db.clone()).list_in(&interval).await?;
        let sales = SaleService::new(self.db.clone()).list_in(&interval).await?;
        let sorties = SortieService::new(self.db.clone()).list_in(&interval).await?;

        let acquired: Vec<Record> = acquisitions.iter().map(Acquisition::quantity_record).collect();
        let exits: Vec<Record> = sales
            .iter()
            .map(Sale::quantity_record)
            .chain(sorties.iter().map(Sortie::quantity_record))
            .collect();

        let orphans = orphan_exits(&acquired, &exits, &interval)?;
        if !orphans.is_empty() {
            tracing::warn!(
                articles = ?orphans,
                start = %interval.start,
                end = %interval.end,
                "Articles left the stock without any acquisition in the report window"
            );
        }

        Ok(stock_remaining(&acquired, &exits, &interval)?)
    }
}
