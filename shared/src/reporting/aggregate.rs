//! Time-series aggregation of amount records into labelled buckets

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{add_amount, resolve, Granularity, Interval, ReportError, ReportRequest};
use crate::models::Record;

/// One aggregated point of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Bucket {
    pub fn new(label: impl Into<String>, total: Decimal) -> Self {
        Self {
            label: label.into(),
            total,
        }
    }
}

/// Sum the records of `interval` per calendar unit of `granularity`.
///
/// `ExactDay` always yields one bucket, zero when nothing matched. The grouped
/// granularities only yield units that hold at least one record, in calendar order.
/// Fails with [`ReportError::Overflow`] when a bucket total leaves the `Decimal` range.
pub fn aggregate(
    records: &[Record],
    interval: &Interval,
    granularity: &Granularity,
) -> Result<Vec<Bucket>, ReportError> {
    let mut in_window = records.iter().filter(|r| interval.contains(r.date));

    match granularity {
        Granularity::ExactDay { label } => {
            let total = in_window.try_fold(Decimal::ZERO, |total, r| add_amount(total, r.amount))?;
            Ok(vec![Bucket::new(label.clone(), total)])
        }
        Granularity::GroupByDay | Granularity::GroupByDayOfMonth { .. } => {
            let mut per_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
            for record in in_window {
                let total = per_day.entry(record.date).or_insert(Decimal::ZERO);
                *total = add_amount(*total, record.amount)?;
            }
            Ok(per_day
                .into_iter()
                .map(|(date, total)| Bucket::new(granularity.label_for(date), total))
                .collect())
        }
        Granularity::GroupByMonthName => {
            // keyed by (year, month) so an unusual multi-year window stays chronological
            let mut per_month: BTreeMap<(i32, u32), (NaiveDate, Decimal)> = BTreeMap::new();
            for record in in_window {
                let entry = per_month
                    .entry((record.date.year(), record.date.month()))
                    .or_insert((record.date, Decimal::ZERO));
                entry.1 = add_amount(entry.1, record.amount)?;
            }
            Ok(per_month
                .into_values()
                .map(|(date, total)| Bucket::new(granularity.label_for(date), total))
                .collect())
        }
    }
}

/// Resolve `request` and aggregate `records` over the resulting window
pub fn report(records: &[Record], request: &ReportRequest) -> Result<Vec<Bucket>, ReportError> {
    let (interval, granularity) = resolve(request)?;
    aggregate(records, &interval, &granularity)
}

/// Grand total of a bucket series
pub fn series_total(buckets: &[Bucket]) -> Result<Decimal, ReportError> {
    buckets
        .iter()
        .try_fold(Decimal::ZERO, |total, b| add_amount(total, b.total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(amount: &str, y: i32, m: u32, d: u32) -> Record {
        Record::new(dec(amount), date(y, m, d))
    }

    #[test]
    fn test_exact_day_without_records_emits_zero() {
        let buckets = report(&[], &ReportRequest::day("2024-03-01")).unwrap();
        assert_eq!(buckets, vec![Bucket::new("2024-03-01", Decimal::ZERO)]);
    }

    #[test]
    fn test_exact_day_sums_only_that_day() {
        let records = vec![
            record("100.50", 2024, 3, 1),
            record("20.25", 2024, 3, 1),
            record("999", 2024, 3, 2),
        ];
        let buckets = report(&records, &ReportRequest::day("2024-03-01")).unwrap();
        assert_eq!(buckets, vec![Bucket::new("2024-03-01", dec("120.75"))]);
    }

    #[test]
    fn test_range_groups_by_day_in_order() {
        let records = vec![
            record("5", 2024, 1, 12),
            record("1", 2024, 1, 10),
            record("2", 2024, 1, 12),
            record("7", 2024, 1, 25),
        ];
        let buckets = report(&records, &ReportRequest::range("2024-01-10", "2024-01-20")).unwrap();
        assert_eq!(
            buckets,
            vec![
                Bucket::new("2024-01-10", dec("1")),
                Bucket::new("2024-01-12", dec("7")),
            ]
        );
    }

    #[test]
    fn test_range_without_records_is_empty() {
        let buckets = report(&[], &ReportRequest::range("2024-01-10", "2024-01-20")).unwrap();
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_month_labels_and_exclusive_end() {
        let records = vec![
            record("3", 2024, 3, 5),
            record("4", 2024, 3, 31),
            record("100", 2024, 4, 1),
        ];
        let buckets = report(&records, &ReportRequest::month(3, 2024)).unwrap();
        assert_eq!(
            buckets,
            vec![
                Bucket::new("05/03/2024", dec("3")),
                Bucket::new("31/03/2024", dec("4")),
            ]
        );
    }

    #[test]
    fn test_year_orders_months_by_calendar() {
        let records = vec![
            record("10", 2024, 7, 14),
            record("5", 2024, 3, 2),
            record("1", 2024, 3, 28),
            record("50", 2023, 12, 31),
        ];
        let buckets = report(&records, &ReportRequest::year(2024)).unwrap();
        assert_eq!(
            buckets,
            vec![Bucket::new("Mar", dec("6")), Bucket::new("Juil", dec("10"))]
        );
    }

    #[test]
    fn test_decimal_sums_do_not_drift() {
        let records: Vec<Record> = (0..1000).map(|_| record("0.1", 2024, 5, 5)).collect();
        let buckets = report(&records, &ReportRequest::day("2024-05-05")).unwrap();
        assert_eq!(buckets[0].total, dec("100.0"));
    }

    #[test]
    fn test_bucket_serializes_total_as_number() {
        let json = serde_json::to_value(Bucket::new("Jan", dec("12.5"))).unwrap();
        assert_eq!(json, serde_json::json!({ "label": "Jan", "total": 12.5 }));
    }

    #[test]
    fn test_series_total() {
        let buckets = vec![Bucket::new("a", dec("1.5")), Bucket::new("b", dec("2"))];
        assert_eq!(series_total(&buckets).unwrap(), dec("3.5"));
        assert_eq!(series_total(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_totals_are_reported() {
        let records = vec![record("50000000000000000000000000000", 2024, 3, 1); 2];

        assert_eq!(
            report(&records, &ReportRequest::day("2024-03-01")),
            Err(ReportError::Overflow)
        );
        assert_eq!(
            report(&records, &ReportRequest::month(3, 2024)),
            Err(ReportError::Overflow)
        );
        assert_eq!(
            report(&records, &ReportRequest::year(2024)),
            Err(ReportError::Overflow)
        );

        let buckets = vec![Bucket::new("a", Decimal::MAX), Bucket::new("b", Decimal::ONE)];
        assert_eq!(series_total(&buckets), Err(ReportError::Overflow));
    }
}
