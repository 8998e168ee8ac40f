//! Reporting core tests
//!
//! Tests for the report pipeline including:
//! - Period resolution for day, range, month and year reports
//! - Time-series aggregation over adapted sales, acquisitions and funds
//! - Remaining stock per article
//! - Additivity, rollover and idempotence properties

use chrono::{Datelike, Days, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::models::{Acquisition, AcquisitionCosts, Fond, Record, Sale, Sortie};
use shared::reporting::{
    aggregate, orphan_exits, report, resolve, series_total, stock_remaining, Bucket,
    Granularity, Interval, ReportRequest, StockLine,
};
use shared::types::PaymentMode;
use std::str::FromStr;
use uuid::Uuid;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sale(produit: &str, quantite: i32, montant_net: &str, on: NaiveDate) -> Sale {
    Sale {
        id: Uuid::new_v4(),
        responsable: "Awa".to_string(),
        livreur: None,
        produit: produit.to_string(),
        quantite,
        montant_net: dec(montant_net),
        montant_recu: dec(montant_net),
        mode_paiement: PaymentMode::Especes,
        frais: None,
        poids: Decimal::ZERO,
        date_vente: on,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn acquisition(nature: &str, quantite: &str, prix: &str, on: NaiveDate) -> Acquisition {
    let costs = AcquisitionCosts::compute(dec(quantite), dec(prix), Decimal::ZERO).unwrap();
    Acquisition {
        id: Uuid::new_v4(),
        responsable_acquisition: "Koffi".to_string(),
        nature_acquisition: nature.to_string(),
        quantite_acquise: dec(quantite),
        prix_unitaire: dec(prix),
        frais_acquisition: costs.frais_acquisition,
        frais_connexes: Decimal::ZERO,
        total_frais: costs.total_frais,
        type_acquisition: "Achat".to_string(),
        date_acquisition: on,
        details: None,
        commentaires: None,
        updated_at: Utc::now(),
    }
}

fn sortie(article: &str, quantite: i32, on: NaiveDate) -> Sortie {
    Sortie {
        id: Uuid::new_v4(),
        article: article.to_string(),
        quantite,
        motif: "Casse".to_string(),
        responsable: "Koffi".to_string(),
        date_sortie: on,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Stock example: 10 acquired, 3 exited in January
    #[test]
    fn test_january_stock_example() {
        let acquisitions = vec![acquisition("A", "10", "1", date(2024, 1, 5)).quantity_record()];
        let exits = vec![sortie("A", 3, date(2024, 1, 10)).quantity_record()];
        let (interval, _) = resolve(&ReportRequest::month(1, 2024)).unwrap();

        let lines = stock_remaining(&acquisitions, &exits, &interval).unwrap();

        assert_eq!(
            lines,
            vec![StockLine {
                article: "A".to_string(),
                total_acquired: dec("10"),
                remaining: dec("7"),
            }]
        );
    }

    /// Day report without records still emits one zero bucket
    #[test]
    fn test_empty_day_report() {
        let buckets = report(&[], &ReportRequest::day("2024-03-01")).unwrap();
        assert_eq!(buckets, vec![Bucket::new("2024-03-01", Decimal::ZERO)]);
    }

    /// Year report only lists months that hold sales, in calendar order
    #[test]
    fn test_year_report_march_and_july() {
        let sales: Vec<Record> = vec![
            sale("Riz", 1, "300", date(2024, 7, 3)),
            sale("Riz", 1, "150", date(2024, 3, 20)),
            sale("Huile", 2, "50", date(2024, 3, 21)),
        ]
        .iter()
        .map(Sale::net_record)
        .collect();

        let buckets = report(&sales, &ReportRequest::year(2024)).unwrap();

        assert_eq!(
            buckets,
            vec![Bucket::new("Mar", dec("200")), Bucket::new("Juil", dec("300"))]
        );
    }

    /// Sales and exits both consume stock; an exit-only article is reported apart
    #[test]
    fn test_stock_from_sales_and_sorties() {
        let acquisitions: Vec<Record> = vec![
            acquisition("Riz", "50", "400", date(2024, 5, 2)),
            acquisition("Sucre", "20", "600", date(2024, 5, 3)),
        ]
        .iter()
        .map(Acquisition::quantity_record)
        .collect();

        let mut exits: Vec<Record> = vec![
            sale("Riz", 12, "4800", date(2024, 5, 10)),
            sale("Savon", 1, "250", date(2024, 5, 11)),
        ]
        .iter()
        .map(Sale::quantity_record)
        .collect();
        exits.push(sortie("Riz", 3, date(2024, 5, 12)).quantity_record());

        let (interval, _) = resolve(&ReportRequest::month(5, 2024)).unwrap();
        let lines = stock_remaining(&acquisitions, &exits, &interval).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].article, "Riz");
        assert_eq!(lines[0].remaining, dec("35"));
        assert_eq!(lines[1].article, "Sucre");
        assert_eq!(lines[1].remaining, dec("20"));
        assert_eq!(
            orphan_exits(&acquisitions, &exits, &interval).unwrap(),
            vec!["Savon".to_string()]
        );
    }

    /// Funds report over a range, labelled by ISO date
    #[test]
    fn test_funds_range_report() {
        let fonds: Vec<Record> = [("1500.50", 2), ("499.50", 2), ("1000", 4)]
            .iter()
            .map(|(amount, day)| {
                Fond {
                    id: Uuid::new_v4(),
                    nom_crediteur: "Banque".to_string(),
                    somme_percue: dec(amount),
                    date_fonds: date(2025, 7, *day),
                    created_at: Utc::now(),
                }
                .amount_record()
            })
            .collect();

        let buckets = report(&fonds, &ReportRequest::range("2025-07-01", "2025-07-04")).unwrap();

        assert_eq!(
            buckets,
            vec![
                Bucket::new("2025-07-02", dec("2000")),
                Bucket::new("2025-07-04", dec("1000")),
            ]
        );
    }

    /// Acquisitions report sums the total cost
    #[test]
    fn test_acquisitions_cost_report() {
        let costs: Vec<Record> = vec![
            acquisition("Riz", "2.5", "1000", date(2024, 2, 14)),
            acquisition("Riz", "1", "1000", date(2024, 2, 14)),
        ]
        .iter()
        .map(Acquisition::cost_record)
        .collect();

        let buckets = report(&costs, &ReportRequest::month(2, 2024)).unwrap();

        assert_eq!(buckets, vec![Bucket::new("14/02/2024", dec("3500"))]);
    }

    /// Month report of December does not leak into the next January
    #[test]
    fn test_december_month_report() {
        let records = vec![
            Record::new(dec("5"), date(2024, 12, 31)),
            Record::new(dec("7"), date(2025, 1, 1)),
        ];
        let buckets = report(&records, &ReportRequest::month(12, 2024)).unwrap();
        assert_eq!(buckets, vec![Bucket::new("31/12/2024", dec("5"))]);
    }

    /// Invalid requests never produce buckets
    #[test]
    fn test_invalid_requests() {
        let invalid = [
            ReportRequest {
                kind: "semaine".to_string(),
                ..Default::default()
            },
            ReportRequest {
                kind: "jour".to_string(),
                ..Default::default()
            },
            ReportRequest {
                kind: "periode".to_string(),
                range_start: Some("2024-01-01".to_string()),
                ..Default::default()
            },
            ReportRequest::month(13, 2024),
            ReportRequest::day("2024/01/01"),
        ];

        for request in invalid {
            assert!(report(&[], &request).is_err(), "{:?} should be rejected", request);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating amounts (0.01 to 10000.00)
    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=1_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    /// Strategy for generating records spread over 2024
    fn record_strategy() -> impl Strategy<Value = Record> {
        (amount_strategy(), 0u64..366, prop::sample::select(vec!["A", "B", "C"])).prop_map(
            |(amount, offset, article)| {
                let on = date(2024, 1, 1).checked_add_days(Days::new(offset)).unwrap();
                Record::for_article(article, amount, on)
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Splitting a window into consecutive parts preserves the grand total
        #[test]
        fn prop_partition_additivity(
            records in prop::collection::vec(record_strategy(), 0..60),
            split in 1u64..365
        ) {
            let start = date(2024, 1, 1);
            let end = date(2025, 1, 1);
            let cut = start.checked_add_days(Days::new(split)).unwrap();

            let whole = Interval::half_open(start, end);
            let first = Interval::half_open(start, cut);
            let second = Interval::half_open(cut, end);
            let label = Granularity::ExactDay { label: "total".to_string() };

            let total = series_total(&aggregate(&records, &whole, &label).unwrap()).unwrap();
            let parts = series_total(&aggregate(&records, &first, &label).unwrap()).unwrap()
                + series_total(&aggregate(&records, &second, &label).unwrap()).unwrap();

            prop_assert_eq!(total, parts);
        }

        /// The year report and its twelve month reports agree on the total
        #[test]
        fn prop_months_sum_to_year(records in prop::collection::vec(record_strategy(), 0..60)) {
            let year = series_total(&report(&records, &ReportRequest::year(2024)).unwrap()).unwrap();
            let months: Decimal = (1..=12)
                .map(|m| {
                    series_total(&report(&records, &ReportRequest::month(m, 2024)).unwrap()).unwrap()
                })
                .sum();
            prop_assert_eq!(year, months);
        }

        /// December always ends where the next year begins
        #[test]
        fn prop_december_rollover(year in 1900i32..2200) {
            let (december, _) = resolve(&ReportRequest::month(12, year)).unwrap();
            let (next, _) = resolve(&ReportRequest::year(year + 1)).unwrap();
            prop_assert_eq!(december.end, next.start);
            prop_assert_eq!(next.start, date(year + 1, 1, 1));
        }

        /// Year buckets are in calendar order and never empty
        #[test]
        fn prop_year_buckets_ordered(records in prop::collection::vec(record_strategy(), 0..60)) {
            let buckets = report(&records, &ReportRequest::year(2024)).unwrap();
            let months: Vec<usize> = buckets
                .iter()
                .map(|b| shared::reporting::MONTH_LABELS.iter().position(|l| *l == b.label).unwrap())
                .collect();
            prop_assert!(months.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(buckets.len() <= 12);
            let present: std::collections::BTreeSet<u32> = records.iter().map(|r| r.date.month()).collect();
            prop_assert_eq!(buckets.len(), present.len());
        }

        /// Without exits, remaining stock equals the acquired total
        #[test]
        fn prop_no_exits_keeps_everything(records in prop::collection::vec(record_strategy(), 0..40)) {
            let (interval, _) = resolve(&ReportRequest::year(2024)).unwrap();
            for line in stock_remaining(&records, &[], &interval).unwrap() {
                prop_assert_eq!(line.remaining, line.total_acquired);
            }
        }

        /// Remaining stock equals acquired minus exited per article
        #[test]
        fn prop_stock_balance(
            acquisitions in prop::collection::vec(record_strategy(), 1..40),
            exits in prop::collection::vec(record_strategy(), 0..40)
        ) {
            let (interval, _) = resolve(&ReportRequest::year(2024)).unwrap();
            for line in stock_remaining(&acquisitions, &exits, &interval).unwrap() {
                let exited: Decimal = exits
                    .iter()
                    .filter(|r| r.article.as_deref() == Some(line.article.as_str()))
                    .map(|r| r.amount)
                    .sum();
                prop_assert_eq!(line.remaining, line.total_acquired - exited);
            }
        }

        /// Same inputs, same outputs
        #[test]
        fn prop_idempotent(
            acquisitions in prop::collection::vec(record_strategy(), 0..30),
            exits in prop::collection::vec(record_strategy(), 0..30),
            month in 1u32..=12
        ) {
            let request = ReportRequest::month(month, 2024);
            prop_assert_eq!(report(&acquisitions, &request).unwrap(), report(&acquisitions, &request).unwrap());

            let (interval, _) = resolve(&request).unwrap();
            prop_assert_eq!(
                stock_remaining(&acquisitions, &exits, &interval),
                stock_remaining(&acquisitions, &exits, &interval)
            );
        }
    }
}
