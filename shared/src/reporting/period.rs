//! Period resolution: turns a report request into a date window and a bucketing scheme

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ReportError;

/// Wire format of every date parameter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month labels used by the yearly report, January first
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov", "Déc",
];

/// Report type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Day,
    Range,
    Month,
    Year,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Day => "day",
            ReportKind::Range => "range",
            ReportKind::Month => "month",
            ReportKind::Year => "year",
        }
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    /// Accepts the English tags and the French ones sent by the frontend
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "jour" => Ok(ReportKind::Day),
            "range" | "periode" | "période" => Ok(ReportKind::Range),
            "month" | "mois" => Ok(ReportKind::Month),
            "year" | "annee" | "année" => Ok(ReportKind::Year),
            other => Err(ReportError::invalid(format!("unknown report type '{}'", other))),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report parameters as received from a client.
///
/// Only the parameters required by `kind` are read; the others are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default, alias = "type")]
    pub kind: String,
    #[serde(default, alias = "date")]
    pub day: Option<String>,
    #[serde(default, alias = "start")]
    pub range_start: Option<String>,
    #[serde(default, alias = "end")]
    pub range_end: Option<String>,
    #[serde(default, alias = "mois")]
    pub month: Option<u32>,
    #[serde(default, alias = "annee")]
    pub year: Option<i32>,
}

impl ReportRequest {
    pub fn day(date: impl Into<String>) -> Self {
        Self {
            kind: ReportKind::Day.as_str().to_string(),
            day: Some(date.into()),
            ..Default::default()
        }
    }

    pub fn range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            kind: ReportKind::Range.as_str().to_string(),
            range_start: Some(start.into()),
            range_end: Some(end.into()),
            ..Default::default()
        }
    }

    pub fn month(month: u32, year: i32) -> Self {
        Self {
            kind: ReportKind::Month.as_str().to_string(),
            month: Some(month),
            year: Some(year),
            ..Default::default()
        }
    }

    pub fn year(year: i32) -> Self {
        Self {
            kind: ReportKind::Year.as_str().to_string(),
            year: Some(year),
            ..Default::default()
        }
    }
}

/// A date window. The start is always included; the end only when `end_inclusive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub end_inclusive: bool,
}

impl Interval {
    /// Closed window `[start, end]`
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            end_inclusive: true,
        }
    }

    /// Half-open window `[start, end)`
    pub fn half_open(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            end_inclusive: false,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if date < self.start {
            return false;
        }
        if self.end_inclusive {
            date <= self.end
        } else {
            date < self.end
        }
    }

    /// First date after the window, for `>= start AND < end` storage queries
    pub fn end_exclusive(&self) -> NaiveDate {
        if self.end_inclusive {
            self.end.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
        } else {
            self.end
        }
    }
}

/// Calendar unit used to bucket records inside an interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Granularity {
    /// One bucket for the whole day, labelled with the requested date
    ExactDay { label: String },
    /// One bucket per date, ISO labels
    GroupByDay,
    /// One bucket per day of the month, `DD/MM/YYYY` labels
    GroupByDayOfMonth { month: u32, year: i32 },
    /// One bucket per month, labels from [`MONTH_LABELS`]
    GroupByMonthName,
}

impl Granularity {
    /// Label of the bucket holding `date`
    pub fn label_for(&self, date: NaiveDate) -> String {
        match self {
            Granularity::ExactDay { label } => label.clone(),
            Granularity::GroupByDay => date.format(DATE_FORMAT).to_string(),
            Granularity::GroupByDayOfMonth { month, year } => {
                format!("{:02}/{:02}/{}", date.day(), month, year)
            }
            Granularity::GroupByMonthName => month_label(date.month()).to_string(),
        }
    }
}

/// Short French label of a month number (1..=12)
pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS[(month.clamp(1, 12) - 1) as usize]
}

/// Resolve a report request into its interval and granularity
pub fn resolve(request: &ReportRequest) -> Result<(Interval, Granularity), ReportError> {
    let kind: ReportKind = request.kind.parse()?;

    match kind {
        ReportKind::Day => {
            let raw = required(request.day.as_deref(), "date")?;
            let date = parse_date(raw, "date")?;
            Ok((
                Interval::closed(date, date),
                Granularity::ExactDay {
                    label: raw.trim().to_string(),
                },
            ))
        }
        ReportKind::Range => {
            let start = parse_date(required(request.range_start.as_deref(), "start")?, "start")?;
            let end = parse_date(required(request.range_end.as_deref(), "end")?, "end")?;
            if start > end {
                return Err(ReportError::invalid(format!(
                    "range start {} is after range end {}",
                    start, end
                )));
            }
            Ok((Interval::closed(start, end), Granularity::GroupByDay))
        }
        ReportKind::Month => {
            let month = request
                .month
                .ok_or_else(|| ReportError::invalid("missing parameter 'month'"))?;
            let year = request
                .year
                .ok_or_else(|| ReportError::invalid("missing parameter 'year'"))?;
            let (start, end) = month_bounds(month, year)?;
            Ok((
                Interval::half_open(start, end),
                Granularity::GroupByDayOfMonth { month, year },
            ))
        }
        ReportKind::Year => {
            let year = request
                .year
                .ok_or_else(|| ReportError::invalid("missing parameter 'year'"))?;
            let (start, end) = year_bounds(year)?;
            Ok((Interval::half_open(start, end), Granularity::GroupByMonthName))
        }
    }
}

/// `[first of month, first of next month)`, rolling December into January
pub fn month_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), ReportError> {
    if !(1..=12).contains(&month) {
        return Err(ReportError::invalid(format!(
            "month must be between 1 and 12, got {}",
            month
        )));
    }

    let (next_month, next_year) = if month == 12 {
        (1, year.checked_add(1))
    } else {
        (month + 1, Some(year))
    };

    let start = NaiveDate::from_ymd_opt(year, month, 1);
    let end = next_year.and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1));

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(ReportError::invalid(format!("year {} is out of range", year))),
    }
}

/// `[Jan 1, Jan 1 of next year)`
pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate), ReportError> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1);
    let end = year
        .checked_add(1)
        .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1));

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(ReportError::invalid(format!("year {} is out of range", year))),
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ReportError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ReportError::invalid(format!("missing parameter '{}'", name))),
    }
}

fn parse_date(raw: &str, name: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        ReportError::invalid(format!(
            "parameter '{}' must be a YYYY-MM-DD date, got '{}'",
            name, raw
        ))
    })
}
