//! Daily and monthly statistics reports for a selection date.
//!
//! The daily and monthly totals are computed over independently fetched job
//! collections; the monthly figures are never derived by summing dailies.
//! Which jobs belong to a day or month is decided by the backend queries.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::PrintJob;
use super::aggregate::{grouped_summary, total_copies, PriceBook};

// ---------------------------------------------------------------------------
// SummaryRow
// ---------------------------------------------------------------------------

/// One line of the daily summary list, with the group's cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub width: f64,
    pub height: f64,
    pub mode: String,
    pub copies: u64,
    pub cost: f64,
}

// ---------------------------------------------------------------------------
// DailyReport
// ---------------------------------------------------------------------------

/// Statistics over the jobs recorded on one date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub date: NaiveDate,
    pub jobs: Vec<PrintJob>,
    pub total_copies: u64,
    pub total_cost: f64,
    pub summary: Vec<SummaryRow>,
}

impl DailyReport {
    /// Aggregate `jobs` under `prices` for `date`.
    pub fn build(date: NaiveDate, jobs: Vec<PrintJob>, prices: &PriceBook) -> Self {
        let summary = grouped_summary(&jobs)
            .into_iter()
            .map(|g| {
                let cost =
                    prices.unit_price(&g.mode) * g.width * g.height * g.copies as f64;
                SummaryRow {
                    width: g.width,
                    height: g.height,
                    mode: g.mode,
                    copies: g.copies,
                    cost,
                }
            })
            .collect();
        Self {
            date,
            total_copies: total_copies(&jobs),
            total_cost: prices.total_cost(&jobs),
            summary,
            jobs,
        }
    }
}

// ---------------------------------------------------------------------------
// MonthlyReport
// ---------------------------------------------------------------------------

/// Copy and cost totals over the jobs of one calendar month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub total_copies: u64,
    pub total_cost: f64,
}

impl MonthlyReport {
    /// Aggregate the month's `jobs` under `prices`.
    pub fn build(year: i32, month: u32, jobs: &[PrintJob], prices: &PriceBook) -> Self {
        Self {
            year,
            month,
            total_copies: total_copies(jobs),
            total_cost: prices.total_cost(jobs),
        }
    }
}

// ---------------------------------------------------------------------------
// StatisticsReport
// ---------------------------------------------------------------------------

/// Combined daily and monthly statistics for one selection date.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    pub daily: DailyReport,
    pub monthly: MonthlyReport,
}

impl StatisticsReport {
    /// Build both reports from the two job collections fetched for `date`.
    pub fn build(
        date: NaiveDate,
        daily_jobs: Vec<PrintJob>,
        monthly_jobs: Vec<PrintJob>,
        prices: &PriceBook,
    ) -> Self {
        Self {
            daily: DailyReport::build(date, daily_jobs, prices),
            monthly: MonthlyReport::build(date.year(), date.month(), &monthly_jobs, prices),
        }
    }
}
