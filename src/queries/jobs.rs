//! Print-job queries against the MainTop import endpoints.

use chrono::NaiveDate;

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::PrintJob;

// ---------------------------------------------------------------------------
// JobQuery
// ---------------------------------------------------------------------------

/// Query interface for recorded print jobs.
///
/// Day and month membership is decided by the backend queries; the SDK only
/// formats the parameters and never re-checks the returned jobs against the
/// requested period.
pub struct JobQuery<'a> {
    conn: &'a Connection,
}

impl<'a> JobQuery<'a> {
    /// Create a new `JobQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Jobs recorded on `date`.
    pub fn by_date(&self, date: NaiveDate) -> Result<Vec<PrintJob>> {
        self.conn
            .get_list(config::JOBS_BY_DATE, &date_query(date))
    }

    /// Jobs recorded during the given calendar month.
    pub fn by_month(&self, year: i32, month: u32) -> Result<Vec<PrintJob>> {
        self.conn
            .get_list(config::JOBS_BY_MONTH, &month_query(year, month))
    }

    /// Like [`by_date`](Self::by_date), degrading failures to an empty list.
    pub fn by_date_or_empty(&self, date: NaiveDate) -> Vec<PrintJob> {
        self.conn
            .get_list_or_empty(config::JOBS_BY_DATE, &date_query(date))
    }

    /// Like [`by_month`](Self::by_month), degrading failures to an empty list.
    pub fn by_month_or_empty(&self, year: i32, month: u32) -> Vec<PrintJob> {
        self.conn
            .get_list_or_empty(config::JOBS_BY_MONTH, &month_query(year, month))
    }
}

fn date_query(date: NaiveDate) -> [(&'static str, String); 1] {
    [("date", date.format("%Y-%m-%d").to_string())]
}

fn month_query(year: i32, month: u32) -> [(&'static str, String); 2] {
    [("year", year.to_string()), ("month", format!("{:02}", month))]
}
