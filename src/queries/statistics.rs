//! Statistics report assembly: the client-side join of jobs and prices.

use chrono::{Datelike, NaiveDate};

use crate::connection::Connection;
use crate::stats::{PriceBook, StatisticsReport, StatisticsSession};

use super::jobs::JobQuery;
use super::prices::PriceQuery;

// ---------------------------------------------------------------------------
// StatisticsQuery
// ---------------------------------------------------------------------------

/// Fetches the price list and both job collections for a selection date and
/// aggregates them into a [`StatisticsReport`].
pub struct StatisticsQuery<'a> {
    conn: &'a Connection,
}

impl<'a> StatisticsQuery<'a> {
    /// Create a new `StatisticsQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Build the report for `date`.
    ///
    /// Issues three fetches: active prices, the day's jobs, and the month's
    /// jobs (the month being `date`'s year/month). Each fetch independently
    /// degrades to an empty collection on any failure, and the aggregation
    /// itself is total, so this never fails — at worst it returns an
    /// all-zero report.
    pub fn report(&self, date: NaiveDate) -> StatisticsReport {
        let prices = PriceBook::new(PriceQuery::new(self.conn).active_or_empty());
        let daily_jobs = JobQuery::new(self.conn).by_date_or_empty(date);
        let monthly_jobs =
            JobQuery::new(self.conn).by_month_or_empty(date.year(), date.month());
        StatisticsReport::build(date, daily_jobs, monthly_jobs, &prices)
    }

    /// One full refresh cycle against a session: select, fetch, commit.
    ///
    /// Returns the report when it was committed, or `None` when a newer
    /// selection superseded this cycle while the fetches were in flight and
    /// the result was discarded.
    pub fn refresh(
        &self,
        session: &StatisticsSession,
        date: NaiveDate,
    ) -> Option<StatisticsReport> {
        let token = session.select();
        let report = self.report(date);
        if session.commit(token, report.clone()) {
            Some(report)
        } else {
            None
        }
    }
}
