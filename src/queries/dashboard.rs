//! Dashboard metrics (authenticated).

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::DashboardStats;

// ---------------------------------------------------------------------------
// DashboardQuery
// ---------------------------------------------------------------------------

pub struct DashboardQuery<'a> {
    conn: &'a Connection,
}

impl<'a> DashboardQuery<'a> {
    /// Create a new `DashboardQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Headline metrics and the monthly chart series.
    ///
    /// Requires a bearer token on the connection (install one via
    /// [`PrintrackSdk::login`](crate::PrintrackSdk::login) or
    /// [`set_token`](crate::PrintrackSdk::set_token)); without it the
    /// backend answers 401.
    pub fn stats(&self) -> Result<DashboardStats> {
        self.conn.get_json(config::DASHBOARD_STATS, &[])
    }
}
