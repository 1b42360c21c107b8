//! Printrack SDK for Rust.
//!
//! Typed client for the Printrack print-shop backend REST API. Query
//! interfaces fetch JSON over HTTP; the [`stats`] module joins the fetched
//! print jobs with the active price list and computes daily and monthly
//! statistics.
//!
//! # Quick start
//!
//! ```no_run
//! use printrack_sdk::PrintrackSdk;
//!
//! let sdk = PrintrackSdk::builder().build();
//!
//! // Daily + monthly statistics for a date
//! let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let report = sdk.statistics().report(date);
//! println!("{} copies, {} FCFA", report.daily.total_copies, report.daily.total_cost);
//!
//! // Authenticated dashboard metrics
//! sdk.login("admin@example.com", "secret").unwrap();
//! let stats = sdk.dashboard().stats().unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod stats;

#[cfg(feature = "async")]
pub use async_client::AsyncPrintrackSdk;
pub use connection::Connection;
pub use error::{PrintrackError, Result};
pub use stats::{PriceBook, StatisticsReport, StatisticsSession};

use std::fmt;
use std::time::Duration;

use models::LoginResponse;

// ---------------------------------------------------------------------------
// PrintrackSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PrintrackSdk`] instance.
///
/// Use [`PrintrackSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PrintrackSdkBuilder::build).
pub struct PrintrackSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    token: Option<String>,
}

impl Default for PrintrackSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

impl PrintrackSdkBuilder {
    /// Set the backend base URL.
    ///
    /// Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Install a bearer token up front, e.g. one obtained out of band.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build the SDK. No network traffic happens until the first query.
    pub fn build(self) -> PrintrackSdk {
        let base_url = self
            .base_url
            .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());
        PrintrackSdk {
            conn: Connection::new(base_url, self.timeout, self.token),
        }
    }
}

// ---------------------------------------------------------------------------
// PrintrackSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Printrack SDK.
///
/// Wraps a [`Connection`] and exposes domain-specific query interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`PrintrackSdk::builder()`].
pub struct PrintrackSdk {
    conn: Connection,
}

impl PrintrackSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PrintrackSdkBuilder {
        PrintrackSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the authentication interface.
    pub fn auth(&self) -> queries::auth::AuthQuery<'_> {
        queries::auth::AuthQuery::new(&self.conn)
    }

    /// Access the price-table query interface.
    pub fn prices(&self) -> queries::prices::PriceQuery<'_> {
        queries::prices::PriceQuery::new(&self.conn)
    }

    /// Access the print-job query interface.
    pub fn jobs(&self) -> queries::jobs::JobQuery<'_> {
        queries::jobs::JobQuery::new(&self.conn)
    }

    /// Access the statistics report interface.
    pub fn statistics(&self) -> queries::statistics::StatisticsQuery<'_> {
        queries::statistics::StatisticsQuery::new(&self.conn)
    }

    /// Access the dashboard metrics interface (requires a token).
    pub fn dashboard(&self) -> queries::dashboard::DashboardQuery<'_> {
        queries::dashboard::DashboardQuery::new(&self.conn)
    }

    /// Access the user-profile interface.
    pub fn profile(&self) -> queries::profile::ProfileQuery<'_> {
        queries::profile::ProfileQuery::new(&self.conn)
    }

    /// Access the settings interface.
    pub fn settings(&self) -> queries::settings::SettingsQuery<'_> {
        queries::settings::SettingsQuery::new(&self.conn)
    }

    // -- Session and utility methods ---------------------------------------

    /// Log in and install the returned token on this SDK.
    ///
    /// Subsequent requests carry the token as a bearer header. The token is
    /// held by the SDK instance, not in any global state.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self.auth().login(email, password)?;
        self.conn.set_token(Some(response.access_token.clone()));
        Ok(response)
    }

    /// Install or clear the bearer token directly.
    pub fn set_token(&self, token: Option<String>) {
        self.conn.set_token(token);
    }

    /// The currently installed bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.conn.token()
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PrintrackSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PrintrackSdk(base_url={}, authenticated={})",
            self.conn.base_url(),
            self.conn.token().is_some()
        )
    }
}
