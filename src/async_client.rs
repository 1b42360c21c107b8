//! Async wrapper around [`PrintrackSdk`] for use in async runtimes (Tokio).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! # use printrack_sdk::AsyncPrintrackSdk;
//! # async fn example() -> printrack_sdk::Result<()> {
//! let sdk = AsyncPrintrackSdk::builder().build().await?;
//!
//! // Run any sync SDK method via closure
//! let prices = sdk.run(|s| s.prices().active()).await?;
//!
//! // Convenience method for the statistics report
//! let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let report = sdk.statistics_report(date).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;

use crate::error::{PrintrackError, Result};
use crate::models::LoginResponse;
use crate::stats::{StatisticsReport, StatisticsSession};
use crate::PrintrackSdk;

// ---------------------------------------------------------------------------
// AsyncPrintrackSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPrintrackSdk`] instance.
pub struct AsyncPrintrackSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    token: Option<String>,
}

impl Default for AsyncPrintrackSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

impl AsyncPrintrackSdkBuilder {
    /// Set the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Install a bearer token up front.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build the async SDK.
    ///
    /// Construction runs on the blocking thread pool for symmetry with the
    /// other operations, although no network traffic happens yet.
    pub async fn build(self) -> Result<AsyncPrintrackSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = PrintrackSdk::builder().timeout(self.timeout);
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(token) = self.token {
                builder = builder.token(token);
            }
            Ok(AsyncPrintrackSdk {
                inner: Arc::new(Mutex::new(builder.build())),
            })
        })
        .await
        .map_err(|e| PrintrackError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPrintrackSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`PrintrackSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`PrintrackSdk`] is
/// protected by a [`Mutex`] since its connection uses `RefCell` internally.
pub struct AsyncPrintrackSdk {
    inner: Arc<Mutex<PrintrackSdk>>,
}

impl AsyncPrintrackSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncPrintrackSdkBuilder {
        AsyncPrintrackSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&PrintrackSdk` reference and should return a
    /// `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use printrack_sdk::AsyncPrintrackSdk;
    /// # async fn example() -> printrack_sdk::Result<()> {
    /// # let sdk = AsyncPrintrackSdk::builder().build().await?;
    /// let path = sdk.run(|s| s.settings().main_top_path()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PrintrackSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| PrintrackError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| PrintrackError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Log in and install the token, asynchronously.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let email = email.to_string();
        let password = password.to_string();
        self.run(move |s| s.login(&email, &password)).await
    }

    /// Build the statistics report for `date`, asynchronously.
    pub async fn statistics_report(&self, date: NaiveDate) -> Result<StatisticsReport> {
        self.run(move |s| Ok(s.statistics().report(date))).await
    }

    /// Run one session refresh cycle for `date`, asynchronously.
    ///
    /// Returns `Ok(None)` when the result was discarded because a newer
    /// selection superseded this cycle.
    pub async fn refresh_statistics(
        &self,
        session: Arc<StatisticsSession>,
        date: NaiveDate,
    ) -> Result<Option<StatisticsReport>> {
        self.run(move |s| Ok(s.statistics().refresh(&session, date)))
            .await
    }

    /// Consume the wrapper and release the inner SDK.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| PrintrackError::InvalidArgument("SDK lock poisoned".into()))?;
            drop(sdk);
            Ok(())
        })
        .await
        .map_err(|e| PrintrackError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
