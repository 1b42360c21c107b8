//! Query modules for the Printrack SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes typed methods
//! for one domain of the REST API.

pub mod auth;
pub mod dashboard;
pub mod jobs;
pub mod prices;
pub mod profile;
pub mod settings;
pub mod statistics;

pub use auth::AuthQuery;
pub use dashboard::DashboardQuery;
pub use jobs::JobQuery;
pub use prices::PriceQuery;
pub use profile::ProfileQuery;
pub use settings::SettingsQuery;
pub use statistics::StatisticsQuery;
