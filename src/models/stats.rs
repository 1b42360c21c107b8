use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DashboardStats — Aggregated metrics for the dashboard page
// ---------------------------------------------------------------------------

/// Headline metrics plus the monthly line-chart series.
///
/// Every field defaults to its zero value; the backend omits fields it has
/// no data for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_impressions: u64,
    /// Total ink used, in ml (`totalEncreUtilisee` on the wire).
    #[serde(default, rename = "totalEncreUtilisee")]
    pub total_ink_used: f64,
    #[serde(default)]
    pub total_copies: u64,
    #[serde(default)]
    pub monthly_data: Vec<MonthlyPoint>,
}

// ---------------------------------------------------------------------------
// MonthlyPoint — One point of the monthly chart series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub total: f64,
}
