use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PrintPrice — Configured price for a print mode
// ---------------------------------------------------------------------------

/// Configured price for a print mode.
///
/// Only entries with `is_active` participate in cost computation. The
/// settings endpoints omit `isActive` in some payloads, hence the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintPrice {
    pub mode: String,
    /// Price per mm² of printed surface. The wire name says "square meter"
    /// but the backend stores and interprets the value per mm².
    pub price_per_square_meter: f64,
    #[serde(default)]
    pub is_active: bool,
}
