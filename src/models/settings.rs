use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MainTopPath — Configured path to the MainTop log files
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainTopPath {
    #[serde(default)]
    pub main_top_path: String,
}

// ---------------------------------------------------------------------------
// DetectedPath — Result of automatic path detection
// ---------------------------------------------------------------------------

/// `detected_path` is absent when the backend could not locate an
/// installation automatically.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedPath {
    #[serde(default)]
    pub detected_path: Option<String>,
}
