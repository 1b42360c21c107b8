use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PrintJob — One recorded print request
// ---------------------------------------------------------------------------

/// One recorded print request imported from the MainTop logs.
///
/// The wire field names are French (`quantite`, `largeur`, `hauteur`);
/// dimensions are millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub id: i64,
    #[serde(rename = "quantite")]
    pub quantity: u32,
    #[serde(rename = "largeur")]
    pub width: f64,
    #[serde(rename = "hauteur")]
    pub height: f64,
    pub mode: String,
}

impl PrintJob {
    /// Printed surface of a single copy, in mm².
    pub fn surface(&self) -> f64 {
        self.width * self.height
    }
}
