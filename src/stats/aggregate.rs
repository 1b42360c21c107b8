//! Pure aggregation over fetched print jobs and the active price list.
//!
//! Every function here is total: empty inputs yield zero totals and an empty
//! summary, and no lookup can fail. Fetch failures are absorbed upstream by
//! degrading to empty collections, so this layer has no error states.

use log::debug;

use crate::models::{PrintJob, PrintPrice};

// ---------------------------------------------------------------------------
// PriceBook
// ---------------------------------------------------------------------------

/// Price lookup table for cost computation.
///
/// Holds the price entries in their source order. When duplicate modes are
/// present, the first entry wins, mirroring the insertion order of the
/// backend price list.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    entries: Vec<PrintPrice>,
}

impl PriceBook {
    /// Build a price book from entries the caller has already filtered.
    pub fn new(entries: Vec<PrintPrice>) -> Self {
        Self { entries }
    }

    /// Build a price book keeping only active entries.
    pub fn from_active(entries: impl IntoIterator<Item = PrintPrice>) -> Self {
        Self {
            entries: entries.into_iter().filter(|p| p.is_active).collect(),
        }
    }

    /// The entries backing this book, in lookup order.
    pub fn entries(&self) -> &[PrintPrice] {
        &self.entries
    }

    /// Unit price for a mode, in currency units per mm².
    ///
    /// An unpriced mode costs 0; jobs in such a mode contribute nothing to
    /// any total.
    pub fn unit_price(&self, mode: &str) -> f64 {
        match self.entries.iter().find(|p| p.mode == mode) {
            Some(entry) => entry.price_per_square_meter,
            None => {
                debug!("no price entry for mode {:?}, using 0", mode);
                0.0
            }
        }
    }

    /// Cost of one job: unit price × surface × copies. No rounding.
    pub fn job_cost(&self, job: &PrintJob) -> f64 {
        self.unit_price(&job.mode) * job.surface() * f64::from(job.quantity)
    }

    /// Summed cost of a job collection.
    pub fn total_cost(&self, jobs: &[PrintJob]) -> f64 {
        jobs.iter().map(|job| self.job_cost(job)).sum()
    }
}

// ---------------------------------------------------------------------------
// Totals and grouping
// ---------------------------------------------------------------------------

/// Summed copy count of a job collection.
pub fn total_copies(jobs: &[PrintJob]) -> u64 {
    jobs.iter().map(|job| u64::from(job.quantity)).sum()
}

/// One group of the daily summary: all jobs sharing dimensions and mode.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SummaryGroup {
    pub width: f64,
    pub height: f64,
    pub mode: String,
    pub copies: u64,
}

/// Group jobs by the literal (width, height, mode) triple, summing copies.
///
/// Groups keep the insertion order of their first occurrence. Dimensions
/// compare with plain `f64` equality; no tolerance is applied.
pub fn grouped_summary(jobs: &[PrintJob]) -> Vec<SummaryGroup> {
    let mut groups: Vec<SummaryGroup> = Vec::new();
    for job in jobs {
        let existing = groups
            .iter_mut()
            .find(|g| g.width == job.width && g.height == job.height && g.mode == job.mode);
        match existing {
            Some(group) => group.copies += u64::from(job.quantity),
            None => groups.push(SummaryGroup {
                width: job.width,
                height: job.height,
                mode: job.mode.clone(),
                copies: u64::from(job.quantity),
            }),
        }
    }
    groups
}
