//! Stale-response handling for the statistics refresh cycle.
//!
//! Changing the selection date while a fetch for the previous date is still
//! in flight must not let the old response overwrite newer data. Each call
//! to [`StatisticsSession::select`] starts a new cycle and invalidates every
//! token issued before it; committing a report with a stale token is a
//! no-op, so late responses are discarded instead of winning the race.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::debug;

use super::report::StatisticsReport;

/// Token tying a fetch cycle to the selection that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken {
    generation: u64,
}

/// Holds the latest committed report and the current cycle generation.
#[derive(Debug, Default)]
pub struct StatisticsSession {
    generation: AtomicU64,
    latest: Mutex<Option<StatisticsReport>>,
}

impl StatisticsSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch cycle, invalidating every previously issued token.
    pub fn select(&self) -> SelectionToken {
        let _guard = self.lock_latest();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SelectionToken { generation }
    }

    /// Whether `token` still belongs to the current cycle.
    pub fn is_current(&self, token: SelectionToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation
    }

    /// Store `report` unless its token went stale while fetching.
    ///
    /// Returns `true` when the report was applied.
    pub fn commit(&self, token: SelectionToken, report: StatisticsReport) -> bool {
        let mut latest = self.lock_latest();
        if self.generation.load(Ordering::SeqCst) != token.generation {
            debug!(
                "discarding stale statistics report for {}",
                report.daily.date
            );
            return false;
        }
        *latest = Some(report);
        true
    }

    /// The last committed report, if any cycle has completed.
    pub fn latest(&self) -> Option<StatisticsReport> {
        self.lock_latest().clone()
    }

    // Generation changes and report stores both happen under this lock, so
    // a commit can never interleave with the select that invalidates it.
    fn lock_latest(&self) -> std::sync::MutexGuard<'_, Option<StatisticsReport>> {
        self.latest.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::PriceBook;
    use chrono::NaiveDate;

    fn report(day: u32) -> StatisticsReport {
        let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
        StatisticsReport::build(date, Vec::new(), Vec::new(), &PriceBook::default())
    }

    #[test]
    fn commit_applies_current_token() {
        let session = StatisticsSession::new();
        let token = session.select();
        assert!(session.commit(token, report(1)));
        assert_eq!(session.latest().unwrap().daily.date.to_string(), "2026-03-01");
    }

    #[test]
    fn commit_discards_superseded_token() {
        let session = StatisticsSession::new();
        let stale = session.select();
        let current = session.select();

        // The slow response for the old date arrives after the new selection.
        assert!(!session.commit(stale, report(1)));
        assert!(session.latest().is_none());

        assert!(session.commit(current, report(2)));
        assert_eq!(session.latest().unwrap().daily.date.to_string(), "2026-03-02");
    }

    #[test]
    fn is_current_tracks_selection_changes() {
        let session = StatisticsSession::new();
        let first = session.select();
        assert!(session.is_current(first));
        let second = session.select();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }
}
