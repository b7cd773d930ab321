//! Day-by-day challenge progress
//!
//! [`ProgressController`] owns the in-memory copy of the stored
//! [`ProgressRecord`] and writes it through on every change.

use tracing::{debug, info};

use crate::store::{PROGRESS_KEY, Storage};
use crate::{ProgressRecord, WEEK_SLOTS};

/// Percentage added to the current slot per completed day
pub const DAILY_INCREMENT: u8 = 20;

/// Bars shown before any challenge has been assigned
pub const PLACEHOLDER_SERIES: [u8; WEEK_SLOTS] = [20, 40, 60, 40, 80, 20, 0];

#[derive(Debug)]
pub struct ProgressController {
    storage: Storage,
    record: ProgressRecord,
}

impl ProgressController {
    /// Load the stored record, or an empty one (`target == 0`) if there is none
    pub fn load(storage: Storage) -> Self {
        let record = storage.read(PROGRESS_KEY, ProgressRecord::default());
        Self { storage, record }
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Re-read from storage, picking up changes made through another handle
    pub fn reload(&mut self) {
        self.record = self.storage.read(PROGRESS_KEY, ProgressRecord::default());
    }

    /// Overwrite the record, e.g. after onboarding assigned a new challenge
    pub fn replace(&mut self, record: ProgressRecord) {
        self.record = record;
        self.persist();
    }

    /// Mark the current day as done
    ///
    /// The write slot is `daily.len() % 7`, which stays at slot 0 once the week
    /// view holds all seven entries. Both counters saturate: the slot at 100 and
    /// `days` at `target`. Without a challenge (`target == 0`) the slot still
    /// fills while `days` stays at 0.
    pub fn complete_today(&mut self) -> &ProgressRecord {
        let slot = self.record.daily.len() % WEEK_SLOTS;
        if self.record.daily.len() <= slot {
            self.record.daily.resize(slot + 1, 0);
        }

        let value = &mut self.record.daily[slot];
        *value = value.saturating_add(DAILY_INCREMENT).min(100);
        self.record.days = self.record.target.min(self.record.days.saturating_add(1));

        if self.record.has_challenge() && self.record.days == self.record.target {
            info!(target_days = self.record.target, "Challenge complete");
        } else {
            debug!(days = self.record.days, slot, "Marked day complete");
        }

        self.persist();
        &self.record
    }

    /// Challenge completion as a percentage; 0 without a challenge
    pub fn percent_complete(&self) -> f64 {
        self.record.percent_complete()
    }

    /// Data for the daily bar chart
    pub fn chart_series(&self) -> Vec<u8> {
        if self.record.daily.is_empty() {
            PLACEHOLDER_SERIES.to_vec()
        } else {
            self.record.daily.clone()
        }
    }

    fn persist(&self) {
        self.storage.write(PROGRESS_KEY, &self.record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    fn controller_with(record: ProgressRecord) -> (Storage, ProgressController) {
        let storage = Storage::in_memory();
        storage.write(PROGRESS_KEY, &record);
        let controller = ProgressController::load(storage.clone());
        (storage, controller)
    }

    #[test]
    fn test_defaults_without_stored_record() {
        let controller = ProgressController::load(Storage::in_memory());
        assert_eq!(controller.record(), &ProgressRecord::default());
        assert_eq!(controller.percent_complete(), 0.0);
        assert_eq!(controller.chart_series(), PLACEHOLDER_SERIES.to_vec());
    }

    #[test]
    fn test_complete_today_saturates() {
        let (_, mut controller) = controller_with(ProgressRecord::started(7));

        let mut slot_values = Vec::new();
        for _ in 0..10 {
            slot_values.push(controller.complete_today().daily[0]);
        }

        assert_eq!(slot_values, [20, 40, 60, 80, 100, 100, 100, 100, 100, 100]);
        assert_eq!(controller.record().days, 7);
        assert_eq!(controller.record().daily[1..], [0; 6]);
        assert!((controller.percent_complete() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_slot_stays_pinned_at_zero() {
        let (_, mut controller) = controller_with(ProgressRecord::started(21));
        controller.complete_today();
        controller.complete_today();

        assert_eq!(controller.record().daily, vec![40, 0, 0, 0, 0, 0, 0]);
        assert_eq!(controller.record().days, 2);
    }

    #[test]
    fn test_without_challenge_days_stay_zero() {
        let (_, mut controller) = controller_with(ProgressRecord::default());
        controller.complete_today();
        controller.complete_today();

        // An empty series grows by one slot per call until it holds a full week
        assert_eq!(controller.record().days, 0);
        assert_eq!(controller.record().daily, vec![20, 20]);
        assert_eq!(controller.percent_complete(), 0.0);
    }

    #[test]
    fn test_short_series_fills_gap_with_zeros() {
        let (_, mut controller) = controller_with(ProgressRecord {
            days: 0,
            target: 7,
            daily: vec![60, 60, 60],
        });
        controller.complete_today();
        assert_eq!(controller.record().daily, vec![60, 60, 60, 20]);
    }

    #[test]
    fn test_changes_are_written_through() {
        let (storage, mut controller) = controller_with(ProgressRecord::started(14));
        controller.complete_today();

        let stored: ProgressRecord = storage.read(PROGRESS_KEY, ProgressRecord::default());
        assert_eq!(stored.days, 1);
        assert_eq!(stored.daily[0], 20);
    }

    #[test]
    fn test_rejected_writes_keep_memory_state() {
        let storage = Storage::new(MemoryBackend::with_quota(0));
        let mut controller = ProgressController::load(storage);
        controller.replace(ProgressRecord::started(7));
        controller.complete_today();

        assert_eq!(controller.record().days, 1);
        controller.reload();
        assert_eq!(controller.record(), &ProgressRecord::default());
    }

    #[test]
    fn test_reload_sees_external_changes() {
        let (storage, mut controller) = controller_with(ProgressRecord::default());
        storage.write(PROGRESS_KEY, &ProgressRecord::started(21));

        controller.reload();
        assert_eq!(controller.record().target, 21);
    }
}
