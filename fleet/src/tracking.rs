//! Simulated live positions for the map view.
//!
//! DESIGN
//! ======
//! `LiveFleet` is a display copy of catalog records owned by one map view.
//! Each tick places every record at its anchor (the coordinates the copy was
//! taken with) plus an independent uniform offset in
//! `[-MAX_DRIFT_DEG, MAX_DRIFT_DEG]` per axis. Offsets never accumulate, so a
//! displayed marker stays within the bound of its catalog position however
//! long the map is open. The catalog the copy came from is never touched.
//!
//! The timer that drives ticks lives in the UI layer; this module only knows
//! how far a single tick may move a marker and how often ticks are due.

use std::time::Duration;

use rand::Rng;

use crate::catalog::{EquipmentId, EquipmentRecord};

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

/// Interval between simulated position reports.
pub const TRACKING_PERIOD: Duration = Duration::from_secs(30);

/// Largest per-axis offset applied by one tick, in degrees.
pub const MAX_DRIFT_DEG: f64 = 0.0005;

/// Move one coordinate pair by an independent random offset per axis.
pub fn perturb<R: Rng>(rng: &mut R, [latitude, longitude]: [f64; 2]) -> [f64; 2] {
    [
        latitude + rng.random_range(-MAX_DRIFT_DEG..=MAX_DRIFT_DEG),
        longitude + rng.random_range(-MAX_DRIFT_DEG..=MAX_DRIFT_DEG),
    ]
}

/// Mutable display copy of a record list whose coordinates drift over time.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveFleet {
    records: Vec<EquipmentRecord>,
    anchors: Vec<[f64; 2]>,
    ticks: u64,
}

impl LiveFleet {
    #[must_use]
    pub fn from_records(records: &[EquipmentRecord]) -> Self {
        Self { records: records.to_vec(), anchors: anchors_of(records), ticks: 0 }
    }

    #[must_use]
    pub fn records(&self) -> &[EquipmentRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: EquipmentId) -> Option<&EquipmentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of ticks applied since the copy was taken.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply one simulated position report to every record.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        for (record, anchor) in self.records.iter_mut().zip(&self.anchors) {
            let [latitude, longitude] = perturb(rng, *anchor);
            record.latitude = latitude;
            record.longitude = longitude;
        }
        self.ticks += 1;
    }

    /// Replace the copy and its anchors with fresh records.
    pub fn reset(&mut self, records: &[EquipmentRecord]) {
        self.records = records.to_vec();
        self.anchors = anchors_of(records);
        self.ticks = 0;
    }
}

fn anchors_of(records: &[EquipmentRecord]) -> Vec<[f64; 2]> {
    records.iter().map(EquipmentRecord::coordinates).collect()
}
