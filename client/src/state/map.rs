//! Map presentation adapter state.
//!
//! DESIGN
//! ======
//! The map view receives the records the main catalog filter lets through and
//! keeps its own `LiveFleet` display copy of them. A second, map-local
//! category filter narrows that copy further; the two filters compose but
//! neither writes the other. When the local filter is disabled by settings
//! it is treated as `All`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::map_view` owns one `MapViewState` per mount, drives `tick()`
//! from a `LiveTimer`, and pushes `visible_markers()` into the widget.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use fleet::marker::Marker;
use fleet::tracking::LiveFleet;
use fleet::view;
use fleet::{CategoryFilter, EquipmentId, EquipmentRecord};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Lifecycle of the external map widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WidgetStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct MapViewState {
    pub live: LiveFleet,
    pub local_filter: CategoryFilter,
    pub selected_marker: Option<EquipmentId>,
    pub widget: WidgetStatus,
    rng: SmallRng,
}

impl MapViewState {
    /// Fresh display copy of `records` with drift drawn from `seed`.
    pub fn new(records: &[EquipmentRecord], seed: u64) -> Self {
        Self {
            live: LiveFleet::from_records(records),
            local_filter: CategoryFilter::All,
            selected_marker: None,
            widget: WidgetStatus::Loading,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Replace the display copy after the upstream record list changed.
    /// Drift anchors move to the new records; the local filter survives.
    pub fn reset(&mut self, records: &[EquipmentRecord]) {
        self.live.reset(records);
        if self.selected_marker.is_some_and(|id| self.live.get(id).is_none()) {
            self.selected_marker = None;
        }
    }

    pub fn set_local_filter(&mut self, filter: CategoryFilter) {
        self.local_filter = filter;
    }

    /// One simulated position report.
    pub fn tick(&mut self) {
        self.live.tick(&mut self.rng);
    }

    fn effective_filter(&self, local_filter_enabled: bool) -> CategoryFilter {
        if local_filter_enabled { self.local_filter } else { CategoryFilter::All }
    }

    /// Live records passing the local filter.
    pub fn shown(&self, local_filter_enabled: bool) -> Vec<&EquipmentRecord> {
        view::visible(self.live.records(), self.effective_filter(local_filter_enabled))
    }

    /// Widget markers for every shown record, at its drifted position.
    pub fn visible_markers(&self, local_filter_enabled: bool) -> Vec<Marker> {
        self.shown(local_filter_enabled).into_iter().map(Marker::from_record).collect()
    }

    /// Bottom strip: shown records that can be ordered.
    pub fn strip(&self, local_filter_enabled: bool) -> Vec<&EquipmentRecord> {
        self.shown(local_filter_enabled).into_iter().filter(|r| r.available).collect()
    }

    /// Local filter badges, counted over the live copy.
    pub fn counts(&self) -> [(CategoryFilter, usize); 4] {
        view::category_counts(self.live.records())
    }

    /// Remember the marker last clicked so the strip can highlight it.
    pub fn mark_selected(&mut self, id: EquipmentId) {
        if self.live.get(id).is_some() {
            self.selected_marker = Some(id);
        }
    }

    pub fn widget_ready(&mut self) {
        self.widget = WidgetStatus::Ready;
    }

    pub fn widget_failed(&mut self, reason: impl Into<String>) {
        self.widget = WidgetStatus::Failed(reason.into());
    }
}
