use super::*;
use fleet::tracking::MAX_DRIFT_DEG;
use fleet::{Catalog, Category};

fn records() -> &'static [EquipmentRecord] {
    Catalog::standard().records()
}

fn state() -> MapViewState {
    MapViewState::new(records(), 7)
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn new_state_shows_every_record() {
    let state = state();
    assert_eq!(state.shown(true).len(), 6);
    assert_eq!(state.visible_markers(true).len(), 6);
    assert_eq!(state.widget, WidgetStatus::Loading);
    assert!(state.selected_marker.is_none());
}

#[test]
fn local_filter_narrows_markers_and_strip() {
    let mut state = state();
    state.set_local_filter(CategoryFilter::Only(Category::Excavator));

    let markers = state.visible_markers(true);
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| [EquipmentId(1), EquipmentId(4)].contains(&m.id)));

    let strip = state.strip(true);
    assert_eq!(strip.len(), 1);
    assert_eq!(strip[0].id, EquipmentId(1));
}

#[test]
fn disabled_local_filter_shows_everything() {
    let mut state = state();
    state.set_local_filter(CategoryFilter::Only(Category::Loader));
    assert_eq!(state.shown(false).len(), 6);
    assert_eq!(state.strip(false).len(), 4);
}

#[test]
fn local_filter_composes_with_upstream_filter() {
    let excavators: Vec<EquipmentRecord> =
        records().iter().filter(|r| r.category == Category::Excavator).cloned().collect();
    let mut state = MapViewState::new(&excavators, 1);
    state.set_local_filter(CategoryFilter::Only(Category::Loader));
    assert!(state.shown(true).is_empty());
    state.set_local_filter(CategoryFilter::All);
    assert_eq!(state.shown(true).len(), 2);
}

#[test]
fn counts_follow_live_copy() {
    let state = state();
    let counts = state.counts();
    assert_eq!(counts[0], (CategoryFilter::All, 4));
    assert_eq!(counts[1], (CategoryFilter::Only(Category::Excavator), 1));
}

// =============================================================
// Live tracking
// =============================================================

#[test]
fn ticks_stay_within_drift_bound() {
    let mut state = state();
    for _ in 0..20 {
        state.tick();
    }
    for (live, canonical) in state.live.records().iter().zip(records()) {
        assert!((live.latitude - canonical.latitude).abs() <= MAX_DRIFT_DEG + 1e-12);
        assert!((live.longitude - canonical.longitude).abs() <= MAX_DRIFT_DEG + 1e-12);
    }
    assert_eq!(state.live.ticks(), 20);
}

#[test]
fn tick_moves_markers_but_not_catalog() {
    let before = records().to_vec();
    let mut state = state();
    state.tick();
    let moved = state.visible_markers(true);
    assert!(moved.iter().zip(&before).any(|(m, r)| m.coordinates != r.coordinates()));
    assert_eq!(records(), before.as_slice());
}

#[test]
fn same_seed_gives_same_drift() {
    let mut a = MapViewState::new(records(), 42);
    let mut b = MapViewState::new(records(), 42);
    a.tick();
    b.tick();
    assert_eq!(a.live, b.live);
}

#[test]
fn reset_discards_drift_and_keeps_filter() {
    let mut state = state();
    state.set_local_filter(CategoryFilter::Only(Category::Bulldozer));
    state.tick();
    state.reset(records());
    assert_eq!(state.live.records(), records());
    assert_eq!(state.live.ticks(), 0);
    assert_eq!(state.local_filter, CategoryFilter::Only(Category::Bulldozer));
}

// =============================================================
// Selection and widget status
// =============================================================

#[test]
fn mark_selected_ignores_unknown_ids() {
    let mut state = state();
    state.mark_selected(EquipmentId(3));
    assert_eq!(state.selected_marker, Some(EquipmentId(3)));
    state.mark_selected(EquipmentId(99));
    assert_eq!(state.selected_marker, Some(EquipmentId(3)));
}

#[test]
fn reset_clears_selection_that_left_the_list() {
    let mut state = state();
    state.mark_selected(EquipmentId(3));
    let subset: Vec<EquipmentRecord> = records().iter().filter(|r| r.id != EquipmentId(3)).cloned().collect();
    state.reset(&subset);
    assert!(state.selected_marker.is_none());
}

#[test]
fn widget_status_transitions() {
    let mut state = state();
    state.widget_ready();
    assert_eq!(state.widget, WidgetStatus::Ready);
    state.widget_failed("no credential");
    assert_eq!(state.widget, WidgetStatus::Failed("no credential".to_owned()));
}
