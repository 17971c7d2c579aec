use super::*;
use fleet::Category;

fn catalog() -> &'static Catalog {
    Catalog::standard()
}

// =============================================================
// CatalogState
// =============================================================

#[test]
fn catalog_state_defaults() {
    let state = CatalogState::default();
    assert_eq!(state.filter, CategoryFilter::All);
    assert_eq!(state.tab, ViewTab::Catalog);
    assert!(state.selected.is_none());
}

#[test]
fn view_tab_headings() {
    assert_eq!(ViewTab::Catalog.heading(), "Каталог техники");
    assert_eq!(ViewTab::Map.heading(), "Карта спецтехники");
}

#[test]
fn set_active_tab_switches_presentation_only() {
    let mut state = CatalogState::default();
    state.set_category_filter(CategoryFilter::Only(Category::Loader));
    state.set_active_tab(ViewTab::Map);
    assert_eq!(state.tab, ViewTab::Map);
    assert_eq!(state.filter, CategoryFilter::Only(Category::Loader));
    assert!(state.selected.is_none());
}

#[test]
fn visible_follows_filter() {
    let mut state = CatalogState::default();
    assert_eq!(state.visible(catalog().records()).len(), 6);

    state.set_category_filter(CategoryFilter::Only(Category::Excavator));
    let visible = state.visible(catalog().records());
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|r| r.category == Category::Excavator));
}

#[test]
fn counts_badges_for_excavator_scenario() {
    let mut state = CatalogState::default();
    state.set_category_filter(CategoryFilter::Only(Category::Excavator));
    let counts = CatalogState::counts(catalog().records());
    assert_eq!(counts[0], (CategoryFilter::All, 4));
    assert_eq!(counts[1], (CategoryFilter::Only(Category::Excavator), 1));
}

#[test]
fn repeated_filter_changes_are_idempotent() {
    let mut state = CatalogState::default();
    state.set_category_filter(CategoryFilter::Only(Category::Bulldozer));
    let first = (state.visible(catalog().records()).len(), CatalogState::counts(catalog().records()));
    state.set_category_filter(CategoryFilter::Only(Category::Bulldozer));
    let second = (state.visible(catalog().records()).len(), CatalogState::counts(catalog().records()));
    assert_eq!(first, second);
}

// =============================================================
// select_equipment
// =============================================================

#[test]
fn select_equipment_opens_dialog_for_record() {
    let mut state = CatalogState::default();
    let mut dialog = OrderDialog::default();
    select_equipment(&mut state, &mut dialog, catalog(), EquipmentId(1)).expect("available record");

    assert_eq!(state.selected, Some(EquipmentId(1)));
    assert!(dialog.is_open());
    assert_eq!(dialog.equipment().map(|r| r.name.as_str()), Some("Экскаватор Caterpillar 320D"));
}

#[test]
fn card_and_marker_selection_are_identical() {
    // A marker carries the drifted display copy; only its id reaches the controller.
    let mut from_card = (CatalogState::default(), OrderDialog::default());
    let mut from_marker = (CatalogState::default(), OrderDialog::default());

    select_equipment(&mut from_card.0, &mut from_card.1, catalog(), EquipmentId(6)).expect("card");
    select_equipment(&mut from_marker.0, &mut from_marker.1, catalog(), EquipmentId(6)).expect("marker");

    assert_eq!(from_card, from_marker);
    assert_eq!(from_card.1.equipment(), catalog().get(EquipmentId(6)));
}

#[test]
fn select_unavailable_record_is_rejected() {
    let mut state = CatalogState::default();
    let mut dialog = OrderDialog::default();
    let err = select_equipment(&mut state, &mut dialog, catalog(), EquipmentId(4)).expect_err("busy record");

    assert_eq!(err, OrderError::Unavailable("Экскаватор Hitachi ZX200".to_owned()));
    assert!(state.selected.is_none());
    assert!(!dialog.is_open());
}

#[test]
fn select_unknown_id_is_rejected() {
    let mut state = CatalogState::default();
    let mut dialog = OrderDialog::default();
    let err = select_equipment(&mut state, &mut dialog, catalog(), EquipmentId(42)).expect_err("unknown");
    assert_eq!(err, OrderError::UnknownEquipment(EquipmentId(42)));
    assert!(!dialog.is_open());
}

#[test]
fn reselecting_replaces_open_dialog_with_fresh_form() {
    let mut state = CatalogState::default();
    let mut dialog = OrderDialog::default();
    select_equipment(&mut state, &mut dialog, catalog(), EquipmentId(1)).expect("first");
    dialog.edit(fleet::OrderField::RenterName, "Иван");
    select_equipment(&mut state, &mut dialog, catalog(), EquipmentId(3)).expect("second");

    assert_eq!(state.selected, Some(EquipmentId(3)));
    assert_eq!(dialog.field(fleet::OrderField::RenterName), "");
}
