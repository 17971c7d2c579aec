use super::*;
use fleet::{Catalog, EquipmentId};

fn excavator() -> EquipmentRecord {
    Catalog::standard().get(EquipmentId(1)).cloned().expect("record 1")
}

fn open_dialog() -> OrderDialog {
    let mut dialog = OrderDialog::default();
    dialog.open(excavator());
    dialog
}

fn fill_required(dialog: &mut OrderDialog) {
    dialog.edit(OrderField::RenterName, "Иван Иванов");
    dialog.edit(OrderField::Phone, "+7 (999) 123-45-67");
    dialog.edit(OrderField::StartDate, "2024-06-01");
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn dialog_starts_closed() {
    let dialog = OrderDialog::default();
    assert!(!dialog.is_open());
    assert!(dialog.equipment().is_none());
    assert!(dialog.quote().is_none());
}

#[test]
fn open_binds_record_with_default_form() {
    let dialog = open_dialog();
    assert!(dialog.is_open());
    assert_eq!(dialog.form(), Some(&OrderForm::default()));
    assert_eq!(dialog.field(OrderField::Duration), "1");
}

#[test]
fn cancel_closes_and_discards_edits() {
    let mut dialog = open_dialog();
    dialog.edit(OrderField::RenterName, "Иван");
    dialog.cancel();
    assert_eq!(dialog, OrderDialog::Closed);

    dialog.open(excavator());
    assert_eq!(dialog.field(OrderField::RenterName), "");
}

#[test]
fn edit_is_ignored_when_closed() {
    let mut dialog = OrderDialog::default();
    dialog.edit(OrderField::Phone, "123");
    assert_eq!(dialog, OrderDialog::Closed);
    assert_eq!(dialog.field(OrderField::Phone), "");
}

// =============================================================
// Pricing
// =============================================================

#[test]
fn quote_tracks_duration_edits() {
    let mut dialog = open_dialog();
    dialog.edit(OrderField::Duration, "3");
    assert_eq!(dialog.quote().map(|q| q.total), Some(36_000));

    dialog.edit(OrderField::Duration, "");
    assert_eq!(dialog.quote().map(|q| q.total), Some(12_000));
    assert_eq!(dialog.quote().map(|q| q.shifts), Some(1));
}

#[test]
fn total_label_formats_rubles() {
    let mut dialog = open_dialog();
    dialog.edit(OrderField::Duration, "3");
    assert_eq!(total_label(dialog.quote()), "36\u{a0}000\u{a0}₽");
    assert_eq!(total_label(None), "0\u{a0}₽");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_with_blank_field_keeps_dialog_open() {
    for field in OrderField::REQUIRED {
        let mut dialog = open_dialog();
        fill_required(&mut dialog);
        dialog.edit(field, "");
        let before = dialog.clone();

        let err = dialog.submit().expect_err("blank required field");
        assert_eq!(err, OrderError::MissingFields(vec![field]));
        assert_eq!(dialog, before);
        assert_eq!(error_notice(&err), MISSING_FIELDS_NOTICE);
    }
}

#[test]
fn submit_success_closes_and_names_equipment() {
    let mut dialog = open_dialog();
    fill_required(&mut dialog);
    dialog.edit(OrderField::Duration, "2");

    let confirmation = dialog.submit().expect("valid order");
    assert!(!dialog.is_open());
    assert_eq!(confirmation.message(), "Заказ на Экскаватор Caterpillar 320D оформлен!");
    assert_eq!(confirmation.total, 24_000);
    assert_eq!(confirmation.request.shifts, 2);
}

#[test]
fn submit_ignores_bad_duration() {
    let mut dialog = open_dialog();
    fill_required(&mut dialog);
    dialog.edit(OrderField::Duration, "-5");
    let confirmation = dialog.submit().expect("duration never blocks submit");
    assert_eq!(confirmation.total, 12_000);
}

#[test]
fn reopen_after_submit_starts_from_defaults() {
    let mut dialog = open_dialog();
    fill_required(&mut dialog);
    dialog.submit().expect("valid order");
    dialog.open(excavator());
    assert_eq!(dialog.form(), Some(&OrderForm::default()));
}

#[test]
fn submit_when_closed_reports_no_selection() {
    let mut dialog = OrderDialog::default();
    assert_eq!(dialog.submit(), Err(OrderError::NoSelection));
}

#[test]
fn error_notices_are_user_facing() {
    assert_eq!(error_notice(&OrderError::Unavailable("Бульдозер".to_owned())), "Бульдозер сейчас занят");
    assert_eq!(error_notice(&OrderError::NoSelection), "Выберите технику для заказа");
}

#[test]
fn escape_cancels_an_open_dialog() {
    let mut dialog = open_dialog();
    for key in ["Enter", "Esc", "escape", "Tab"] {
        assert!(!is_cancel_key(key), "{key}");
    }
    assert!(is_cancel_key("Escape"));
    dialog.cancel();
    assert!(!dialog.is_open());
}
