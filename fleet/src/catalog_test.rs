use super::*;

fn sample(id: u32) -> EquipmentRecord {
    record(id, "Test", Category::Loader, 1_000, "Москва, ул. Тестовая 1", (55.0, 37.0), true, "test")
}

// =============================================================
// Standard catalog
// =============================================================

#[test]
fn standard_catalog_has_six_records() {
    assert_eq!(Catalog::standard().len(), 6);
    assert!(!Catalog::standard().is_empty());
}

#[test]
fn standard_catalog_passes_validation() {
    let validated = Catalog::new(standard_records()).expect("standard records are valid");
    assert_eq!(&validated, Catalog::standard());
    assert_eq!(Catalog::check_standard(), Ok(Catalog::standard()));
}

#[test]
fn standard_catalog_has_two_unavailable_records() {
    let busy: Vec<u32> = Catalog::standard()
        .records()
        .iter()
        .filter(|r| !r.available)
        .map(|r| r.id.0)
        .collect();
    assert_eq!(busy, vec![2, 4]);
}

#[test]
fn standard_catalog_glyph_follows_category() {
    for record in Catalog::standard().records() {
        assert_eq!(record.image, record.category.glyph());
    }
}

#[test]
fn get_finds_record_by_id() {
    let record = Catalog::standard().get(EquipmentId(3)).expect("record 3");
    assert_eq!(record.name, "Погрузчик JCB 3CX");
    assert_eq!(record.price, 8_000);
    assert!(Catalog::standard().get(EquipmentId(99)).is_none());
}

#[test]
fn coordinates_are_lat_lng_order() {
    let record = Catalog::standard().get(EquipmentId(1)).expect("record 1");
    assert_eq!(record.coordinates(), [55.751_244, 37.618_423]);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn new_rejects_duplicate_ids() {
    let err = Catalog::new(vec![sample(1), sample(2), sample(1)]).expect_err("duplicate id");
    assert_eq!(err, CatalogError::DuplicateId(EquipmentId(1)));
}

#[test]
fn new_rejects_non_finite_coordinates() {
    let mut bad = sample(7);
    bad.latitude = f64::NAN;
    let err = Catalog::new(vec![bad]).expect_err("nan latitude");
    assert!(matches!(err, CatalogError::InvalidCoordinates { id: EquipmentId(7), .. }));
}

#[test]
fn new_rejects_out_of_range_longitude() {
    let mut bad = sample(8);
    bad.longitude = 181.0;
    assert!(Catalog::new(vec![bad]).is_err());
}

#[test]
fn new_keeps_record_order() {
    let catalog = Catalog::new(vec![sample(3), sample(1), sample(2)]).expect("valid");
    let ids: Vec<u32> = catalog.records().iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn record_serializes_category_as_type() {
    let json = serde_json::to_value(sample(5)).expect("serialize");
    assert_eq!(json["type"], "loader");
    assert_eq!(json["id"], 5);
}
