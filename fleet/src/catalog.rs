//! Equipment records and the fixed rental catalog.
//!
//! DESIGN
//! ======
//! The catalog is defined once and never mutated for the lifetime of the
//! process. Anything that needs to move records around (the live-tracking
//! display copy) clones them out; see [`crate::tracking`].

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::category::Category;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Error returned by [`Catalog::new`] when a record set breaks an invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate equipment id: {0}")]
    DuplicateId(EquipmentId),
    #[error("equipment {id} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { id: EquipmentId, latitude: f64, longitude: f64 },
}

/// Stable identifier assigned when the catalog is defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentId(pub u32);

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One rentable machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: EquipmentId,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    /// Roubles per shift.
    pub price: u64,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub available: bool,
    /// Display glyph for cards and list rows.
    pub image: String,
    pub description: String,
}

impl EquipmentRecord {
    /// `[latitude, longitude]` in the order the map widget expects.
    #[must_use]
    pub fn coordinates(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// Ordered, id-unique sequence of equipment records.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    records: Vec<EquipmentRecord>,
}

static STANDARD: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(|| Catalog::new(standard_records()));
static EMPTY: Catalog = Catalog { records: Vec::new() };

impl Catalog {
    /// Build a catalog, checking id uniqueness and coordinate sanity.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] when two records share an id and
    /// [`CatalogError::InvalidCoordinates`] for non-finite or out-of-range
    /// coordinates.
    pub fn new(records: Vec<EquipmentRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if !valid_coordinates(record.latitude, record.longitude) {
                return Err(CatalogError::InvalidCoordinates {
                    id: record.id,
                    latitude: record.latitude,
                    longitude: record.longitude,
                });
            }
        }
        Ok(Self { records })
    }

    /// The fixed fleet offered by the rental service, validated through
    /// [`Catalog::new`]. Empty if validation failed; the host refuses to
    /// start in that case, see [`Catalog::check_standard`].
    #[must_use]
    pub fn standard() -> &'static Catalog {
        (*STANDARD).as_ref().unwrap_or(&EMPTY)
    }

    /// Validation outcome of the fixed fleet.
    ///
    /// # Errors
    ///
    /// Returns the [`CatalogError`] raised while building it.
    pub fn check_standard() -> Result<&'static Catalog, CatalogError> {
        (*STANDARD).as_ref().map_err(Clone::clone)
    }

    #[must_use]
    pub fn records(&self) -> &[EquipmentRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: EquipmentId) -> Option<&EquipmentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    name: &str,
    category: Category,
    price: u64,
    location: &str,
    (latitude, longitude): (f64, f64),
    available: bool,
    description: &str,
) -> EquipmentRecord {
    EquipmentRecord {
        id: EquipmentId(id),
        name: name.to_owned(),
        category,
        price,
        location: location.to_owned(),
        latitude,
        longitude,
        available,
        image: category.glyph().to_owned(),
        description: description.to_owned(),
    }
}

pub(crate) fn standard_records() -> Vec<EquipmentRecord> {
    vec![
        record(
            1,
            "Экскаватор Caterpillar 320D",
            Category::Excavator,
            12_000,
            "Москва, ул. Строителей 15",
            (55.751_244, 37.618_423),
            true,
            "Гусеничный экскаватор, объем ковша 1.2 м³",
        ),
        record(
            2,
            "Бульдозер Komatsu D65",
            Category::Bulldozer,
            15_000,
            "Москва, пр-т Мира 88",
            (55.781_234, 37.638_423),
            false,
            "Мощный бульдозер для тяжелых работ",
        ),
        record(
            3,
            "Погрузчик JCB 3CX",
            Category::Loader,
            8_000,
            "Москва, ул. Рабочая 42",
            (55.731_244, 37.598_423),
            true,
            "Универсальный погрузчик с ковшом",
        ),
        record(
            4,
            "Экскаватор Hitachi ZX200",
            Category::Excavator,
            11_000,
            "Москва, ул. Промышленная 7",
            (55.771_244, 37.578_423),
            false,
            "Средний экскаватор для земляных работ",
        ),
        record(
            5,
            "Бульдозер Shantui SD16",
            Category::Bulldozer,
            13_500,
            "Москва, ул. Заводская 12",
            (55.741_244, 37.618_423),
            true,
            "Надежный бульдозер китайского производства",
        ),
        record(
            6,
            "Погрузчик Volvo L90",
            Category::Loader,
            9_500,
            "Москва, ул. Индустриальная 31",
            (55.761_244, 37.608_423),
            true,
            "Фронтальный погрузчик повышенной мощности",
        ),
    ]
}
