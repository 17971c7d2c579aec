//! Catalog/map view controller state.
//!
//! DESIGN
//! ======
//! Only user choices live here: the active category filter, the active tab,
//! and the last selected record. Visible lists and badge counts are derived
//! on demand from `(records, filter)` through `fleet::view`, never stored.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use fleet::view;
use fleet::{Catalog, CategoryFilter, EquipmentId, EquipmentRecord, OrderError};

use super::order::OrderDialog;

/// Presentation of the equipment section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewTab {
    #[default]
    Catalog,
    Map,
}

impl ViewTab {
    /// Section heading for the tab.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Catalog => "Каталог техники",
            Self::Map => "Карта спецтехники",
        }
    }
}

/// Selection state owned by the catalog page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub filter: CategoryFilter,
    pub tab: ViewTab,
    pub selected: Option<EquipmentId>,
}

impl CatalogState {
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_active_tab(&mut self, tab: ViewTab) {
        self.tab = tab;
    }

    /// Records shown under the active filter.
    pub fn visible<'a>(&self, records: &'a [EquipmentRecord]) -> Vec<&'a EquipmentRecord> {
        view::visible(records, self.filter)
    }

    /// Available-count badges for every filter button. Independent of the
    /// active filter, so every badge stays visible while one is selected.
    pub fn counts(records: &[EquipmentRecord]) -> [(CategoryFilter, usize); 4] {
        view::category_counts(records)
    }
}

/// Select a record by id and open the order dialog for it.
///
/// Cards and map markers both land here, and the record is always resolved
/// against the canonical catalog, so a marker whose display position has
/// drifted selects exactly what the matching card would.
///
/// # Errors
///
/// [`OrderError::UnknownEquipment`] if the id is not in `catalog`, and
/// [`OrderError::Unavailable`] if the record is currently rented out. In
/// both cases neither the selection nor the dialog changes.
pub fn select_equipment(
    state: &mut CatalogState,
    dialog: &mut OrderDialog,
    catalog: &Catalog,
    id: EquipmentId,
) -> Result<(), OrderError> {
    let record = catalog.get(id).ok_or(OrderError::UnknownEquipment(id))?;
    if !record.available {
        return Err(OrderError::Unavailable(record.name.clone()));
    }
    state.selected = Some(id);
    dialog.open(record.clone());
    Ok(())
}
