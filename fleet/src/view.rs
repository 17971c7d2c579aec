//! Derived views over a record slice: filtered subsets and availability counts.
//!
//! Every function here is a pure function of its inputs. Callers recompute
//! instead of caching, so a count can never lag behind the list it describes.

use crate::catalog::EquipmentRecord;
use crate::category::CategoryFilter;

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Records passing `filter`, in catalog order.
#[must_use]
pub fn visible(records: &[EquipmentRecord], filter: CategoryFilter) -> Vec<&EquipmentRecord> {
    records.iter().filter(|r| filter.matches(r.category)).collect()
}

/// Records that can currently be ordered, in catalog order.
pub fn orderable(records: &[EquipmentRecord]) -> impl Iterator<Item = &EquipmentRecord> {
    records.iter().filter(|r| r.available)
}

/// Number of available records passing `filter`.
#[must_use]
pub fn available_count(records: &[EquipmentRecord], filter: CategoryFilter) -> usize {
    orderable(records).filter(|r| filter.matches(r.category)).count()
}

/// Available-count badge value for each filter button, in filter-bar order.
#[must_use]
pub fn category_counts(records: &[EquipmentRecord]) -> [(CategoryFilter, usize); 4] {
    CategoryFilter::ALL.map(|filter| (filter, available_count(records, filter)))
}
