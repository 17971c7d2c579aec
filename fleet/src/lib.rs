//! Equipment fleet model shared by the `spectech` host and the `client` UI.
//!
//! This crate owns everything about the rental catalog that does not need a
//! browser: the fixed equipment records, the closed category set, derived
//! views (filtering and availability counts), the order form and its pricing
//! rules, the map-marker model handed to the map widget, and the simulated
//! live-tracking display copy.
//!
//! DESIGN
//! ======
//! Derived state is always a pure function of `(records, filter)`. Nothing in
//! here caches a filtered list or a count, so UI layers can recompute on every
//! signal change without a stale-cache class of bugs.

pub mod catalog;
pub mod category;
pub mod format;
pub mod marker;
pub mod order;
pub mod settings;
pub mod tracking;
pub mod view;

pub use catalog::{Catalog, CatalogError, EquipmentId, EquipmentRecord};
pub use category::{Category, CategoryError, CategoryFilter};
pub use order::{OrderError, OrderField, OrderForm, OrderRequest, Quote};
pub use settings::MapSettings;
