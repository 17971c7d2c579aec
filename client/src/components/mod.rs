//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the rental page chrome, the catalog and map
//! presentations and the order dialog, reading and writing shared state from
//! Leptos context providers.

pub mod catalog_grid;
pub mod category_filter;
pub mod equipment_card;
pub mod fleet_strip;
pub mod hero;
pub mod map_view;
pub mod order_dialog;
pub mod site_footer;
pub mod site_header;
pub mod toaster;
