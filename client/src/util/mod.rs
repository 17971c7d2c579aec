//! Browser-facing helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate timer, page-head and map-widget glue from page and
//! component logic. Each one compiles to a no-op (or is absent) outside the
//! `hydrate` build so SSR stays deterministic.

pub mod live_timer;
pub mod map_settings;
pub mod script_loader;
#[cfg(feature = "hydrate")]
pub mod ymaps;
