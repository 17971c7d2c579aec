//! Reactive UI state for the rental page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state struct is plain data with synchronous transitions. The App
//! provides them as `RwSignal` contexts; components read and update them
//! through `expect_context`. Keeping them free of Leptos types lets the unit
//! tests drive every transition without a reactive runtime.

pub mod catalog;
pub mod map;
pub mod order;
pub mod toast;
