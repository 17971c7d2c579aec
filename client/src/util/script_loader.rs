//! Load-state bookkeeping for the map widget's loader script.
//!
//! The script element outlives any one map view, so its outcome is recorded
//! on the element itself (`data-load-state`). A remounted view reads that
//! marker instead of listening for events that already fired.

/// Attribute holding the script's [`LoadState`].
pub const STATE_ATTR: &str = "data-load-state";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }

    #[must_use]
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw {
            "loading" => Some(Self::Loading),
            "loaded" => Some(Self::Loaded),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// What a mounting map view does about the loader script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStep {
    /// The API global exists; wait for `ymaps.ready`.
    UseApi,
    /// No usable script: drop any stale element and inject a fresh one.
    Inject,
    /// A load is in flight; listen for its outcome.
    Wait,
    /// The script ran without exposing the API; fail right away.
    Fail,
}

/// Decide the next step from the API global and the existing script's state.
/// `existing` is `None` when no script element is present, and
/// `Some(None)` when one is present with an unreadable state marker.
#[must_use]
pub fn next_step(api_present: bool, existing: Option<Option<LoadState>>) -> LoaderStep {
    if api_present {
        return LoaderStep::UseApi;
    }
    match existing {
        None | Some(None | Some(LoadState::Failed)) => LoaderStep::Inject,
        Some(Some(LoadState::Loading)) => LoaderStep::Wait,
        Some(Some(LoadState::Loaded)) => LoaderStep::Fail,
    }
}

#[cfg(test)]
#[path = "script_loader_test.rs"]
mod script_loader_test;
