use super::*;

#[test]
fn api_present_wins_over_script_state() {
    assert_eq!(next_step(true, None), LoaderStep::UseApi);
    assert_eq!(next_step(true, Some(Some(LoadState::Failed))), LoaderStep::UseApi);
}

#[test]
fn first_mount_injects_the_script() {
    assert_eq!(next_step(false, None), LoaderStep::Inject);
}

#[test]
fn remount_after_failed_load_retries_instead_of_waiting() {
    assert_eq!(next_step(false, Some(Some(LoadState::Failed))), LoaderStep::Inject);
}

#[test]
fn remount_during_load_waits_for_outcome() {
    assert_eq!(next_step(false, Some(Some(LoadState::Loading))), LoaderStep::Wait);
}

#[test]
fn loaded_script_without_api_fails_immediately() {
    assert_eq!(next_step(false, Some(Some(LoadState::Loaded))), LoaderStep::Fail);
}

#[test]
fn unmarked_script_is_replaced() {
    assert_eq!(next_step(false, Some(None)), LoaderStep::Inject);
    assert_eq!(next_step(false, Some(LoadState::from_attr("bogus"))), LoaderStep::Inject);
}

#[test]
fn attribute_text_maps_back_to_state() {
    for state in [LoadState::Loading, LoadState::Loaded, LoadState::Failed] {
        assert_eq!(LoadState::from_attr(state.as_attr()), Some(state));
    }
}
