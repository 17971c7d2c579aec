use super::*;
use fleet::tracking::TRACKING_PERIOD;

#[test]
fn start_and_drop_balance_the_active_count() {
    let before = active_timers();
    let timer = LiveTimer::start(TRACKING_PERIOD, || {});
    assert_eq!(active_timers(), before + 1);
    drop(timer);
    assert_eq!(active_timers(), before);
}

#[test]
fn every_exit_path_releases_the_timer() {
    let before = active_timers();
    let run = |fail: bool| -> Result<(), &'static str> {
        let _timer = LiveTimer::start(TRACKING_PERIOD, || {});
        if fail {
            return Err("unmounted early");
        }
        Ok(())
    };
    assert!(run(true).is_err());
    assert!(run(false).is_ok());
    assert_eq!(active_timers(), before);
}

#[test]
fn clearing_the_owning_slot_cancels() {
    let before = active_timers();
    let mut slot = Some(LiveTimer::start(TRACKING_PERIOD, || {}));
    assert_eq!(active_timers(), before + 1);
    slot = None;
    assert!(slot.is_none());
    assert_eq!(active_timers(), before);
}

#[test]
fn entropy_seed_is_stable_off_browser() {
    assert_eq!(entropy_seed(), entropy_seed());
}
