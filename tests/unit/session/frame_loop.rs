use super::*;

#[test]
fn burst_of_requests_schedules_one_frame() {
    let mut fl = FrameLoop::default();
    assert!(fl.request_tick());
    assert!(!fl.request_tick());
    assert!(!fl.request_tick());
    assert!(fl.begin_frame());
    assert!(!fl.begin_frame());
    assert!(fl.request_tick());
}

#[test]
fn idle_frame_does_not_evaluate() {
    let mut fl = FrameLoop::default();
    assert!(!fl.begin_frame());
    assert!(!fl.wants_next_frame());
}

#[test]
fn dragging_forces_every_frame() {
    let mut fl = FrameLoop::default();
    assert!(fl.start_interacting());
    assert!(!fl.start_interacting());
    for _ in 0..3 {
        assert!(fl.begin_frame());
        assert!(fl.wants_next_frame());
    }
    fl.stop_interacting();
    assert!(!fl.begin_frame());
    assert!(!fl.is_interacting());
}

#[test]
fn request_during_drag_is_consumed_by_next_frame() {
    let mut fl = FrameLoop::default();
    fl.start_interacting();
    assert!(fl.request_tick());
    assert!(fl.is_pending());
    assert!(fl.begin_frame());
    assert!(!fl.is_pending());
}
