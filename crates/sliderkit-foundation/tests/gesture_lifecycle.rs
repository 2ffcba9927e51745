//! End-to-end gesture tests driving [`RangeState`] the way a hosting widget
//! would: press/drag/release sequences interleaved with externally
//! controlled updates.

use std::cell::RefCell;
use std::rc::Rc;

use sliderkit_foundation::{GesturePhase, RangeOptions, RangeState, RangeValue, Thumb};

fn slider() -> RangeState {
    RangeState::new(RangeOptions {
        range: RangeValue::new(10.0, 90.0),
        minimum_value: 0.0,
        maximum_value: 100.0,
        minimum_range: 5.0,
        slide_on_tap: true,
        ..RangeOptions::default()
    })
}

fn record_changes(state: &RangeState) -> Rc<RefCell<Vec<RangeValue>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    state.set_on_value_change(move |range| seen_clone.borrow_mut().push(*range));
    seen
}

#[test]
fn full_gesture_with_external_resync() {
    let state = slider();
    let seen = record_changes(&state);

    // Gesture one: grab near the min thumb and drag past the max thumb.
    state.update_closest_value(12.0, GesturePhase::Press);
    assert_eq!(state.range(), RangeValue::new(12.0, 90.0));

    state.update_closest_value(95.0, GesturePhase::Drag);
    // Stickiness keeps the min thumb engaged; separation clamps it to 85.
    assert_eq!(state.range(), RangeValue::new(85.0, 90.0));

    state.update_closest_value(95.0, GesturePhase::Release);
    assert_eq!(state.active_thumb(), None);

    // The host pushes a controlled value back down: applied, not echoed.
    state.set_range(RangeValue::new(20.0, 80.0));
    assert_eq!(state.range(), RangeValue::new(20.0, 80.0));

    // A press at the exact midpoint of [20, 80] goes to the max thumb.
    state.update_closest_value(50.0, GesturePhase::Press);
    assert_eq!(state.active_thumb(), Some(Thumb::Max));
    assert_eq!(state.range(), RangeValue::new(20.0, 50.0));

    assert_eq!(
        *seen.borrow(),
        [
            RangeValue::new(12.0, 90.0),
            RangeValue::new(85.0, 90.0),
            RangeValue::new(20.0, 50.0),
        ]
    );
}

#[test]
fn stickiness_resets_between_gestures() {
    let state = slider();

    state.update_closest_value(12.0, GesturePhase::Press);
    state.update_closest_value(40.0, GesturePhase::Drag);
    state.update_closest_value(40.0, GesturePhase::Release);
    assert_eq!(state.range(), RangeValue::new(40.0, 90.0));

    // A fresh press resolves by distance again: 88 grabs the max thumb.
    state.update_closest_value(88.0, GesturePhase::Press);
    assert_eq!(state.active_thumb(), Some(Thumb::Max));
    assert_eq!(state.range(), RangeValue::new(40.0, 88.0));
}

#[test]
fn hypothetical_feedback_tracks_the_gesture() {
    let state = slider();

    let feedback = state.update_closest_value(12.0, GesturePhase::Press);
    assert_eq!(feedback, RangeValue::new(12.0, 90.0));

    // Feedback pairs the raw drag value with the other bound even when the
    // committed bound is clamped.
    let feedback = state.update_closest_value(95.0, GesturePhase::Drag);
    assert_eq!(feedback, RangeValue::new(95.0, 90.0));
    assert_eq!(state.range(), RangeValue::new(85.0, 90.0));
}

#[test]
fn tap_filtering_without_slide_on_tap() {
    let state = RangeState::new(RangeOptions {
        range: RangeValue::new(10.0, 90.0),
        minimum_value: 0.0,
        maximum_value: 100.0,
        minimum_range: 5.0,
        slide_on_tap: false,
        ..RangeOptions::default()
    });

    // Pickup semantics: taps next to a thumb engage it, distant taps are
    // filtered out before any update happens.
    assert!(state.can_move(11.0));
    assert!(state.can_move(88.0));
    assert!(!state.can_move(50.0));
}

#[test]
fn crossing_allowed_gesture_swaps_thumbs() {
    let state = RangeState::new(RangeOptions {
        range: RangeValue::new(40.0, 60.0),
        minimum_value: 0.0,
        maximum_value: 100.0,
        minimum_range: 0.0,
        slide_on_tap: true,
        crossing_allowed: true,
        ..RangeOptions::default()
    });

    state.update_closest_value(42.0, GesturePhase::Press);
    assert_eq!(state.active_thumb(), Some(Thumb::Min));

    // Dragging across the other thumb hands the gesture over instead of
    // pushing the bound through it.
    state.update_closest_value(75.0, GesturePhase::Drag);
    assert_eq!(state.range(), RangeValue::new(42.0, 75.0));

    state.update_closest_value(75.0, GesturePhase::Release);
    assert_eq!(state.active_thumb(), None);

    let range = state.range();
    assert!(range.low <= range.high);
}

#[test]
fn reconfiguration_keeps_notifying_the_new_observer() {
    let state = slider();
    let first = record_changes(&state);

    state.update_min_value(20.0);
    assert_eq!(*first.borrow(), [RangeValue::new(20.0, 90.0)]);

    // The host reconfigures: new options, new callback. The old closure is
    // never called again.
    state.set_options(RangeOptions {
        step: 10.0,
        range: RangeValue::new(20.0, 90.0),
        minimum_value: 0.0,
        maximum_value: 100.0,
        minimum_range: 5.0,
        slide_on_tap: true,
        ..RangeOptions::default()
    });
    let second = record_changes(&state);

    state.update_min_value(34.0);
    assert_eq!(*first.borrow(), [RangeValue::new(20.0, 90.0)]);
    assert_eq!(*second.borrow(), [RangeValue::new(30.0, 90.0)]);
}
