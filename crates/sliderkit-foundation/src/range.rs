//! Dual-thumb range controller.
//!
//! [`RangeState`] coordinates two [`ThumbState`]s over a shared
//! [`RangeValue`]: it derives each thumb's feasible interval for the current
//! cycle, resolves which thumb a raw interaction value belongs to, and
//! commits updates through a state store that notifies the registered
//! observer exactly once per user-driven change. Externally imposed values
//! (controlled usage) overwrite the range without echoing back to the
//! caller that supplied them.

use std::cell::Cell;
use std::rc::Rc;

use sliderkit_core::{CallbackSlot, MutableValue, SideEffectQueue};

use crate::gesture::{GesturePhase, Thumb};
use crate::range_value::RangeValue;
use crate::thumb::{ThumbOptions, ThumbState};

/// Configuration for [`RangeState`].
///
/// Consistency (`minimum_value <= maximum_value - minimum_range`, the
/// initial range inside the domain) is a precondition on the caller, not
/// validated here. An inconsistent configuration degenerates into a
/// collapsed range rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeOptions {
    /// Quantization granularity applied by each thumb. `0.0` disables it.
    pub step: f64,
    /// Initial, or externally controlled, selection.
    pub range: RangeValue,
    /// Minimum enforced separation between the bounds.
    pub minimum_range: f64,
    /// Lower end of the absolute domain.
    pub minimum_value: f64,
    /// Upper end of the absolute domain.
    pub maximum_value: f64,
    /// Forwarded to the thumbs to permit tap-initiated movement.
    pub slide_on_tap: bool,
    /// Disables the non-crossing constraint and the thumb-stickiness rule.
    pub crossing_allowed: bool,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            step: 0.0,
            range: RangeValue::new(0.0, 1.0),
            minimum_range: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            slide_on_tap: false,
            crossing_allowed: false,
        }
    }
}

/// Owns the committed range and its notification shadow.
///
/// The store is the single writer of the range: thumbs report resolved
/// values into it, they never mutate the pair themselves. All handles are
/// `Rc`-shared so clones observe the same state.
#[derive(Clone, Debug)]
struct RangeStore {
    /// The authoritative selection.
    value: MutableValue<RangeValue>,
    /// Shadow copy that drives the deferred notification. Updated only on
    /// user-driven commits, so external overwrites never echo back.
    external: MutableValue<RangeValue>,
    on_value_change: CallbackSlot<RangeValue>,
    effects: SideEffectQueue,
}

impl RangeStore {
    fn new(initial: RangeValue) -> Self {
        Self {
            value: MutableValue::new(initial),
            external: MutableValue::new(initial),
            on_value_change: CallbackSlot::new(),
            effects: SideEffectQueue::new(),
        }
    }

    fn range(&self) -> RangeValue {
        self.value.get()
    }

    /// Overwrites the range with an externally controlled value. Never
    /// notifies, even when the value differs from the current range.
    fn apply_external(&self, new_range: RangeValue) {
        self.update_range(|_| new_range, true);
    }

    /// Commits a user-driven update and arms one deferred notification.
    fn apply_interaction(&self, update: impl FnOnce(RangeValue) -> RangeValue) {
        self.update_range(update, false);
    }

    fn update_range(&self, update: impl FnOnce(RangeValue) -> RangeValue, from_external: bool) {
        let old_range = self.value.get();
        let new_range = update(old_range);
        // Unchanged tuple: no state transition, no notification.
        if new_range == old_range {
            return;
        }

        log::trace!(
            "range commit [{}, {}] -> [{}, {}] (external: {from_external})",
            old_range.low,
            old_range.high,
            new_range.low,
            new_range.high,
        );
        self.value.set(new_range);

        if !from_external {
            self.external.set(new_range);
            let slot = self.on_value_change.clone();
            let external = self.external.clone();
            self.effects.schedule(move || slot.invoke(&external.get()));
        }
        // Post-commit: the observer only ever sees the settled range. When
        // called from within a delivery, the outer drain picks this up.
        self.effects.drain();
    }
}

/// Value-state controller for a dual-handle range slider.
///
/// The hosting widget binds [`update_closest_value`](Self::update_closest_value)
/// and [`can_move`](Self::can_move) to its gesture events, reads
/// [`range`](Self::range) for rendering, and pushes externally controlled
/// values through [`set_range`](Self::set_range). Cloning shares the
/// underlying state, so closures handed to the host can keep a handle.
///
/// # Example
///
/// ```
/// use sliderkit_foundation::{GesturePhase, RangeOptions, RangeState, RangeValue};
///
/// let slider = RangeState::new(RangeOptions {
///     range: RangeValue::new(10.0, 90.0),
///     minimum_value: 0.0,
///     maximum_value: 100.0,
///     minimum_range: 5.0,
///     slide_on_tap: true,
///     ..RangeOptions::default()
/// });
/// slider.update_closest_value(12.0, GesturePhase::Press);
/// assert_eq!(slider.range(), RangeValue::new(12.0, 90.0));
/// ```
///
/// # Thread Safety
///
/// Single-threaded, like the primitives it is built on. All operations run
/// synchronously to completion within one caller-invoked event.
#[derive(Clone, Debug)]
pub struct RangeState {
    store: RangeStore,
    options: Rc<Cell<RangeOptions>>,
    /// Which thumb the in-progress gesture is moving; `None` between
    /// gestures.
    active_thumb: Rc<Cell<Option<Thumb>>>,
}

impl RangeState {
    /// Creates a controller with the given configuration. The range starts
    /// at `options.range`.
    pub fn new(options: RangeOptions) -> Self {
        Self {
            store: RangeStore::new(options.range),
            options: Rc::new(Cell::new(options)),
            active_thumb: Rc::new(Cell::new(None)),
        }
    }

    /// The committed selection.
    pub fn range(&self) -> RangeValue {
        self.store.range()
    }

    /// The current configuration.
    pub fn options(&self) -> RangeOptions {
        self.options.get()
    }

    /// The thumb engaged by an in-progress gesture, if any.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.active_thumb.get()
    }

    /// Registers the change observer, replacing any previous one.
    ///
    /// Hosts overwrite this on every configuration cycle; notifications
    /// always go to the handler registered most recently, never to a stale
    /// closure.
    pub fn set_on_value_change(&self, f: impl Fn(&RangeValue) + 'static) {
        self.store.on_value_change.set(f);
    }

    /// Removes the change observer.
    pub fn clear_on_value_change(&self) {
        self.store.on_value_change.clear();
    }

    /// Replaces the configuration and resynchronizes the range with
    /// `options.range`. The overwrite is treated as externally imposed: it
    /// never notifies the observer.
    pub fn set_options(&self, options: RangeOptions) {
        self.options.set(options);
        self.store.apply_external(options.range);
    }

    /// Overwrites the selection with an externally controlled value without
    /// notifying the observer. Keeps controlled hosts from receiving an
    /// echo of the value they just supplied.
    pub fn set_range(&self, range: RangeValue) {
        self.options.set(RangeOptions {
            range,
            ..self.options.get()
        });
        self.store.apply_external(range);
    }

    /// Routes a raw value through the min thumb and commits the result as
    /// the new lower bound. Returns the resolved value.
    pub fn update_min_value(&self, raw: f64) -> f64 {
        self.thumb(Thumb::Min).update_value(raw)
    }

    /// Routes a raw value through the max thumb and commits the result as
    /// the new upper bound. Returns the resolved value.
    pub fn update_max_value(&self, raw: f64) -> f64 {
        self.thumb(Thumb::Max).update_value(raw)
    }

    /// Resolves a raw interaction value to one of the thumbs, updates that
    /// bound, and advances the gesture.
    ///
    /// Mid-gesture with crossing disallowed, the thumb assigned at press
    /// time is reused so the assignment cannot oscillate as the bounds
    /// approach each other. Otherwise the closer thumb wins; an exact tie
    /// goes to the max thumb.
    ///
    /// Returns the hypothetical range - the raw value paired with the other
    /// bound as of this cycle - for immediate caller feedback, independent
    /// of the committed (quantized) state.
    pub fn update_closest_value(&self, value: f64, phase: GesturePhase) -> RangeValue {
        let RangeValue { low, high } = self.range();
        let crossing_allowed = self.options.get().crossing_allowed;

        let target = match self.active_thumb.get() {
            Some(active) if !crossing_allowed => active,
            _ => {
                // Strict less-than: an equidistant value selects Max.
                if (value - low).abs() < (value - high).abs() {
                    Thumb::Min
                } else {
                    Thumb::Max
                }
            }
        };
        self.thumb(target).update_value(value);

        match phase {
            GesturePhase::Press => self.active_thumb.set(Some(target)),
            GesturePhase::Release => self.active_thumb.set(None),
            GesturePhase::Drag => {}
        }

        match target {
            Thumb::Min => RangeValue::new(value, high),
            Thumb::Max => RangeValue::new(low, value),
        }
    }

    /// Reports whether any thumb could move to `value` this cycle. Used by
    /// hosts to pre-filter taps before resolving them.
    pub fn can_move(&self, value: f64) -> bool {
        self.thumb(Thumb::Max).can_move(value) || self.thumb(Thumb::Min).can_move(value)
    }

    /// Derives the operative interval for `thumb` from the current range.
    ///
    /// The min thumb may move in `[minimum_value, high - minimum_range]`
    /// and the max thumb in `[low + minimum_range, maximum_value]`, which
    /// is what enforces both the separation and (with stickiness) the
    /// non-crossing invariant.
    fn thumb_options(&self, thumb: Thumb) -> ThumbOptions {
        let options = self.options.get();
        let range = self.store.range();
        let (minimum_value, maximum_value, value) = match thumb {
            Thumb::Min => (
                options.minimum_value,
                range.high - options.minimum_range,
                range.low,
            ),
            Thumb::Max => (
                range.low + options.minimum_range,
                options.maximum_value,
                range.high,
            ),
        };
        if maximum_value < minimum_value {
            log::warn!(
                "degenerate {thumb} thumb interval [{minimum_value}, {maximum_value}]: \
                 configuration is inconsistent with the current range"
            );
        }
        ThumbOptions {
            minimum_value,
            maximum_value,
            value,
            step: options.step,
            slide_on_tap: options.slide_on_tap,
        }
    }

    /// Builds the thumb controller for this cycle, wired to commit into the
    /// store. The store stays the single writer of the range.
    fn thumb(&self, thumb: Thumb) -> ThumbState {
        let store = self.store.clone();
        let state = ThumbState::new(self.thumb_options(thumb));
        match thumb {
            Thumb::Min => state.with_on_value_change(move |value| {
                store.apply_interaction(|range| range.with_low(value));
            }),
            Thumb::Max => state.with_on_value_change(move |value| {
                store.apply_interaction(|range| range.with_high(value));
            }),
        }
    }
}
