//! Per-thumb value controller.
//!
//! A [`ThumbState`] quantizes and clamps raw interaction values into one
//! thumb's feasible interval and reports each accepted value through its
//! configured callback. The range controller rebuilds the options on every
//! cycle, so a thumb always operates on the interval derived from the
//! current range.

use std::fmt;

/// Operative configuration for one thumb, recomputed every cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbOptions {
    /// Lower end of the feasible interval.
    pub minimum_value: f64,
    /// Upper end of the feasible interval.
    pub maximum_value: f64,
    /// The thumb's current value.
    pub value: f64,
    /// Quantization granularity. `0.0` disables quantization.
    pub step: f64,
    /// Whether a tap away from the thumb may move it.
    pub slide_on_tap: bool,
}

type ValueCallback = Box<dyn Fn(f64)>;

/// Controller for a single bound handle.
///
/// Built fresh from [`ThumbOptions`] each time the owning range controller
/// needs it, in the same way a layout pass reconfigures its helpers per
/// cycle. [`update_value`](Self::update_value) resolves a raw value against
/// the configured interval and step; [`can_move`](Self::can_move) reports
/// whether a raw value could engage this thumb at all.
pub struct ThumbState {
    options: ThumbOptions,
    on_value_change: Option<ValueCallback>,
}

/// Fraction of the interval span within which an interaction can pick up
/// the thumb when tap-to-slide is disabled.
const PICKUP_FRACTION: f64 = 0.1;

impl ThumbState {
    /// Creates a thumb controller with no change callback.
    pub fn new(options: ThumbOptions) -> Self {
        Self {
            options,
            on_value_change: None,
        }
    }

    /// Sets the callback that receives every resolved value.
    pub fn with_on_value_change(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_value_change = Some(Box::new(f));
        self
    }

    /// The options this thumb was configured with.
    pub fn options(&self) -> ThumbOptions {
        self.options
    }

    /// Quantizes and clamps `raw` into the configured interval, reports the
    /// result through the callback, and returns it.
    ///
    /// A degenerate interval (`maximum_value < minimum_value`, the result of
    /// inconsistent configuration) collapses every input to `minimum_value`.
    pub fn update_value(&self, raw: f64) -> f64 {
        let resolved = self.resolve(raw);
        if let Some(on_value_change) = &self.on_value_change {
            on_value_change(resolved);
        }
        resolved
    }

    /// Reports whether `raw` is reachable for this thumb in the current
    /// cycle.
    ///
    /// With tap-to-slide enabled, any value inside the feasible interval is
    /// reachable. Without it, the thumb uses pickup semantics: only values
    /// within a tenth of the interval span of its current value engage it,
    /// so a distant tap cannot yank the handle.
    pub fn can_move(&self, raw: f64) -> bool {
        let ThumbOptions {
            minimum_value,
            maximum_value,
            value,
            slide_on_tap,
            ..
        } = self.options;

        if maximum_value < minimum_value {
            return false;
        }
        if slide_on_tap {
            raw >= minimum_value && raw <= maximum_value
        } else {
            let span = maximum_value - minimum_value;
            let span = if span == 0.0 { 1.0 } else { span };
            (raw - value).abs() / span < PICKUP_FRACTION
        }
    }

    fn resolve(&self, raw: f64) -> f64 {
        let ThumbOptions {
            minimum_value,
            maximum_value,
            step,
            ..
        } = self.options;

        let quantized = if step > 0.0 {
            minimum_value + ((raw - minimum_value) / step).round() * step
        } else {
            raw
        };
        // min-then-max rather than clamp: a degenerate interval collapses to
        // minimum_value instead of panicking.
        quantized.min(maximum_value).max(minimum_value)
    }
}

impl fmt::Debug for ThumbState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumbState")
            .field("options", &self.options)
            .field("has_callback", &self.on_value_change.is_some())
            .finish()
    }
}
