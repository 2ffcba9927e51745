//! Range value pair for the dual-thumb slider.

/// The selected range: a pair of bound values.
///
/// `low` is the min thumb's value and `high` the max thumb's. The pair is
/// always replaced as a whole; no field is mutated in place.
///
/// # Invariants
///
/// - `low <= high` for every state reachable through a controller with
///   crossing disallowed. The controller enforces this by constraining each
///   thumb's feasible interval, not by correcting values after the fact.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RangeValue {
    /// Lower bound of the selection.
    pub low: f64,
    /// Upper bound of the selection.
    pub high: f64,
}

impl RangeValue {
    /// Creates a range from its two bounds.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Distance between the two bounds.
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Returns `true` if `value` lies between the bounds, inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// This range with the lower bound replaced.
    pub fn with_low(self, low: f64) -> Self {
        Self { low, ..self }
    }

    /// This range with the upper bound replaced.
    pub fn with_high(self, high: f64) -> Self {
        Self { high, ..self }
    }
}
