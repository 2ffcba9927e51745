//! Headless state for a dual-thumb range slider.
//!
//! This crate owns the value-state side of a range slider widget and nothing
//! else: no rendering, no layout, no pointer capture. A host binds its
//! gesture events to [`RangeState`] and reads the committed range back for
//! drawing.
//!
//! # Core Types
//!
//! - [`RangeValue`] - the selected (low, high) pair, replaced atomically
//! - [`RangeState`] - the controller: thumb resolution, separation and
//!   non-crossing constraints, change notification
//! - [`ThumbState`] / [`ThumbOptions`] - the per-thumb quantize/clamp
//!   collaborator, reconfigured every cycle
//! - [`GesturePhase`] / [`Thumb`] - interaction vocabulary
//!
//! # Example
//!
//! ```
//! use sliderkit_foundation::{GesturePhase, RangeOptions, RangeState, RangeValue};
//!
//! let slider = RangeState::new(RangeOptions {
//!     range: RangeValue::new(10.0, 90.0),
//!     minimum_value: 0.0,
//!     maximum_value: 100.0,
//!     minimum_range: 5.0,
//!     slide_on_tap: true,
//!     ..RangeOptions::default()
//! });
//! slider.set_on_value_change(|range| println!("selected [{}, {}]", range.low, range.high));
//!
//! slider.update_closest_value(12.0, GesturePhase::Press);
//! slider.update_closest_value(30.0, GesturePhase::Drag);
//! slider.update_closest_value(30.0, GesturePhase::Release);
//! assert_eq!(slider.range(), RangeValue::new(30.0, 90.0));
//! ```

mod gesture;
mod range;
mod range_value;
mod thumb;

pub use gesture::{GesturePhase, Thumb};
pub use range::{RangeOptions, RangeState};
pub use range_value::RangeValue;
pub use thumb::{ThumbOptions, ThumbState};

pub mod prelude {
    pub use crate::gesture::{GesturePhase, Thumb};
    pub use crate::range::{RangeOptions, RangeState};
    pub use crate::range_value::RangeValue;
}
