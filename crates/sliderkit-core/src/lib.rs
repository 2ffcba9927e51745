//! Observable state primitives for SliderKit.
//!
//! This crate provides the runtime-free state machinery that the widget
//! controllers in `sliderkit-foundation` are built on:
//!
//! - [`MutableValue`] - an owned, shareable value cell
//! - [`CallbackSlot`] - a handler slot that always invokes the latest
//!   registered callback
//! - [`SideEffectQueue`] - a post-commit hook queue drained after a state
//!   transition has settled
//!
//! Everything here is single-threaded by design: the primitives are meant to
//! live inside a host's UI event loop and are shared through `Rc` handles.

mod callback;
mod effects;
mod value;

pub use callback::CallbackSlot;
pub use effects::SideEffectQueue;
pub use value::MutableValue;
