//! Input handling: event types, pointer normalization, and the aggregator
//! that reduces raw device events into spin and look-at targets.

/// Interaction state machine over input events.
pub mod aggregator;
/// Platform-agnostic input events.
pub mod event;
/// Keyboard keys that scroll like the wheel.
pub mod keys;
/// Pixel-to-normalized pointer tracking.
pub mod pointer;

pub use aggregator::{
    InputAggregator, InteractionMode, PanSource, ScrollState, SpinDirection,
};
pub use event::{InputEvent, MouseButton};
pub use keys::ScrollKey;
pub use pointer::{PointerTracker, Viewport};
