//! Observer hooks for brush output.

pub mod plugins;

pub use plugins::{BrushCallbacks, BrushContext, BrushDragKind, BrushEvent, BrushListener};
