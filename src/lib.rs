//! chart-brush: range selection and axis tick machinery for index-addressed
//! chart data.
//!
//! The crate maps pixel coordinates to record indices, drives the two-handle
//! brush state machine, and decides which domain values receive a labelled
//! tick. Rendering, layout and data loading stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{BrushConfig, BrushController, DomainCoordinator};
pub use error::{BrushError, BrushResult};
