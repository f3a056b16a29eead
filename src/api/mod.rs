mod axis_config;
mod axis_domain_builder;
mod axis_domain_cache;
mod axis_label_measure;
mod axis_ticks;
mod axis_validation;
mod brush_config;
mod brush_controller;
mod brush_core;
mod brush_drag_controller;
mod brush_keyboard_controller;
mod brush_label_resolver;
mod brush_listener_registry;
mod brush_validation;
mod domain_coordinator;
mod label_formatter;

pub use axis_config::{
    AxisConfig, AxisKind, DEFAULT_MIN_TICK_GAP_PX, OrdinalPlacement, TickInterval,
};
pub use axis_domain_builder::{AxisDomain, AxisDomainBuilder};
pub use axis_domain_cache::{AxisDomainCache, AxisDomainCacheStats};
pub use axis_label_measure::{
    DEFAULT_LABEL_FONT_SIZE_PX, EstimatedLabelWidth, FormattedLabelWidth, TickLabelMeasure,
    estimate_label_text_width_px,
};
pub use axis_ticks::{AxisTick, TickSelector};
pub use brush_config::{BrushConfig, DEFAULT_LABEL_OFFSET_PX, DEFAULT_LEAVE_TIMEOUT_MS};
pub use brush_controller::BrushController;
pub use brush_label_resolver::{BrushLabel, BrushLabels, LabelAnchor, SlideExtent};
pub use domain_coordinator::{DomainCoordinator, DomainCoordinatorLink, DomainObserver};
pub use label_formatter::{RawValueFormatter, TickFormatter};
