use std::rc::Rc;

use crate::core::{BrushGeometry, BrushWindow, DomainValue, PositionalScale};
use crate::extensions::BrushListener;
use crate::interaction::{
    BrushInteractionState, DragListenerGuard, GlobalPointerListeners, TravellerPositions,
};

use super::BrushConfig;

/// Inputs and derived geometry of the brush.
#[derive(Debug)]
pub(super) struct BrushModel {
    pub(super) geometry: BrushGeometry,
    pub(super) values: Vec<DomainValue>,
    /// `None` whenever data or geometry is degenerate.
    pub(super) scale: Option<PositionalScale>,
    /// Last committed window.
    pub(super) window: Option<BrushWindow>,
    pub(super) travellers: Option<TravellerPositions>,
}

/// Controlled-window bookkeeping.
#[derive(Debug, Default)]
pub(super) struct BrushControlledState {
    /// Last window pushed by the host.
    pub(super) last_controlled: Option<BrushWindow>,
    /// Host window received mid-drag, applied when the session ends.
    pub(super) pending: Option<BrushWindow>,
}

/// Interaction, listener and drag-session resources.
pub(super) struct BrushRuntime {
    pub(super) interaction: BrushInteractionState,
    pub(super) pointer_host: Rc<dyn GlobalPointerListeners>,
    pub(super) drag_listeners: Option<DragListenerGuard>,
    pub(super) listeners: Vec<Box<dyn BrushListener>>,
    /// Visibility last reported through `TextVisibilityChanged`.
    pub(super) labels_visible: bool,
    pub(super) unmounted: bool,
}

/// Internal state behind the public `BrushController` facade.
pub(super) struct BrushCore {
    pub(super) config: BrushConfig,
    pub(super) model: BrushModel,
    pub(super) controlled: BrushControlledState,
    pub(super) runtime: BrushRuntime,
}
