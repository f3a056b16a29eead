use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::{
    BrushGeometry, BrushWindow, CoordinateTable, DomainValue, PositionalScale,
};
use crate::error::BrushResult;
use crate::extensions::{BrushContext, BrushEvent};
use crate::interaction::{
    BrushInteractionMode, BrushInteractionState, GlobalPointerListeners, NoopPointerListeners,
    TravellerId, TravellerPositions,
};

use super::brush_core::{BrushControlledState, BrushCore, BrushModel, BrushRuntime};
use super::brush_validation::validate_brush_config;
use super::BrushConfig;

/// Interactive range selector over an index-addressed data array.
///
/// The controller owns traveller positions and the committed window. Hosts
/// feed it pointer, touch, keyboard and hover events plus external state
/// (data, geometry, controlled window) and read back the window, traveller
/// positions and labels. Output is published to registered listeners.
///
/// Degenerate inputs (no data, zero-width track) never fail: the controller
/// simply exposes no travellers and ignores drag starts until inputs recover.
pub struct BrushController {
    pub(super) core: BrushCore,
}

impl BrushController {
    pub fn new(geometry: BrushGeometry, config: BrushConfig) -> BrushResult<Self> {
        let config = validate_brush_config(config)?;
        if !geometry.is_renderable() {
            warn!(?geometry, "brush geometry is degenerate; travellers stay hidden");
        }

        Ok(Self {
            core: BrushCore {
                config,
                model: BrushModel {
                    geometry,
                    values: Vec::new(),
                    scale: None,
                    window: None,
                    travellers: None,
                },
                controlled: BrushControlledState::default(),
                runtime: BrushRuntime {
                    interaction: BrushInteractionState::default(),
                    pointer_host: Rc::new(NoopPointerListeners),
                    drag_listeners: None,
                    listeners: Vec::new(),
                    labels_visible: config.always_show_text,
                    unmounted: false,
                },
            },
        })
    }

    /// Uses `host` for window-level listeners during drag sessions.
    #[must_use]
    pub fn with_pointer_listeners(mut self, host: Rc<dyn GlobalPointerListeners>) -> Self {
        self.core.runtime.pointer_host = host;
        self
    }

    #[must_use]
    pub fn config(&self) -> BrushConfig {
        self.core.config
    }

    #[must_use]
    pub fn geometry(&self) -> BrushGeometry {
        self.core.model.geometry
    }

    #[must_use]
    pub fn values(&self) -> &[DomainValue] {
        &self.core.model.values
    }

    #[must_use]
    pub fn data_len(&self) -> usize {
        self.core.model.values.len()
    }

    /// Last committed window, `None` while there is no data.
    #[must_use]
    pub fn window(&self) -> Option<BrushWindow> {
        self.core.model.window
    }

    #[must_use]
    pub fn traveller_positions(&self) -> Option<TravellerPositions> {
        self.core.model.travellers
    }

    #[must_use]
    pub fn coordinate_table(&self) -> Option<&CoordinateTable> {
        self.core
            .model
            .scale
            .as_ref()
            .map(PositionalScale::coordinate_table)
    }

    #[must_use]
    pub fn mode(&self) -> BrushInteractionMode {
        self.core.runtime.interaction.mode()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.runtime.interaction.is_dragging()
    }

    #[must_use]
    pub fn focused_traveller(&self) -> Option<TravellerId> {
        self.core.runtime.interaction.focused()
    }

    /// Deadline of the pending leave timeout, if armed.
    #[must_use]
    pub fn leave_deadline_ms(&self) -> Option<u64> {
        self.core.runtime.interaction.leave_timer().deadline_ms()
    }

    /// Host window received mid-drag and not yet applied.
    #[must_use]
    pub fn pending_controlled_window(&self) -> Option<BrushWindow> {
        self.core.controlled.pending
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.core.runtime.unmounted
    }

    /// Area inside the track left for a miniature chart, after padding.
    #[must_use]
    pub fn panorama_area(&self) -> BrushGeometry {
        self.core.model.geometry.inset(self.core.config.padding)
    }

    /// Replaces the data array.
    ///
    /// A length change resets the window to the full range; same-length
    /// updates keep the committed window. An active drag is cancelled
    /// without a drag-end notification.
    pub fn set_data(&mut self, values: Vec<DomainValue>) {
        if self.core.runtime.unmounted {
            return;
        }
        if self.is_dragging() {
            debug!("data replaced mid-drag; cancelling drag session");
            self.cancel_drag_session();
        }

        let previous_len = self.core.model.values.len();
        let len = values.len();
        self.core.model.values = values;

        let window = if len == previous_len {
            self.core.model.window.and_then(|window| window.clamped(len))
        } else {
            None
        };
        self.core.model.window = window.or_else(|| BrushWindow::full(len));
        if len != previous_len {
            self.core.controlled.last_controlled = None;
        }

        self.rebuild_scale();
        self.sync_travellers_from_window();
        self.sync_text_visibility();
    }

    /// Applies new layout. Travellers are re-derived from the committed window.
    pub fn set_geometry(&mut self, geometry: BrushGeometry) {
        if self.core.runtime.unmounted || geometry == self.core.model.geometry {
            return;
        }
        if !geometry.is_renderable() {
            warn!(?geometry, "brush geometry is degenerate; travellers stay hidden");
        }
        self.core.model.geometry = geometry;
        self.rebuild_scale();
        if self.core.model.scale.is_none() && self.is_dragging() {
            self.cancel_drag_session();
        }
        self.sync_travellers_from_window();
    }

    pub fn set_config(&mut self, config: BrushConfig) -> BrushResult<()> {
        let config = validate_brush_config(config)?;
        self.core.config = config;
        self.sync_text_visibility();
        Ok(())
    }

    /// Reconciles a window driven by the host.
    ///
    /// Repeated values are ignored. While a drag is active the value is held
    /// and applied when the session ends. Returns `true` when applied now.
    pub fn set_controlled_window(&mut self, window: BrushWindow) -> bool {
        if self.core.runtime.unmounted {
            return false;
        }
        let Some(window) = window.clamped(self.data_len()) else {
            return false;
        };
        if self.core.controlled.last_controlled == Some(window) {
            return false;
        }
        self.core.controlled.last_controlled = Some(window);

        if self.is_dragging() {
            debug!(
                start_index = window.start_index,
                end_index = window.end_index,
                "deferring controlled window until drag ends"
            );
            self.core.controlled.pending = Some(window);
            return false;
        }

        self.apply_controlled_window(window)
    }

    /// Tears down timers and listeners; every later event is ignored.
    pub fn unmount(&mut self) {
        if self.core.runtime.unmounted {
            return;
        }
        self.core.runtime.interaction.end_drag();
        self.core.runtime.drag_listeners = None;
        self.core.controlled.pending = None;
        self.core.runtime.unmounted = true;
        debug!("brush unmounted");
    }

    pub(super) fn context(&self) -> BrushContext {
        BrushContext {
            window: self.core.model.window,
            travellers: self.core.model.travellers,
            data_len: self.data_len(),
            mode: self.mode(),
            labels_visible: self.labels_visible(),
        }
    }

    pub(super) fn emit(&mut self, event: BrushEvent) {
        let context = self.context();
        for listener in &mut self.core.runtime.listeners {
            listener.on_event(event, context);
        }
    }

    /// Stores `window` and emits `Changed` unless it equals the committed one.
    pub(super) fn commit_window(&mut self, window: BrushWindow) -> bool {
        if self.core.model.window == Some(window) {
            return false;
        }
        self.core.model.window = Some(window);
        self.emit(BrushEvent::Changed(window));
        true
    }

    pub(super) fn sync_text_visibility(&mut self) {
        let visible = self.labels_visible();
        if visible != self.core.runtime.labels_visible {
            self.core.runtime.labels_visible = visible;
            self.emit(BrushEvent::TextVisibilityChanged { visible });
        }
    }

    /// Drops the drag session without notifying drag end.
    pub(super) fn cancel_drag_session(&mut self) {
        self.core.runtime.interaction.end_drag();
        self.core.runtime.drag_listeners = None;
        if let Some(pending) = self.core.controlled.pending.take() {
            if let Some(window) = pending.clamped(self.data_len()) {
                self.core.model.window = Some(window);
            }
        }
    }

    pub(super) fn apply_controlled_window(&mut self, window: BrushWindow) -> bool {
        let changed = self.core.model.window != Some(window);
        self.core.model.window = Some(window);
        self.sync_travellers_from_window();
        changed
    }

    fn rebuild_scale(&mut self) {
        let geometry = self.core.model.geometry;
        let len = self.core.model.values.len();
        if let Some(scale) = &self.core.model.scale {
            if scale.is_built_from(len, geometry.x, geometry.width, geometry.traveller_width) {
                return;
            }
        }

        self.core.model.scale = if geometry.is_renderable() {
            PositionalScale::build(len, geometry.x, geometry.width, geometry.traveller_width)
        } else {
            None
        };
        debug!(
            data_len = len,
            built = self.core.model.scale.is_some(),
            "rebuilt brush positional scale"
        );
    }

    pub(super) fn sync_travellers_from_window(&mut self) {
        self.core.model.travellers = match (&self.core.model.scale, self.core.model.window) {
            (Some(scale), Some(window)) => scale
                .coordinate_at(window.start_index)
                .zip(scale.coordinate_at(window.end_index))
                .map(|(start_x, end_x)| TravellerPositions { start_x, end_x }),
            _ => None,
        };
    }
}
