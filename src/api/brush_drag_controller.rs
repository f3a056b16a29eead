use tracing::{debug, trace};

use crate::core::BrushWindow;
use crate::extensions::{BrushDragKind, BrushEvent};
use crate::interaction::{BrushInteractionMode, DragListenerGuard, TouchInput, TravellerId};

use super::BrushController;

impl BrushController {
    /// Starts dragging one traveller. Returns `false` when ignored.
    pub fn traveller_pointer_down(&mut self, id: TravellerId, page_x: f64) -> bool {
        self.start_drag_session(BrushInteractionMode::TravellerDragging(id), page_x)
    }

    /// Starts dragging the whole window.
    pub fn slide_pointer_down(&mut self, page_x: f64) -> bool {
        self.start_drag_session(BrushInteractionMode::SlideDragging, page_x)
    }

    /// Feeds a move from the global listener.
    ///
    /// Returns `true` when the step committed a new window.
    pub fn pointer_move(&mut self, page_x: f64) -> bool {
        if self.core.runtime.unmounted || !page_x.is_finite() {
            return false;
        }
        match self.mode() {
            BrushInteractionMode::Idle => false,
            BrushInteractionMode::TravellerDragging(id) => self.move_traveller(id, page_x),
            BrushInteractionMode::SlideDragging => self.move_slide(page_x),
        }
    }

    /// Ends the drag session. Returns `true` when a session was active.
    pub fn pointer_up(&mut self) -> bool {
        self.end_drag_session()
    }

    /// Pointer left the brush; a drag in progress ends after the leave timeout.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        if self.core.runtime.unmounted {
            return;
        }
        let timeout_ms = self.core.config.leave_timeout_ms;
        self.core.runtime.interaction.arm_leave_timer(now_ms, timeout_ms);
    }

    /// Pointer came back; a pending leave timeout is cancelled.
    pub fn pointer_enter(&mut self) {
        if self.core.runtime.unmounted {
            return;
        }
        self.core.runtime.interaction.cancel_leave_timer();
    }

    /// Drives the leave timer. Returns `true` when it fired and ended a drag.
    pub fn advance_clock(&mut self, now_ms: u64) -> bool {
        if self.core.runtime.unmounted {
            return false;
        }
        if !self.core.runtime.interaction.leave_timer_fired(now_ms) {
            return false;
        }
        debug!(now_ms, "leave timeout fired; ending drag");
        self.end_drag_session()
    }

    pub fn traveller_touch_start(&mut self, id: TravellerId, touch: &TouchInput) -> bool {
        touch
            .primary()
            .is_some_and(|point| self.traveller_pointer_down(id, point.page_x))
    }

    pub fn slide_touch_start(&mut self, touch: &TouchInput) -> bool {
        touch
            .primary()
            .is_some_and(|point| self.slide_pointer_down(point.page_x))
    }

    pub fn touch_move(&mut self, touch: &TouchInput) -> bool {
        touch
            .primary()
            .is_some_and(|point| self.pointer_move(point.page_x))
    }

    pub fn touch_end(&mut self) -> bool {
        self.end_drag_session()
    }

    fn start_drag_session(&mut self, mode: BrushInteractionMode, page_x: f64) -> bool {
        if self.core.runtime.unmounted
            || self.is_dragging()
            || !page_x.is_finite()
            || self.core.model.travellers.is_none()
        {
            return false;
        }

        self.core.runtime.interaction.start_drag(mode, page_x);
        let host = self.core.runtime.pointer_host.clone();
        self.core.runtime.drag_listeners = Some(DragListenerGuard::acquire(host));

        let kind = match mode {
            BrushInteractionMode::TravellerDragging(id) => BrushDragKind::Traveller(id),
            _ => BrushDragKind::Slide,
        };
        debug!(?kind, page_x, "brush drag started");
        self.emit(BrushEvent::DragStarted(kind));
        self.sync_text_visibility();
        true
    }

    fn end_drag_session(&mut self) -> bool {
        if self.core.runtime.unmounted || !self.is_dragging() {
            return false;
        }

        self.core.runtime.interaction.end_drag();
        if let Some(pending) = self.core.controlled.pending.take() {
            self.apply_controlled_window(pending);
        }
        if let Some(window) = self.core.model.window {
            debug!(
                start_index = window.start_index,
                end_index = window.end_index,
                "brush drag ended"
            );
            self.emit(BrushEvent::DragEnded(window));
        }
        self.core.runtime.drag_listeners = None;
        self.sync_text_visibility();
        true
    }

    fn move_traveller(&mut self, id: TravellerId, page_x: f64) -> bool {
        let (Some(scale), Some(before)) = (&self.core.model.scale, self.core.model.travellers)
        else {
            return false;
        };
        let geometry = self.core.model.geometry;
        let gap = self.core.config.gap;

        let previous = before.get(id);
        let mut delta = page_x - self.core.runtime.interaction.last_pointer_x();
        if delta > 0.0 {
            delta = delta.min(geometry.track_end() - previous);
        } else if delta < 0.0 {
            delta = delta.max(geometry.track_start() - previous);
        }

        let mut after = before;
        after.set(id, previous + delta);
        let table = scale.coordinate_table();
        let window = table.range_to_indices(after.start_x, after.end_x, gap);
        let emit = reaches_gap_boundary(id, before.start_x, before.end_x, window, gap, table.last_index());

        self.core.runtime.interaction.track_pointer(page_x);
        self.core.model.travellers = Some(after);
        trace!(
            ?id,
            x = after.get(id),
            start_index = window.start_index,
            end_index = window.end_index,
            "traveller moved"
        );

        emit && self.commit_window(window)
    }

    fn move_slide(&mut self, page_x: f64) -> bool {
        let (Some(scale), Some(before)) = (&self.core.model.scale, self.core.model.travellers)
        else {
            return false;
        };
        let geometry = self.core.model.geometry;
        let gap = self.core.config.gap;

        let mut delta = page_x - self.core.runtime.interaction.last_pointer_x();
        if delta > 0.0 {
            delta = delta
                .min(geometry.track_end() - before.end_x)
                .min(geometry.track_end() - before.start_x);
        } else if delta < 0.0 {
            delta = delta
                .max(geometry.track_start() - before.start_x)
                .max(geometry.track_start() - before.end_x);
        }

        let after = before.shifted(delta);
        let window = scale
            .coordinate_table()
            .range_to_indices(after.start_x, after.end_x, gap);

        self.core.runtime.interaction.track_pointer(page_x);
        self.core.model.travellers = Some(after);
        trace!(
            start_index = window.start_index,
            end_index = window.end_index,
            "slide moved"
        );

        self.commit_window(window)
    }
}

/// Whether a traveller step lands on a boundary worth reporting.
///
/// Orientation is judged from the positions before the step. The moving
/// handle's own index must sit on a gap multiple, unless the window already
/// reaches the last record.
fn reaches_gap_boundary(
    id: TravellerId,
    start_x: f64,
    end_x: f64,
    window: BrushWindow,
    gap: usize,
    last_index: usize,
) -> bool {
    let gap = gap.max(1);
    let forward = end_x > start_x;
    let backward = end_x < start_x;
    let start_aligned = window.start_index % gap == 0;
    let end_aligned = window.end_index % gap == 0;
    let reaches_last = window.end_index == last_index;

    let moving_aligned = match id {
        TravellerId::Start => {
            if forward {
                start_aligned
            } else {
                end_aligned
            }
        }
        TravellerId::End => {
            if forward {
                end_aligned
            } else {
                start_aligned
            }
        }
    };

    moving_aligned || ((forward || backward) && reaches_last)
}
