mod listeners;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use listeners::{DragListenerGuard, GlobalPointerListeners, NoopPointerListeners};

/// One of the two brush handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravellerId {
    Start,
    End,
}

impl TravellerId {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Brush drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushInteractionMode {
    Idle,
    TravellerDragging(TravellerId),
    SlideDragging,
}

impl BrushInteractionMode {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Hover targets that reveal the index labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushRegion {
    Traveller(TravellerId),
    Slide,
}

/// Keys the brush reacts to while a traveller has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl BrushKey {
    /// Maps DOM-style key names (`"ArrowLeft"`, `"ArrowRight"`).
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub(crate) fn direction(self) -> Option<isize> {
        match self {
            Self::ArrowLeft => Some(-1),
            Self::ArrowRight => Some(1),
            Self::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub page_x: f64,
}

/// Touch event payload; only the first changed touch drives the brush.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchInput {
    pub changed_touches: SmallVec<[TouchPoint; 2]>,
}

impl TouchInput {
    #[must_use]
    pub fn single(page_x: f64) -> Self {
        let mut changed_touches = SmallVec::new();
        changed_touches.push(TouchPoint { page_x });
        Self { changed_touches }
    }

    #[must_use]
    pub fn primary(&self) -> Option<TouchPoint> {
        self.changed_touches.first().copied()
    }
}

/// Pixel positions of both travellers' left edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravellerPositions {
    pub start_x: f64,
    pub end_x: f64,
}

impl TravellerPositions {
    #[must_use]
    pub fn get(self, id: TravellerId) -> f64 {
        match id {
            TravellerId::Start => self.start_x,
            TravellerId::End => self.end_x,
        }
    }

    pub fn set(&mut self, id: TravellerId, x: f64) {
        match id {
            TravellerId::Start => self.start_x = x,
            TravellerId::End => self.end_x = x,
        }
    }

    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self {
            start_x: self.start_x + delta,
            end_x: self.end_x + delta,
        }
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.start_x.min(self.end_x)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.start_x.max(self.end_x)
    }
}

/// Debounced drag-release timer armed when the pointer leaves mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaveTimer {
    deadline_ms: Option<u64>,
}

impl LeaveTimer {
    pub fn arm(&mut self, now_ms: u64, timeout_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(timeout_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    #[must_use]
    pub fn is_armed(self) -> bool {
        self.deadline_ms.is_some()
    }

    #[must_use]
    pub fn deadline_ms(self) -> Option<u64> {
        self.deadline_ms
    }

    /// Disarms and returns `true` once `now_ms` reaches the deadline.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Pointer, hover and focus bookkeeping for one brush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushInteractionState {
    mode: BrushInteractionMode,
    last_pointer_x: f64,
    text_active: bool,
    focused: Option<TravellerId>,
    leave_timer: LeaveTimer,
}

impl Default for BrushInteractionState {
    fn default() -> Self {
        Self {
            mode: BrushInteractionMode::Idle,
            last_pointer_x: 0.0,
            text_active: false,
            focused: None,
            leave_timer: LeaveTimer::default(),
        }
    }
}

impl BrushInteractionState {
    #[must_use]
    pub fn mode(self) -> BrushInteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode.is_dragging()
    }

    #[must_use]
    pub fn last_pointer_x(self) -> f64 {
        self.last_pointer_x
    }

    #[must_use]
    pub fn text_active(self) -> bool {
        self.text_active
    }

    #[must_use]
    pub fn focused(self) -> Option<TravellerId> {
        self.focused
    }

    #[must_use]
    pub fn leave_timer(self) -> LeaveTimer {
        self.leave_timer
    }

    pub fn start_drag(&mut self, mode: BrushInteractionMode, page_x: f64) {
        self.mode = mode;
        self.last_pointer_x = page_x;
        self.leave_timer.cancel();
    }

    /// Records the pointer position consumed by a move step.
    pub fn track_pointer(&mut self, page_x: f64) {
        self.last_pointer_x = page_x;
        self.leave_timer.cancel();
    }

    pub fn end_drag(&mut self) {
        self.mode = BrushInteractionMode::Idle;
        self.leave_timer.cancel();
    }

    pub fn arm_leave_timer(&mut self, now_ms: u64, timeout_ms: u64) {
        if self.mode.is_dragging() {
            self.leave_timer.arm(now_ms, timeout_ms);
        }
    }

    pub fn cancel_leave_timer(&mut self) {
        self.leave_timer.cancel();
    }

    pub fn leave_timer_fired(&mut self, now_ms: u64) -> bool {
        self.leave_timer.fire_if_due(now_ms)
    }

    pub fn set_text_active(&mut self, active: bool) {
        self.text_active = active;
    }

    pub fn focus(&mut self, id: TravellerId) {
        self.focused = Some(id);
    }

    pub fn blur(&mut self, id: TravellerId) {
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Labels show while hovered, focused, dragging, or when forced on.
    #[must_use]
    pub fn labels_visible(self, always_show_text: bool) -> bool {
        always_show_text || self.text_active || self.focused.is_some() || self.mode.is_dragging()
    }
}
