use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::BrushWindow;
use crate::interaction::{BrushInteractionMode, TravellerId, TravellerPositions};

/// Read-only brush snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushContext {
    pub window: Option<BrushWindow>,
    pub travellers: Option<TravellerPositions>,
    pub data_len: usize,
    pub mode: BrushInteractionMode,
    pub labels_visible: bool,
}

/// What started a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushDragKind {
    Traveller(TravellerId),
    Slide,
}

/// Event stream exposed to brush listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushEvent {
    /// A new window was committed by pointer, touch or keyboard input.
    Changed(BrushWindow),
    DragStarted(BrushDragKind),
    /// Fired once per drag session with the final committed window.
    DragEnded(BrushWindow),
    TextVisibilityChanged { visible: bool },
}

/// Observer interface for brush output.
///
/// Listeners see events and a context snapshot; they cannot reach into
/// controller internals.
pub trait BrushListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: BrushEvent, context: BrushContext);
}

type WindowCallback = Box<dyn FnMut(BrushWindow)>;

/// Closure-backed listener for the common `on_change` / `on_drag_end` pair.
pub struct BrushCallbacks {
    id: String,
    on_change: Option<WindowCallback>,
    on_drag_end: Option<WindowCallback>,
}

impl BrushCallbacks {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            on_change: None,
            on_drag_end: None,
        }
    }

    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(BrushWindow) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_drag_end(mut self, callback: impl FnMut(BrushWindow) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(callback));
        self
    }
}

impl BrushListener for BrushCallbacks {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: BrushEvent, _context: BrushContext) {
        match event {
            BrushEvent::Changed(window) => {
                if let Some(callback) = self.on_change.as_mut() {
                    callback(window);
                }
            }
            BrushEvent::DragEnded(window) => {
                if let Some(callback) = self.on_drag_end.as_mut() {
                    callback(window);
                }
            }
            BrushEvent::DragStarted(_) | BrushEvent::TextVisibilityChanged { .. } => {}
        }
    }
}

impl fmt::Debug for BrushCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrushCallbacks")
            .field("id", &self.id)
            .field("on_change", &self.on_change.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}
