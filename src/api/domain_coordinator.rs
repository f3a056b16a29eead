use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use tracing::debug;

use crate::core::BrushWindow;
use crate::extensions::{BrushContext, BrushEvent, BrushListener};

/// Consumer of the committed display window.
pub trait DomainObserver {
    fn on_window_changed(&mut self, window: BrushWindow, data_len: usize);
}

impl<F> DomainObserver for F
where
    F: FnMut(BrushWindow, usize),
{
    fn on_window_changed(&mut self, window: BrushWindow, data_len: usize) {
        self(window, data_len);
    }
}

/// Owner of the authoritative display window shared by axes and series.
pub struct DomainCoordinator {
    data_len: usize,
    window: Option<BrushWindow>,
    observers: Vec<Box<dyn DomainObserver>>,
}

impl DomainCoordinator {
    /// Starts on the full window of `data_len` records.
    #[must_use]
    pub fn new(data_len: usize) -> Self {
        Self {
            data_len,
            window: BrushWindow::full(data_len),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    #[must_use]
    pub fn window(&self) -> Option<BrushWindow> {
        self.window
    }

    pub fn add_observer(&mut self, observer: Box<dyn DomainObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Stores `window` clamped to the data. Returns `true` and notifies
    /// observers when the stored window changed.
    pub fn commit(&mut self, window: BrushWindow) -> bool {
        match self.store(window) {
            Some(window) => {
                self.notify(window);
                true
            }
            None => false,
        }
    }

    /// Resets to the full window when the record count changes.
    pub fn set_data_len(&mut self, data_len: usize) -> bool {
        if data_len == self.data_len {
            return false;
        }
        debug!(from = self.data_len, to = data_len, "data length changed; resetting window");
        self.data_len = data_len;
        self.window = BrushWindow::full(data_len);
        if let Some(window) = self.window {
            self.notify(window);
        }
        true
    }

    /// Visible records, `min..=max` of the window.
    #[must_use]
    pub fn visible_range(&self) -> Option<RangeInclusive<usize>> {
        self.window
            .map(|window| window.min_index()..=window.max_index())
    }

    #[must_use]
    pub fn visible_slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        match self.visible_range() {
            Some(range) if *range.end() < data.len() => &data[range],
            Some(range) if *range.start() < data.len() => &data[*range.start()..],
            _ => &[],
        }
    }

    /// Follows brush output: `Changed` and `DragEnded` windows are committed.
    pub fn apply_brush_event(&mut self, event: BrushEvent) -> bool {
        committed_window(event).is_some_and(|window| self.commit(window))
    }

    /// Clamps and stores `window`; `Some` with the stored value when it changed.
    fn store(&mut self, window: BrushWindow) -> Option<BrushWindow> {
        let window = window.clamped(self.data_len)?;
        if self.window == Some(window) {
            return None;
        }
        self.window = Some(window);
        Some(window)
    }

    fn notify(&mut self, window: BrushWindow) {
        let data_len = self.data_len;
        for observer in &mut self.observers {
            observer.on_window_changed(window, data_len);
        }
    }
}

fn committed_window(event: BrushEvent) -> Option<BrushWindow> {
    match event {
        BrushEvent::Changed(window) | BrushEvent::DragEnded(window) => Some(window),
        BrushEvent::DragStarted(_) | BrushEvent::TextVisibilityChanged { .. } => None,
    }
}

/// Brush listener forwarding committed windows into a shared coordinator.
///
/// Observers run after the coordinator borrow is released, so they may read
/// the shared coordinator. Observers added while a notification is being
/// dispatched first hear about the next change.
pub struct DomainCoordinatorLink {
    id: String,
    coordinator: Rc<RefCell<DomainCoordinator>>,
}

impl DomainCoordinatorLink {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        coordinator: Rc<RefCell<DomainCoordinator>>,
    ) -> Self {
        Self {
            id: id.into(),
            coordinator,
        }
    }
}

impl BrushListener for DomainCoordinatorLink {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: BrushEvent, _context: BrushContext) {
        let Some(window) = committed_window(event) else {
            return;
        };
        let (window, data_len, mut observers) = {
            let mut coordinator = self.coordinator.borrow_mut();
            let Some(window) = coordinator.store(window) else {
                return;
            };
            let observers = std::mem::take(&mut coordinator.observers);
            (window, coordinator.data_len, observers)
        };

        for observer in &mut observers {
            observer.on_window_changed(window, data_len);
        }

        let mut coordinator = self.coordinator.borrow_mut();
        observers.append(&mut coordinator.observers);
        coordinator.observers = observers;
    }
}
