use std::fmt;
use std::rc::Rc;

/// Host hook for window-level pointer-move / pointer-up / touch-end listeners.
///
/// The brush attaches these only while a drag session is active so a release
/// outside the brush still ends the drag. Implementations use interior
/// mutability; calls happen on the UI thread.
pub trait GlobalPointerListeners {
    fn attach(&self);
    fn detach(&self);
}

/// Host without window-level listeners (headless use, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPointerListeners;

impl GlobalPointerListeners for NoopPointerListeners {
    fn attach(&self) {}
    fn detach(&self) {}
}

/// Keeps global listeners attached for exactly as long as it lives.
///
/// Dropping the guard detaches, which covers drag end, leave timeout,
/// unmount, controller drop and unwinding out of a panicking handler.
pub struct DragListenerGuard {
    host: Rc<dyn GlobalPointerListeners>,
}

impl DragListenerGuard {
    #[must_use]
    pub fn acquire(host: Rc<dyn GlobalPointerListeners>) -> Self {
        host.attach();
        Self { host }
    }
}

impl Drop for DragListenerGuard {
    fn drop(&mut self) {
        self.host.detach();
    }
}

impl fmt::Debug for DragListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragListenerGuard").finish_non_exhaustive()
    }
}
