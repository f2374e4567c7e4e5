//! Host capability seam.
//!
//! The grid never measures, paints, or schedules anything itself; it asks
//! the embedding host through [`Viewport`]. A host implementation wraps
//! whatever the application paints with (a DOM element, a toolkit widget, a
//! scene node) and provides three capabilities: synchronous width
//! measurement, resize notification, and before-next-paint scheduling.
//!
//! [`ManualViewport`] is the in-crate implementation for tests, demos, and
//! headless hosts, where resizes and frames happen only when the owner
//! says so.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use slotgrid_core::Property;

/// Callback invoked when the container's width may have changed.
pub type ResizeCallback = Box<dyn Fn() + Send + Sync>;

/// Callback scheduled to run once before the host's next paint.
pub type FrameCallback = Box<dyn FnOnce() + Send>;

/// Capabilities the embedding host provides to the grid.
pub trait Viewport {
    /// Current width of the container, in pixels.
    ///
    /// Zero is a valid answer for a container that has not been laid out
    /// yet; the view keeps its placeholder until a later measurement.
    fn width(&self) -> f32;

    /// Register a resize listener.
    ///
    /// Dropping the returned subscription deregisters the listener
    /// synchronously; no callback may run after the drop returns.
    fn on_resize(&self, callback: ResizeCallback) -> ResizeSubscription;

    /// Schedule a callback to run before the host's next paint.
    ///
    /// Hosts without a paint clock run callbacks from a timer after
    /// [`FALLBACK_FRAME_DELAY`](slotgrid_core::FALLBACK_FRAME_DELAY)
    /// instead.
    fn request_frame(&self, callback: FrameCallback);
}

/// RAII handle for a resize listener registration.
///
/// Returned by [`Viewport::on_resize`]; dropping it removes the listener.
pub struct ResizeSubscription {
    dismiss: Option<Box<dyn FnOnce() + Send>>,
}

impl ResizeSubscription {
    /// Wrap the host's deregistration action.
    pub fn new(dismiss: impl FnOnce() + Send + 'static) -> Self {
        Self {
            dismiss: Some(Box::new(dismiss)),
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(dismiss) = self.dismiss.take() {
            dismiss();
        }
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("active", &self.dismiss.is_some())
            .finish()
    }
}

new_key_type! {
    /// Key identifying one registered resize listener.
    struct ListenerId;
}

#[derive(Default)]
struct ManualViewportInner {
    width: Property<f32>,
    listeners: Mutex<SlotMap<ListenerId, Arc<dyn Fn() + Send + Sync>>>,
    frames: Mutex<Vec<FrameCallback>>,
}

/// Deterministic [`Viewport`] driven entirely by its owner.
///
/// Nothing happens spontaneously: [`set_width`](Self::set_width) followed
/// by [`emit_resize`](Self::emit_resize) simulates a container resize, and
/// [`run_frames`](Self::run_frames) plays the frame callbacks queued so
/// far. Clones share the same container, so a test can keep one clone to
/// drive events while the grid view owns another.
#[derive(Clone, Default)]
pub struct ManualViewport {
    inner: Arc<ManualViewportInner>,
}

impl ManualViewport {
    /// Create a viewport with zero width and no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a viewport already measured at `width`.
    pub fn with_width(width: f32) -> Self {
        let viewport = Self::default();
        viewport.inner.width.set_silent(width);
        viewport
    }

    /// Change the stored width without notifying listeners.
    pub fn set_width(&self, width: f32) {
        self.inner.width.set_silent(width);
    }

    /// Notify every registered resize listener.
    pub fn emit_resize(&self) {
        // Snapshot so a listener may drop its own subscription mid-call
        let listeners: Vec<_> = self.inner.listeners.lock().values().cloned().collect();
        for listener in listeners {
            listener();
        }
    }

    /// Run the frame callbacks queued so far and return how many ran.
    ///
    /// Callbacks queued while running belong to the next frame, as with a
    /// real paint clock.
    pub fn run_frames(&self) -> usize {
        let batch: Vec<_> = std::mem::take(&mut *self.inner.frames.lock());
        let count = batch.len();
        for frame in batch {
            frame();
        }
        count
    }

    /// Number of registered resize listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Number of frame callbacks waiting for [`run_frames`](Self::run_frames).
    pub fn pending_frames(&self) -> usize {
        self.inner.frames.lock().len()
    }
}

impl Viewport for ManualViewport {
    fn width(&self) -> f32 {
        self.inner.width.get()
    }

    fn on_resize(&self, callback: ResizeCallback) -> ResizeSubscription {
        let id = self.inner.listeners.lock().insert(Arc::from(callback));

        let inner = Arc::clone(&self.inner);
        ResizeSubscription::new(move || {
            inner.listeners.lock().remove(id);
        })
    }

    fn request_frame(&self, callback: FrameCallback) {
        self.inner.frames.lock().push(callback);
    }
}

impl fmt::Debug for ManualViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualViewport")
            .field("width", &self.width())
            .field("listeners", &self.listener_count())
            .field("pending_frames", &self.pending_frames())
            .finish()
    }
}

static_assertions::assert_impl_all!(ManualViewport: Send, Sync);
