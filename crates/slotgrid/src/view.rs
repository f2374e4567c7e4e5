//! The grid container widget.
//!
//! [`GridView`] ties the pieces together: it owns the items, watches the
//! container width through the [`Viewport`] seam, and turns both into a
//! [`GridFrame`] on demand. Hosts connect to its signals the way they
//! would on any widget:
//!
//! - `moved(key, to_slot)` fires once per distinct candidate slot while an
//!   item is dragged; the host responds by updating the sort fields of its
//!   items.
//! - `resized(width)` fires when a measurement actually changed the width;
//!   the host responds by calling [`render`](GridView::render) again.
//!
//! Width measurement is coalesced: any number of resize events between two
//! paints arm a single [`FrameGate`], the measurement itself happens in the
//! frame callback, and the value applied is the latest at flush time.

use std::sync::Arc;

use slotgrid_core::{FrameGate, Point, Property, Signal};

use crate::drag::DragManager;
use crate::index::SlotIndex;
use crate::item::{FieldBindings, GridItem, SortKey};
use crate::layout::{GridLayout, LayoutOptions, Placement};
use crate::render::{GridChild, GridFrame, ItemRenderer};
use crate::style::Transition;
use crate::viewport::{ResizeSubscription, Viewport};

/// An absolutely-positioned, animated, reorderable grid of items.
///
/// Construct with [`new`](Self::new), configure with the consuming `with_*`
/// methods, then [`mount`](Self::mount) once the host container exists.
pub struct GridView<T, V>
where
    T: GridItem,
    V: Viewport + Send + Sync + 'static,
{
    // Items and configuration
    items: Vec<T>,
    options: LayoutOptions,
    animation: Option<Transition>,
    responsive: bool,
    drag_enabled: bool,
    bindings: FieldBindings<T>,

    // Measurement
    viewport: Arc<V>,
    width: Arc<Property<f32>>,
    gate: Arc<FrameGate>,
    resize_subscription: Option<ResizeSubscription>,
    mounted: bool,

    // Drag
    drag: DragManager<T::Key>,

    // Signals
    /// Emitted once per distinct candidate slot while an item is dragged.
    ///
    /// Carries `(key, to_slot)`. Same-slot pointer jitter never fires.
    pub moved: Signal<(T::Key, usize)>,
    /// Emitted when a measurement changed the container width.
    ///
    /// Shared with the detached measurement callback, hence the `Arc`.
    pub resized: Arc<Signal<f32>>,
}

impl<T, V> GridView<T, V>
where
    T: GridItem,
    V: Viewport + Send + Sync + 'static,
{
    /// Create an unmounted view over the given viewport.
    pub fn new(viewport: V) -> Self {
        Self {
            items: Vec::new(),
            options: LayoutOptions::default(),
            animation: Some(Transition::default()),
            responsive: false,
            drag_enabled: false,
            bindings: FieldBindings::default(),
            viewport: Arc::new(viewport),
            width: Arc::new(Property::new(0.0)),
            gate: Arc::new(FrameGate::new()),
            resize_subscription: None,
            mounted: false,
            drag: DragManager::new(),
            moved: Signal::new(),
            resized: Arc::new(Signal::new()),
        }
    }

    /// Sets the items using builder pattern.
    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    /// Sets the layout options using builder pattern.
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the position transition using builder pattern.
    pub fn with_animation(mut self, animation: Transition) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Disables position transitions using builder pattern.
    pub fn without_animation(mut self) -> Self {
        self.animation = None;
        self
    }

    /// Sets whether the view follows container resizes using builder pattern.
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    /// Sets whether items can be dragged using builder pattern.
    pub fn with_drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    /// Overrides the key accessor using builder pattern.
    pub fn with_key_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> T::Key + Send + Sync + 'static,
    {
        self.bindings.set_key_fn(f);
        self
    }

    /// Overrides the sort key accessor using builder pattern.
    pub fn with_sort_key_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> SortKey + Send + Sync + 'static,
    {
        self.bindings.set_sort_key_fn(f);
        self
    }

    /// Overrides the filter predicate using builder pattern.
    pub fn with_filter_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.bindings.set_filter_fn(f);
        self
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// The current items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the items wholesale.
    ///
    /// The next [`render`](Self::render) re-sorts and re-assigns slots; no
    /// incremental bookkeeping happens here.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current layout options.
    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Replace the layout options.
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    /// The position transition, if any.
    pub fn animation(&self) -> Option<&Transition> {
        self.animation.as_ref()
    }

    /// Replace the position transition. `None` disables animation.
    pub fn set_animation(&mut self, animation: Option<Transition>) {
        self.animation = animation;
    }

    /// Whether the view follows container resizes.
    pub fn is_responsive(&self) -> bool {
        self.responsive
    }

    /// Enable or disable resize following.
    ///
    /// Takes effect immediately when the view is mounted: enabling
    /// registers the resize listener, disabling deregisters it.
    pub fn set_responsive(&mut self, responsive: bool) {
        self.responsive = responsive;

        if self.mounted {
            if responsive && self.resize_subscription.is_none() {
                self.resize_subscription = Some(self.subscribe_resize());
            } else if !responsive {
                self.resize_subscription = None;
            }
        }
    }

    /// Whether items can be dragged.
    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Enable or disable dragging. Disabling ends any active drag.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
        if !enabled {
            self.drag.end();
        }
    }

    // =========================================================================
    // Lifecycle and measurement
    // =========================================================================

    /// Attach the view to its container.
    ///
    /// Registers the resize listener when the view is responsive and
    /// schedules the initial width measurement. The first layout and every
    /// later reflow share the same coalesced frame path.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!(target: "slotgrid::view", "mounted");

        if self.responsive {
            self.resize_subscription = Some(self.subscribe_resize());
        }
        schedule_measure(&self.gate, &self.viewport, &self.width, &self.resized);
    }

    /// Detach the view from its container.
    ///
    /// The resize listener is removed synchronously and a pending
    /// measurement frame becomes a no-op. Dropping the view does the same.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.resize_subscription = None;
        self.gate.disarm();
        self.drag.end();
        tracing::debug!(target: "slotgrid::view", "unmounted");
    }

    /// Whether the view is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The last applied container width. Zero until the first measurement.
    pub fn width(&self) -> f32 {
        self.width.get()
    }

    fn subscribe_resize(&self) -> ResizeSubscription {
        let gate = Arc::clone(&self.gate);
        let viewport = Arc::clone(&self.viewport);
        let width = Arc::clone(&self.width);
        let resized = Arc::clone(&self.resized);

        self.viewport.on_resize(Box::new(move || {
            schedule_measure(&gate, &viewport, &width, &resized);
        }))
    }

    /// The layout for the current width and options, when both are usable.
    ///
    /// A width that is not finite and positive never reaches the layout;
    /// hosts can report `NaN` during their own teardown.
    fn current_layout(&self) -> Option<GridLayout> {
        let width = self.width.get();
        if !width.is_finite() || width <= 0.0 || self.options.validate().is_err() {
            return None;
        }
        Some(GridLayout::new(&self.options, width))
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Run one layout pass and render every item.
    ///
    /// Returns [`GridFrame::placeholder`] while the grid is not ready: no
    /// items, no usable container width, or invalid options. The placeholder
    /// must still be mounted by the host so the container can be measured.
    ///
    /// Children are emitted in input collection order, so retained hosts
    /// keep node identity across re-sorts and animate position changes.
    pub fn render<R>(&mut self, renderer: &mut R) -> GridFrame<T::Key, R::Node>
    where
        R: ItemRenderer<T>,
    {
        if self.items.is_empty() {
            tracing::debug!(target: "slotgrid::view", "placeholder frame, no items");
            return GridFrame::placeholder();
        }
        let layout = match self.current_layout() {
            Some(layout) => layout,
            None => {
                tracing::debug!(target: "slotgrid::view", "placeholder frame, grid not ready");
                return GridFrame::placeholder();
            }
        };

        let index = SlotIndex::build(&self.items, &self.bindings);
        let floating = self
            .drag
            .floating_origin()
            .map(|(key, origin)| (key.clone(), origin));

        let mut children = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let key = self.bindings.key_of(item);
            let slot = index.slot_of(&key);

            let placement = match &floating {
                Some((dragged, origin)) if *dragged == key => Placement::Floating(*origin),
                _ => match slot {
                    Some(slot) => Placement::Visible(slot),
                    None => Placement::Hidden(index.ordinal_of(&key).unwrap_or(0)),
                },
            };

            let style = layout.style(placement, self.animation.as_ref());
            let node = renderer.render_item(item, &style);
            children.push(GridChild {
                key,
                slot,
                style,
                node,
            });
        }

        GridFrame {
            height: layout.total_height(index.visible_count()),
            children,
        }
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Begin dragging the item with `key` from the given pointer position.
    ///
    /// Ignored while dragging is disabled, the grid is not ready, or the
    /// key has no visible slot.
    pub fn press(&mut self, key: T::Key, pointer: Point) {
        if !self.drag_enabled {
            return;
        }
        let layout = match self.current_layout() {
            Some(layout) => layout,
            None => return,
        };

        let index = SlotIndex::build(&self.items, &self.bindings);
        let slot = match index.slot_of(&key) {
            Some(slot) => slot,
            None => {
                tracing::debug!(target: "slotgrid::view", "press ignored, key has no slot");
                return;
            }
        };

        self.drag.start(key, pointer, &layout, slot);
    }

    /// Feed a pointer movement for the active drag.
    ///
    /// Emits [`moved`](Self::moved) when the pointer crossed into a new
    /// slot. A no-op while no drag is active.
    pub fn drag_to(&mut self, pointer: Point) {
        if !self.drag.is_dragging() {
            return;
        }
        let layout = match self.current_layout() {
            Some(layout) => layout,
            None => return,
        };

        let visible = self
            .items
            .iter()
            .filter(|item| !self.bindings.filtered_of(item))
            .count();
        if visible == 0 {
            return;
        }

        if let Some(drag_move) = self.drag.update(pointer, &layout, visible) {
            self.moved.emit((drag_move.key, drag_move.to_slot));
        }
    }

    /// End the active drag. Safe to call repeatedly.
    pub fn release(&mut self) {
        self.drag.end();
    }

    /// Whether an item is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Key of the dragged item, if any.
    pub fn dragging_key(&self) -> Option<&T::Key> {
        self.drag.dragging_key()
    }
}

impl<T, V> Drop for GridView<T, V>
where
    T: GridItem,
    V: Viewport + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Arm the gate and, when it was idle, queue the measurement frame.
///
/// Free function so the detached resize listener and the mount path share
/// one implementation.
fn schedule_measure<V>(
    gate: &Arc<FrameGate>,
    viewport: &Arc<V>,
    width: &Arc<Property<f32>>,
    resized: &Arc<Signal<f32>>,
) where
    V: Viewport + Send + Sync + 'static,
{
    if !gate.arm() {
        tracing::trace!(target: "slotgrid::view", "measurement already pending");
        return;
    }

    let gate = Arc::clone(gate);
    let measured_viewport = Arc::clone(viewport);
    let width = Arc::clone(width);
    let resized = Arc::clone(resized);

    viewport.request_frame(Box::new(move || {
        if !gate.disarm() {
            // Unmounted while the frame was pending
            return;
        }

        let measured = measured_viewport.width();
        if !measured.is_finite() || measured <= 0.0 {
            tracing::warn!(target: "slotgrid::view", "container measured unusable width {}", measured);
        }
        if width.set(measured) {
            tracing::debug!(target: "slotgrid::view", "container width now {}", measured);
            resized.emit(measured);
        }
    }));
}
