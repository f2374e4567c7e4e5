//! An absolutely-positioned, animated, reorderable grid widget.
//!
//! Every item occupies a fixed-size cell and is positioned absolutely
//! inside one measured container, so reordering, filtering, and resizing
//! never rebuild the tree: items keep their nodes and animate to their new
//! origins. The pieces:
//!
//! - **Items**: The [`GridItem`] trait (or [`FieldBindings`] overrides)
//!   tells the grid how to key, sort, and filter your type
//! - **Layout**: [`LayoutOptions`] and [`GridLayout`] turn a container
//!   width into columns, cell origins, and a container height
//! - **Styles**: Each item renders with a [`StyleDescriptor`] carrying its
//!   origin, opacity, and an optional CSS-style [`Transition`]
//! - **View**: [`GridView`] owns the items, measures the container through
//!   the [`Viewport`] seam, and emits one [`GridFrame`] per render pass
//! - **Drag**: pointer presses and moves reorder items through the
//!   [`moved`](GridView::moved) signal
//!
//! # Example
//!
//! ```
//! use slotgrid::{GridItem, GridView, ManualViewport, SortKey, StyleDescriptor};
//!
//! struct Photo {
//!     id: u64,
//!     taken: i64,
//!     trashed: bool,
//! }
//!
//! impl GridItem for Photo {
//!     type Key = u64;
//!
//!     fn key(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn sort_key(&self) -> SortKey {
//!         SortKey::Int(self.taken)
//!     }
//!
//!     fn filtered(&self) -> bool {
//!         self.trashed
//!     }
//! }
//!
//! let viewport = ManualViewport::with_width(420.0);
//! let mut view = GridView::new(viewport.clone())
//!     .with_items(vec![
//!         Photo { id: 1, taken: 2022, trashed: false },
//!         Photo { id: 2, taken: 2019, trashed: false },
//!         Photo { id: 3, taken: 2024, trashed: true },
//!     ])
//!     .with_responsive(true);
//!
//! // Hosts re-render whenever a measurement changes the width.
//! view.resized.connect(|width| println!("now {width}px wide"));
//!
//! view.mount();
//! viewport.run_frames(); // the host's frame scheduler
//!
//! let frame = view.render(&mut |photo: &Photo, style: &StyleDescriptor| {
//!     (photo.id, style.origin)
//! });
//!
//! // 420px fits three 128px columns; the trashed photo keeps its node
//! // but fades out in place.
//! assert_eq!(frame.children.len(), 3);
//! assert_eq!(frame.height, 127.0);
//! ```

pub mod drag;
pub mod error;
pub mod index;
pub mod item;
pub mod layout;
pub mod render;
pub mod style;
pub mod view;
pub mod viewport;

pub use slotgrid_core::{
    ConnectionGuard, ConnectionId, FrameGate, Point, Property, Rect, Signal, Size,
    FALLBACK_FRAME_DELAY,
};

pub use drag::{DragManager, DragMove, DragState};
pub use error::{Error, Result};
pub use index::SlotIndex;
pub use item::{FieldBindings, FilterFn, GridItem, ItemKey, KeyFn, SortKey, SortKeyFn};
pub use layout::{GridLayout, LayoutOptions, Placement};
pub use render::{GridChild, GridFrame, ItemRenderer};
pub use style::{Easing, StyleDescriptor, Transition, TransitionProperty, DRAG_Z_INDEX};
pub use view::GridView;
pub use viewport::{
    FrameCallback, ManualViewport, ResizeCallback, ResizeSubscription, Viewport,
};
