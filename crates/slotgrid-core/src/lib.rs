//! Core systems for slotgrid.
//!
//! This crate provides the foundational pieces shared by the slotgrid widget
//! crate, with no knowledge of items or grids:
//!
//! - **Geometry**: Plain `f32` points, sizes, and rectangles
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Value cells with change detection
//! - **Frame Gate**: Single-slot coalescing for bursty update sources
//!
//! # Signal/Slot Example
//!
//! ```
//! use slotgrid_core::{Property, Signal};
//!
//! // A measured width with change notification
//! let width = Property::new(0.0_f32);
//! let width_changed = Signal::<f32>::new();
//!
//! width_changed.connect(|w| {
//!     println!("width is now {w}");
//! });
//!
//! // `set` reports whether the value actually changed, so redundant
//! // measurements never fan out.
//! if width.set(640.0) {
//!     width_changed.emit(width.get());
//! }
//! assert!(!width.set(640.0));
//! ```
//!
//! # Frame Gate Example
//!
//! ```
//! use slotgrid_core::FrameGate;
//!
//! let gate = FrameGate::new();
//!
//! // A burst of events arms the gate exactly once.
//! assert!(gate.arm());
//! assert!(!gate.arm());
//! assert!(!gate.arm());
//!
//! // The scheduled callback consumes the armed state and does the work.
//! assert!(gate.disarm());
//! ```

pub mod frame;
pub mod geometry;
pub mod logging;
pub mod property;
pub mod signal;

pub use frame::{FrameGate, FALLBACK_FRAME_DELAY};
pub use geometry::{Point, Rect, Size};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
