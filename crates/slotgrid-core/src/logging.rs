//! Logging facilities for slotgrid.
//!
//! Slotgrid crates instrument themselves with the `tracing` crate and never
//! install a subscriber; that is the host application's job:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Application code...
//! }
//! ```
//!
//! Log volume is kept predictable: recoverable oddities (duplicate item keys,
//! zero-width measurements) log at `warn`, state transitions at `debug`, and
//! per-frame chatter at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, for
/// example `RUST_LOG=slotgrid::drag=debug`.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "slotgrid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "slotgrid_core::signal";
    /// Layout computation target.
    pub const LAYOUT: &str = "slotgrid::layout";
    /// Sort/filter indexing target.
    pub const INDEX: &str = "slotgrid::index";
    /// Drag reorder target.
    pub const DRAG: &str = "slotgrid::drag";
    /// Grid view lifecycle target.
    pub const VIEW: &str = "slotgrid::view";
}
