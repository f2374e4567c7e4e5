//! Grid placement arithmetic.
//!
//! [`GridLayout`] is a pure plan computed from a [`LayoutOptions`] and a
//! measured container width. Slots map to pixel origins and back through
//! plain row/column arithmetic; nothing here touches items, signals, or the
//! host. The view rebuilds the plan whenever the width or the options
//! change.
//!
//! # Example
//!
//! ```
//! use slotgrid::layout::{GridLayout, LayoutOptions};
//!
//! let options = LayoutOptions {
//!     item_width: 100.0,
//!     item_height: 100.0,
//!     vertical_margin: 0.0,
//!     zoom: 1.0,
//! };
//! let layout = GridLayout::new(&options, 350.0);
//!
//! assert_eq!(layout.columns(), 3);
//! assert_eq!(layout.origin(4), slotgrid::Point::new(100.0, 100.0));
//! assert_eq!(layout.total_height(7), 300.0);
//! ```

use slotgrid_core::{Point, Size};

use crate::error::{Error, Result};
use crate::style::{StyleDescriptor, Transition, DRAG_Z_INDEX};

/// Grid configuration.
///
/// All distances are in pixels before the `zoom` factor is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Width of one cell.
    pub item_width: f32,
    /// Height of one cell.
    pub item_height: f32,
    /// Extra vertical distance between row origins.
    ///
    /// May be negative: the default of `-1.0` overlaps adjacent rows by one
    /// pixel so stacked cell borders collapse into a single line.
    pub vertical_margin: f32,
    /// Scale factor applied to both cell dimensions.
    pub zoom: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            item_width: 128.0,
            item_height: 128.0,
            vertical_margin: -1.0,
            zoom: 1.0,
        }
    }
}

impl LayoutOptions {
    /// Check the options for values the arithmetic cannot work with.
    ///
    /// Dimensions and zoom must be finite and positive; the margin must be
    /// finite but may be negative.
    pub fn validate(&self) -> Result<()> {
        if !self.item_width.is_finite() || self.item_width <= 0.0 {
            return Err(Error::invalid_options("item_width", self.item_width));
        }
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(Error::invalid_options("item_height", self.item_height));
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(Error::invalid_options("zoom", self.zoom));
        }
        if !self.vertical_margin.is_finite() {
            return Err(Error::invalid_options(
                "vertical_margin",
                self.vertical_margin,
            ));
        }
        Ok(())
    }
}

/// Where an item sits during one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Occupies the given visible slot.
    Visible(usize),
    /// Filtered out; parks at the slot its full-sequence ordinal would
    /// occupy so the fade-out happens where the item last sat.
    Hidden(usize),
    /// Dragged; pinned to the given origin above the rest of the grid.
    Floating(Point),
}

/// Positions computed for one `(options, container width)` pair.
///
/// The derived quantities are fixed at construction. Forward mapping
/// ([`origin`](Self::origin)) and inverse mapping ([`slot_at`](Self::slot_at))
/// share them, so the two can never disagree about where a slot is.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    column_width: f32,
    row_height: f32,
    cell_height: f32,
    columns: usize,
}

impl GridLayout {
    /// Build the plan for a measured container width.
    ///
    /// Zero and negative widths are the caller's responsibility; the view
    /// takes its placeholder path instead of constructing a plan for an
    /// unmeasured container.
    pub fn new(options: &LayoutOptions, container_width: f32) -> Self {
        debug_assert!(
            container_width > 0.0,
            "layout built for unmeasured container"
        );

        let column_width = options.item_width * options.zoom;
        let row_height = options.item_height * options.zoom;
        let columns = ((container_width / column_width).floor() as usize).max(1);

        Self {
            column_width,
            row_height,
            cell_height: row_height + options.vertical_margin,
            columns,
        }
    }

    /// Number of columns; at least 1 even when the container is narrower
    /// than one cell.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Size one item is given.
    #[inline]
    pub fn cell_size(&self) -> Size {
        Size::new(self.column_width, self.row_height)
    }

    /// Vertical distance between row origins.
    ///
    /// Smaller than the item height when the margin is negative; rows then
    /// overlap by that amount.
    #[inline]
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Top-left corner of a slot.
    pub fn origin(&self, slot: usize) -> Point {
        let row = slot / self.columns;
        let col = slot % self.columns;
        Point::new(
            col as f32 * self.column_width,
            row as f32 * self.cell_height,
        )
    }

    /// Slot under a pointer position, clamped into `0..visible`.
    ///
    /// Positions outside the grid rectangle resolve to the nearest valid
    /// slot; the result is always addressable when `visible > 0`.
    pub fn slot_at(&self, p: Point, visible: usize) -> usize {
        let col = ((p.x / self.column_width).floor() as isize)
            .clamp(0, self.columns as isize - 1) as usize;
        let row = ((p.y / self.cell_height).floor() as isize).max(0) as usize;
        // The row cast saturates for degenerate coordinates
        let slot = row.saturating_mul(self.columns).saturating_add(col);
        slot.min(visible.saturating_sub(1))
    }

    /// Produce the style for one item given its placement.
    ///
    /// `animation` rides along for the grid-anchored placements. A floating
    /// item never animates, so it tracks the pointer without easing lag.
    pub fn style(&self, placement: Placement, animation: Option<&Transition>) -> StyleDescriptor {
        let size = self.cell_size();
        match placement {
            Placement::Visible(slot) => StyleDescriptor {
                origin: self.origin(slot),
                size,
                opacity: 1.0,
                pointer_events: true,
                z_index: 0,
                transition: animation.cloned(),
            },
            Placement::Hidden(ordinal) => StyleDescriptor {
                origin: self.origin(ordinal),
                size,
                opacity: 0.0,
                pointer_events: false,
                z_index: 0,
                transition: animation.cloned(),
            },
            Placement::Floating(origin) => StyleDescriptor {
                origin,
                size,
                opacity: 1.0,
                pointer_events: false,
                z_index: DRAG_Z_INDEX,
                transition: None,
            },
        }
    }

    /// Height of the grid box holding `visible` items.
    pub fn total_height(&self, visible: usize) -> f32 {
        if visible == 0 {
            return 0.0;
        }
        visible.div_ceil(self.columns) as f32 * self.cell_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_options(side: f32, margin: f32) -> LayoutOptions {
        LayoutOptions {
            item_width: side,
            item_height: side,
            vertical_margin: margin,
            zoom: 1.0,
        }
    }

    #[test]
    fn test_columns_from_width() {
        let layout = GridLayout::new(&square_options(100.0, 0.0), 350.0);
        assert_eq!(layout.columns(), 3);

        // Narrower than one cell still yields a single column
        let narrow = GridLayout::new(&square_options(100.0, 0.0), 40.0);
        assert_eq!(narrow.columns(), 1);
    }

    #[test]
    fn test_zoom_scales_cells() {
        let mut options = square_options(128.0, 0.0);
        options.zoom = 0.5;

        let layout = GridLayout::new(&options, 350.0);
        assert_eq!(layout.cell_size(), Size::new(64.0, 64.0));
        assert_eq!(layout.columns(), 5); // 350 / 64
    }

    #[test]
    fn test_origin_row_column_walk() {
        let layout = GridLayout::new(&square_options(100.0, 0.0), 350.0);

        assert_eq!(layout.origin(0), Point::new(0.0, 0.0));
        assert_eq!(layout.origin(2), Point::new(200.0, 0.0));
        assert_eq!(layout.origin(4), Point::new(100.0, 100.0)); // row 1, col 1
    }

    #[test]
    fn test_negative_margin_shrinks_cell_height() {
        let layout = GridLayout::new(&square_options(100.0, -1.0), 350.0);
        assert_eq!(layout.cell_height(), 99.0);
        assert_eq!(layout.origin(3), Point::new(0.0, 99.0));
    }

    #[test]
    fn test_default_options() {
        let options = LayoutOptions::default();
        let layout = GridLayout::new(&options, 400.0);

        assert_eq!(layout.cell_size(), Size::new(128.0, 128.0));
        assert_eq!(layout.cell_height(), 127.0); // 128 - 1
        assert_eq!(layout.columns(), 3);
    }

    #[test]
    fn test_total_height() {
        let layout = GridLayout::new(&square_options(100.0, 0.0), 350.0);

        assert_eq!(layout.total_height(0), 0.0);
        assert_eq!(layout.total_height(3), 100.0);
        assert_eq!(layout.total_height(7), 300.0); // 3 rows
    }

    #[test]
    fn test_slot_at_inverts_origin() {
        let layout = GridLayout::new(&square_options(100.0, 0.0), 350.0);

        for slot in 0..7 {
            let center = layout.origin(slot) + Point::new(50.0, 50.0);
            assert_eq!(layout.slot_at(center, 7), slot);
        }
    }

    #[test]
    fn test_slot_at_clamps_outside_positions() {
        let layout = GridLayout::new(&square_options(100.0, 0.0), 350.0);

        // Left of and above the grid
        assert_eq!(layout.slot_at(Point::new(-40.0, -500.0), 7), 0);
        // Right of the last column lands in that row's last column
        assert_eq!(layout.slot_at(Point::new(900.0, 50.0), 7), 2);
        // Far below the grid clamps to the last visible slot
        assert_eq!(layout.slot_at(Point::new(50.0, 9000.0), 7), 6);
        // Even past any representable row
        assert_eq!(layout.slot_at(Point::new(0.0, f32::MAX), 7), 6);
    }

    #[test]
    fn test_slot_at_with_collapsed_rows() {
        // A margin of -side cancels the row height entirely
        let layout = GridLayout::new(&square_options(100.0, -100.0), 350.0);
        assert_eq!(layout.cell_height(), 0.0);

        // Any point below the top edge is past every row
        assert_eq!(layout.slot_at(Point::new(50.0, 10.0), 7), 6);
        // Above the grid still resolves to the top row
        assert_eq!(layout.slot_at(Point::new(150.0, -5.0), 7), 1);
    }

    #[test]
    fn test_visible_style() {
        let layout = GridLayout::new(&square_options(100.0, 0.0), 350.0);
        let animation = Transition::default();

        let style = layout.style(Placement::Visible(4), Some(&animation));
        assert_eq!(style.origin, Point::new(100.0, 100.0));
        assert_eq!(style.size, Size::new(100.0, 100.0));
        assert_eq!(style.opacity, 1.0);
        assert!(style.pointer_events);
        assert_eq!(style.z_index, 0);
        assert_eq!(style.transition, Some(animation));
    }

    #[test]
    fn test_hidden_style_parks_at_ordinal() {
        let layout = GridLayout::new(&square_options(100.0, 0.0), 350.0);

        let style = layout.style(Placement::Hidden(3), None);
        assert_eq!(style.origin, Point::new(0.0, 100.0));
        assert_eq!(style.opacity, 0.0);
        assert!(!style.pointer_events);
    }

    #[test]
    fn test_floating_style_suppresses_transition() {
        let layout = GridLayout::new(&square_options(100.0, 0.0), 350.0);
        let animation = Transition::default();

        let style = layout.style(
            Placement::Floating(Point::new(37.0, 12.0)),
            Some(&animation),
        );
        assert_eq!(style.origin, Point::new(37.0, 12.0));
        assert_eq!(style.z_index, DRAG_Z_INDEX);
        assert!(!style.pointer_events);
        assert_eq!(style.transition, None); // Tracks the pointer exactly
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut options = LayoutOptions::default();
        assert!(options.validate().is_ok());

        options.item_width = 0.0;
        assert!(options.validate().is_err());

        options = LayoutOptions::default();
        options.zoom = f32::NAN;
        assert!(options.validate().is_err());

        // Negative margins are valid configuration
        options = LayoutOptions::default();
        options.vertical_margin = -40.0;
        assert!(options.validate().is_ok());
    }
}
