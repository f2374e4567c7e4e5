//! Renderer capability and render-pass output.
//!
//! The grid computes placement and style; the host turns them into
//! something paintable. [`ItemRenderer`] is that seam, and [`GridFrame`]
//! is what one pass hands back: a container height plus one
//! [`GridChild`] per item.

use crate::style::StyleDescriptor;

/// Builds one host node per item.
///
/// `Node` is whatever the host's retained tree holds: a DOM handle, a
/// widget id, a draw list. Any `FnMut(&T, &StyleDescriptor) -> N` closure
/// is a renderer, so simple hosts need no named type:
///
/// ```
/// use slotgrid::render::ItemRenderer;
/// use slotgrid::style::StyleDescriptor;
///
/// let mut renderer = |label: &String, style: &StyleDescriptor| {
///     format!("{label}@{},{}", style.origin.x, style.origin.y)
/// };
/// # fn takes<R: ItemRenderer<String>>(_: &mut R) {}
/// # takes(&mut renderer);
/// ```
pub trait ItemRenderer<T> {
    /// Host node type.
    type Node;

    /// Produce the node for one item in its current style.
    fn render_item(&mut self, item: &T, style: &StyleDescriptor) -> Self::Node;
}

impl<T, N, F> ItemRenderer<T> for F
where
    F: FnMut(&T, &StyleDescriptor) -> N,
{
    type Node = N;

    fn render_item(&mut self, item: &T, style: &StyleDescriptor) -> N {
        self(item, style)
    }
}

/// One rendered item.
#[derive(Debug, Clone, PartialEq)]
pub struct GridChild<K, N> {
    /// The item's key.
    pub key: K,
    /// Visible slot, `None` for filtered items.
    pub slot: Option<usize>,
    /// Style the node was rendered with.
    pub style: StyleDescriptor,
    /// The host node.
    pub node: N,
}

/// Output of one render pass.
///
/// `children` keeps the input collection order rather than slot order, so
/// retained hosts can match nodes to the previous pass by position and let
/// the styles animate items to their new places instead of re-creating
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame<K, N> {
    /// Height the container should take.
    pub height: f32,
    /// One entry per item, in input collection order.
    pub children: Vec<GridChild<K, N>>,
}

impl<K, N> GridFrame<K, N> {
    /// The empty frame rendered while the grid is not ready.
    ///
    /// Hosts must still mount it: the zero-height container node is what
    /// the viewport measures, and without it an unmeasured container could
    /// never produce a first real layout.
    pub fn placeholder() -> Self {
        Self {
            height: 0.0,
            children: Vec::new(),
        }
    }

    /// Whether the frame holds no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
