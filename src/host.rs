use eframe::egui::Rect;

/// Capabilities the menu needs from the embedding graph view. The plugin
/// never owns node data; it keeps a cloned handle and asks the host for the
/// rest.
pub trait GraphHost {
    type NodeId: Clone + PartialEq;

    /// Rendered bounding box of the node in screen-space pixels, if it is
    /// currently on screen.
    fn node_screen_rect(&self, node: &Self::NodeId) -> Option<Rect>;

    /// Clear the host's selection of the node.
    fn deselect(&mut self, node: &Self::NodeId);
}

/// Host interactions the menu reacts to, forwarded by the embedding view
/// each frame. Selection opens the menu; everything else dismisses it.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphEvent<N> {
    NodeSelected(N),
    Drag,
    Zoom,
    Pan,
    BackgroundClick,
}
