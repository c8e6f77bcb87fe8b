use std::fmt;

use tracing::trace;

use crate::core::{
    graph::EdgeLike,
    network::{LinkId, Network, NetworkLink},
};

use super::{graph::GraphView, node::NodeView};

/// View of a single directed network link.
///
/// Both endpoints are wrapped into fresh [`NodeView`]s when the edge view is
/// built. They are never shared with node views obtained elsewhere, but
/// compare equal to them.
///
/// Edge views are only obtained from a [`GraphView`] or from the views it
/// hands out, so the wrapped link always belongs to the viewed network.
///
/// ```compile_fail
/// use netview::{core::Network, infra::testing::sample_network, view::{EdgeView, GraphView}};
///
/// let network = sample_network();
/// let graph = GraphView::new("sample", &network);
/// let edge = EdgeView::new(&graph, network.link_at(0).unwrap());
/// ```
pub struct EdgeView<'a, N: Network> {
    link: &'a N::Link,
    key: String,
    source: NodeView<'a, N>,
    target: NodeView<'a, N>,
}

impl<'a, N: Network> EdgeView<'a, N> {
    pub(crate) fn new(graph: &'a GraphView<N>, link: &'a N::Link) -> Self {
        let key = link.id().to_string();
        trace!(graph = graph.id(), edge = %key, "creating edge view");

        let network = graph.network();

        Self {
            link,
            key,
            source: NodeView::new(graph, network.source(link)),
            target: NodeView::new(graph, network.target(link)),
        }
    }

    pub fn id(&self) -> &'a LinkId<N> {
        self.link.id()
    }

    /// Textual form of the link identifier.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn source(&self) -> &NodeView<'a, N> {
        &self.source
    }

    pub fn target(&self) -> &NodeView<'a, N> {
        &self.target
    }

    /// Network links are always directed.
    pub fn is_directed(&self) -> bool {
        true
    }

    /// The wrapped network link.
    pub fn domain(&self) -> &'a N::Link {
        self.link
    }

    pub fn into_endpoints(self) -> (NodeView<'a, N>, NodeView<'a, N>) {
        (self.source, self.target)
    }
}

impl<'a, N: Network> EdgeLike for EdgeView<'a, N> {
    type Node = NodeView<'a, N>;

    fn key(&self) -> &str {
        EdgeView::key(self)
    }

    fn source(&self) -> &Self::Node {
        EdgeView::source(self)
    }

    fn target(&self) -> &Self::Node {
        EdgeView::target(self)
    }

    fn is_directed(&self) -> bool {
        EdgeView::is_directed(self)
    }
}

impl<N: Network> Clone for EdgeView<'_, N> {
    fn clone(&self) -> Self {
        Self {
            link: self.link,
            key: self.key.clone(),
            source: self.source.clone(),
            target: self.target.clone(),
        }
    }
}

impl<N: Network> fmt::Debug for EdgeView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeView")
            .field("key", &self.key)
            .field("source", &self.source.key())
            .field("target", &self.target.key())
            .finish()
    }
}
