use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::Chain,
};

use tracing::{trace, warn};

use crate::core::{
    attr::{AttrValue, Attributes},
    error::{ElementKind, ViewError},
    graph::NodeLike,
    id::display_eq,
    marker::Direction,
    network::{Coord, Network, NetworkNode, NodeId},
};

use super::{edge::EdgeView, graph::GraphView, iter::EdgeBridge};

/// View of a single network node.
///
/// The identity of a node view is the textual form of the wrapped node's
/// identifier. Two node views are equal whenever these are equal, regardless
/// of how or from which graph view they were obtained.
///
/// Degree and adjacency queries read the node's incident-link collections
/// from the network on every call.
///
/// Node views are only obtained from a [`GraphView`] or from the views it
/// hands out, so the wrapped node always belongs to the viewed network.
///
/// ```compile_fail
/// use netview::{core::Network, infra::testing::sample_network, view::{GraphView, NodeView}};
///
/// let network = sample_network();
/// let graph = GraphView::new("sample", &network);
/// let node = NodeView::new(&graph, network.node_at(0).unwrap());
/// ```
pub struct NodeView<'a, N: Network> {
    graph: &'a GraphView<N>,
    node: &'a N::Node,
    key: String,
    attrs: Attributes,
}

pub type IncidentEdges<'a, N> = EdgeBridge<'a, N, <N as Network>::IncidentIter<'a>>;
pub type AllIncidentEdges<'a, N> = EdgeBridge<
    'a,
    N,
    Chain<<N as Network>::IncidentIter<'a>, <N as Network>::IncidentIter<'a>>,
>;

impl<'a, N: Network> NodeView<'a, N> {
    pub(crate) fn new(graph: &'a GraphView<N>, node: &'a N::Node) -> Self {
        let key = node.id().to_string();
        trace!(graph = graph.id(), node = %key, "creating node view");

        let mut attrs = Attributes::new();
        if let Some(position_attr) = graph.options().get_position_attr() {
            attrs.set(position_attr, node.coord());
        }

        Self {
            graph,
            node,
            key,
            attrs,
        }
    }

    pub fn id(&self) -> &'a NodeId<N> {
        self.node.id()
    }

    /// Textual form of the node identifier.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn coord(&self) -> Coord {
        self.node.coord()
    }

    pub fn graph(&self) -> &'a GraphView<N> {
        self.graph
    }

    /// The wrapped network node.
    pub fn domain(&self) -> &'a N::Node {
        self.node
    }

    /// Checks whether this view stands for the given network node, comparing
    /// textual identifiers.
    pub fn wraps<T: NetworkNode + ?Sized>(&self, node: &T) -> bool {
        display_eq(node.id(), &self.key)
    }

    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    pub fn set_attribute(&mut self, key: &str, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.attrs.set(key, value)
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<AttrValue> {
        self.attrs.remove(key)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    pub fn degree_directed(&self, dir: Direction) -> usize {
        self.network().incident_count(self.node, dir)
    }

    pub fn in_degree(&self) -> usize {
        self.degree_directed(Direction::Incoming)
    }

    pub fn out_degree(&self) -> usize {
        self.degree_directed(Direction::Outgoing)
    }

    pub fn degree(&self) -> usize {
        self.in_degree() + self.out_degree()
    }

    /// Returns the incident edge at the given position, where the entering
    /// edges come first and the leaving edges follow.
    pub fn edge_at(&self, index: usize) -> Result<EdgeView<'a, N>, ViewError> {
        let in_degree = self.in_degree();

        let link = if index < in_degree {
            self.network()
                .incident_at(self.node, Direction::Incoming, index)
        } else {
            self.network()
                .incident_at(self.node, Direction::Outgoing, index - in_degree)
        };

        link.map(|link| EdgeView::new(self.graph, link))
            .ok_or_else(|| ViewError::out_of_range(ElementKind::Edge, index, self.degree()))
    }

    pub fn edge_directed_at(
        &self,
        index: usize,
        dir: Direction,
    ) -> Result<EdgeView<'a, N>, ViewError> {
        self.network()
            .incident_at(self.node, dir, index)
            .map(|link| EdgeView::new(self.graph, link))
            .ok_or_else(|| {
                ViewError::out_of_range(ElementKind::Edge, index, self.degree_directed(dir))
            })
    }

    pub fn entering_edge_at(&self, index: usize) -> Result<EdgeView<'a, N>, ViewError> {
        self.edge_directed_at(index, Direction::Incoming)
    }

    pub fn leaving_edge_at(&self, index: usize) -> Result<EdgeView<'a, N>, ViewError> {
        self.edge_directed_at(index, Direction::Outgoing)
    }

    /// Iterates over entering edges followed by leaving edges. A self-loop is
    /// yielded twice, once for each direction.
    pub fn edges(&self) -> AllIncidentEdges<'a, N> {
        let network = self.network();
        let links = network
            .in_links(self.node)
            .chain(network.out_links(self.node));

        EdgeBridge::new(self.graph, links)
    }

    pub fn edges_directed(&self, dir: Direction) -> IncidentEdges<'a, N> {
        EdgeBridge::new(self.graph, self.network().incident_links(self.node, dir))
    }

    pub fn entering_edges(&self) -> IncidentEdges<'a, N> {
        self.edges_directed(Direction::Incoming)
    }

    pub fn leaving_edges(&self) -> IncidentEdges<'a, N> {
        self.edges_directed(Direction::Outgoing)
    }

    /// Returns the first leaving edge, in collection order, that enters
    /// `other`.
    pub fn edge_to<M: Network>(&self, other: &NodeView<'_, M>) -> Option<EdgeView<'a, N>> {
        let network = self.network();

        network
            .out_links(self.node)
            .find(|link| other.wraps(network.target(link)))
            .map(|link| EdgeView::new(self.graph, link))
    }

    /// Returns the first entering edge, in collection order, that leaves
    /// `other`.
    pub fn edge_from<M: Network>(&self, other: &NodeView<'_, M>) -> Option<EdgeView<'a, N>> {
        let network = self.network();

        network
            .in_links(self.node)
            .find(|link| other.wraps(network.source(link)))
            .map(|link| EdgeView::new(self.graph, link))
    }

    /// Returns an edge connecting this node with `other`, trying the edge
    /// from `other` first.
    pub fn edge_between<M: Network>(&self, other: &NodeView<'_, M>) -> Option<EdgeView<'a, N>> {
        self.edge_from(other).or_else(|| self.edge_to(other))
    }

    fn network(&self) -> &'a N {
        self.graph.network()
    }

    fn reject(&self, operation: &'static str) -> ViewError {
        warn!(
            graph = self.graph.id(),
            node = %self.key,
            operation,
            "structural mutation of a read-only view rejected"
        );
        ViewError::unsupported(operation)
    }
}

impl<'a, N: Network> NodeLike for NodeView<'a, N> {
    type Edge = EdgeView<'a, N>;

    type EdgesIter = AllIncidentEdges<'a, N>;
    type DirectedEdgesIter = IncidentEdges<'a, N>;

    fn key(&self) -> &str {
        NodeView::key(self)
    }

    fn attribute(&self, key: &str) -> Option<&AttrValue> {
        NodeView::attribute(self, key)
    }

    fn set_attribute(&mut self, key: &str, value: AttrValue) -> Option<AttrValue> {
        NodeView::set_attribute(self, key, value)
    }

    fn remove_attribute(&mut self, key: &str) -> Option<AttrValue> {
        NodeView::remove_attribute(self, key)
    }

    fn in_degree(&self) -> usize {
        NodeView::in_degree(self)
    }

    fn out_degree(&self) -> usize {
        NodeView::out_degree(self)
    }

    fn edge_at(&self, index: usize) -> Result<Self::Edge, ViewError> {
        NodeView::edge_at(self, index)
    }

    fn entering_edge_at(&self, index: usize) -> Result<Self::Edge, ViewError> {
        NodeView::entering_edge_at(self, index)
    }

    fn leaving_edge_at(&self, index: usize) -> Result<Self::Edge, ViewError> {
        NodeView::leaving_edge_at(self, index)
    }

    fn edges(&self) -> Self::EdgesIter {
        NodeView::edges(self)
    }

    fn entering_edges(&self) -> Self::DirectedEdgesIter {
        NodeView::entering_edges(self)
    }

    fn leaving_edges(&self) -> Self::DirectedEdgesIter {
        NodeView::leaving_edges(self)
    }

    fn edge_toward(&self, other: &Self) -> Option<Self::Edge> {
        self.edge_to(other)
    }

    fn edge_from(&self, other: &Self) -> Option<Self::Edge> {
        NodeView::edge_from(self, other)
    }

    fn attach_edge(&mut self, _edge: &Self::Edge) -> Result<(), ViewError> {
        Err(self.reject("attach_edge"))
    }

    fn detach_edge(&mut self, _edge: &Self::Edge) -> Result<(), ViewError> {
        Err(self.reject("detach_edge"))
    }
}

impl<'a, 'b, N: Network, M: Network> PartialEq<NodeView<'b, M>> for NodeView<'a, N> {
    fn eq(&self, other: &NodeView<'b, M>) -> bool {
        self.key == other.key
    }
}

impl<N: Network> Eq for NodeView<'_, N> {}

impl<N: Network> Hash for NodeView<'_, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

// Manual impl, the derive would require `N: Clone`.
impl<N: Network> Clone for NodeView<'_, N> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            node: self.node,
            key: self.key.clone(),
            attrs: self.attrs.clone(),
        }
    }
}

impl<N: Network> fmt::Debug for NodeView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("graph", &self.graph.id())
            .field("key", &self.key)
            .field("coord", &self.coord())
            .finish()
    }
}

impl<N: Network> fmt::Display for NodeView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
