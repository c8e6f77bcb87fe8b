use std::fmt;

use tracing::{debug, trace, warn};

use crate::core::{
    attr::POSITION_ATTR,
    error::{ElementKind, ViewError},
    graph::GraphLike,
    id::{display_eq, IdType},
    network::{LinkId, Network, NodeId},
};

use super::{
    edge::EdgeView,
    iter::{EdgeBridge, NodeBridge},
    node::NodeView,
};

/// Options of a [`GraphView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    position_attr: Option<String>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            position_attr: Some(String::from(POSITION_ATTR)),
        }
    }
}

impl ViewOptions {
    /// Attribute under which node views publish the node coordinate. `None`
    /// disables publishing. Defaults to [`POSITION_ATTR`].
    pub fn position_attr(self, position_attr: Option<&str>) -> Self {
        Self {
            position_attr: position_attr.map(String::from),
        }
    }

    pub fn get_position_attr(&self) -> Option<&str> {
        self.position_attr.as_deref()
    }
}

/// Graph-shaped view of a transportation network.
///
/// The view holds the network (typically a shared reference to it) and an
/// identifier of its own. It has no node or edge storage: every query is
/// answered from the network's collections and the returned [`NodeView`]s and
/// [`EdgeView`]s are built on demand.
///
/// The network must not change while views derived from it are alive. With
/// `N = &Network` this is enforced by the borrow checker.
///
/// # Examples
///
/// ```
/// use netview::{core::Coord, storage::MemoryNetwork, view::GraphView};
///
/// let mut network = MemoryNetwork::new();
/// network.add_node("A", Coord::new(0.0, 0.0));
/// network.add_node("B", Coord::new(50.0, 20.0));
/// network.add_link("L1", "A", "B");
///
/// let graph = GraphView::new("city", &network);
/// let b = graph.node_by_key("B").unwrap();
///
/// assert_eq!(b.in_degree(), 1);
/// assert_eq!(b.edge_from(&graph.node_by_key("A").unwrap()).unwrap().key(), "L1");
/// ```
pub struct GraphView<N> {
    id: String,
    network: N,
    options: ViewOptions,
}

impl<N: Network> GraphView<N> {
    pub fn new(id: impl Into<String>, network: N) -> Self {
        Self::with_options(id, network, ViewOptions::default())
    }

    pub fn with_options(id: impl Into<String>, network: N, options: ViewOptions) -> Self {
        let id = id.into();
        trace!(graph = %id, "creating graph view");

        Self {
            id,
            network,
            options,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The network this view projects.
    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn into_inner(self) -> N {
        self.network
    }

    pub fn node_count(&self) -> usize {
        self.network.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.network.link_count()
    }

    pub fn node(&self, id: &NodeId<N>) -> Result<NodeView<'_, N>, ViewError> {
        match self.network.node(id) {
            Some(node) => Ok(NodeView::new(self, node)),
            None => {
                debug!(graph = %self.id, node = %id, "node lookup missed");
                Err(ViewError::not_found(ElementKind::Node, id))
            }
        }
    }

    /// Looks the node up by the textual form of its identifier.
    pub fn node_by_key(&self, key: &str) -> Result<NodeView<'_, N>, ViewError> {
        match NodeId::<N>::parse_id(key) {
            Some(id) if display_eq(&id, key) => self.node(&id),
            _ => {
                debug!(graph = %self.id, node = key, "node key is not a valid identifier");
                Err(ViewError::not_found(ElementKind::Node, key))
            }
        }
    }

    /// Returns the node at the given position of the network's node
    /// collection.
    pub fn node_at(&self, index: usize) -> Result<NodeView<'_, N>, ViewError> {
        self.network
            .node_at(index)
            .map(|node| NodeView::new(self, node))
            .ok_or_else(|| ViewError::out_of_range(ElementKind::Node, index, self.node_count()))
    }

    pub fn edge(&self, id: &LinkId<N>) -> Result<EdgeView<'_, N>, ViewError> {
        match self.network.link(id) {
            Some(link) => Ok(EdgeView::new(self, link)),
            None => {
                debug!(graph = %self.id, edge = %id, "edge lookup missed");
                Err(ViewError::not_found(ElementKind::Edge, id))
            }
        }
    }

    /// Looks the edge up by the textual form of its identifier.
    pub fn edge_by_key(&self, key: &str) -> Result<EdgeView<'_, N>, ViewError> {
        match LinkId::<N>::parse_id(key) {
            Some(id) if display_eq(&id, key) => self.edge(&id),
            _ => {
                debug!(graph = %self.id, edge = key, "edge key is not a valid identifier");
                Err(ViewError::not_found(ElementKind::Edge, key))
            }
        }
    }

    /// Returns the edge at the given position of the network's link
    /// collection.
    pub fn edge_at(&self, index: usize) -> Result<EdgeView<'_, N>, ViewError> {
        self.network
            .link_at(index)
            .map(|link| EdgeView::new(self, link))
            .ok_or_else(|| ViewError::out_of_range(ElementKind::Edge, index, self.edge_count()))
    }

    pub fn nodes(&self) -> NodeBridge<'_, N, N::NodesIter<'_>> {
        NodeBridge::new(self, self.network.nodes())
    }

    pub fn edges(&self) -> EdgeBridge<'_, N, N::LinksIter<'_>> {
        EdgeBridge::new(self, self.network.links())
    }

    fn reject(&self, operation: &'static str) -> ViewError {
        warn!(graph = %self.id, operation, "structural mutation of a read-only view rejected");
        ViewError::unsupported(operation)
    }
}

impl<N: Network> GraphLike for GraphView<N> {
    type Node<'a> = NodeView<'a, N>
    where
        Self: 'a;

    type Edge<'a> = EdgeView<'a, N>
    where
        Self: 'a;

    type NodesIter<'a> = NodeBridge<'a, N, N::NodesIter<'a>>
    where
        Self: 'a;

    type EdgesIter<'a> = EdgeBridge<'a, N, N::LinksIter<'a>>
    where
        Self: 'a;

    fn id(&self) -> &str {
        GraphView::id(self)
    }

    fn node_count(&self) -> usize {
        GraphView::node_count(self)
    }

    fn edge_count(&self) -> usize {
        GraphView::edge_count(self)
    }

    fn node(&self, key: &str) -> Result<Self::Node<'_>, ViewError> {
        self.node_by_key(key)
    }

    fn node_at(&self, index: usize) -> Result<Self::Node<'_>, ViewError> {
        GraphView::node_at(self, index)
    }

    fn edge(&self, key: &str) -> Result<Self::Edge<'_>, ViewError> {
        self.edge_by_key(key)
    }

    fn edge_at(&self, index: usize) -> Result<Self::Edge<'_>, ViewError> {
        GraphView::edge_at(self, index)
    }

    fn nodes(&self) -> Self::NodesIter<'_> {
        GraphView::nodes(self)
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        GraphView::edges(self)
    }

    fn add_node(&mut self, _key: &str) -> Result<(), ViewError> {
        Err(self.reject("add_node"))
    }

    fn remove_node(&mut self, _key: &str) -> Result<(), ViewError> {
        Err(self.reject("remove_node"))
    }

    fn add_edge(&mut self, _key: &str, _from: &str, _to: &str) -> Result<(), ViewError> {
        Err(self.reject("add_edge"))
    }

    fn remove_edge(&mut self, _key: &str) -> Result<(), ViewError> {
        Err(self.reject("remove_edge"))
    }

    fn clear(&mut self) -> Result<(), ViewError> {
        Err(self.reject("clear"))
    }
}

impl<N: Network> fmt::Debug for GraphView<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphView")
            .field("id", &self.id)
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::{
            attr::AttrValue,
            graph::{EdgeLike, NodeLike},
            id::Id,
            network::Coord,
        },
        infra::{
            proptest::network,
            testing::{check_consistency, create_grid, sample_network},
        },
        storage::MemoryNetwork,
    };

    #[test]
    fn counts() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn scenario_middle_node() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);

        let a = graph.node_by_key("A").unwrap();
        let b = graph.node_by_key("B").unwrap();

        assert_eq!(b.in_degree(), 1);
        assert_eq!(b.out_degree(), 1);
        assert_eq!(b.degree(), 2);
        assert!(b.edge_to(&a).is_none());
        assert_eq!(
            b.edge_from(&a).map(|edge| edge.key().to_owned()),
            Some("L1".into())
        );
    }

    #[test]
    fn node_at_out_of_range() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);

        assert_matches!(
            graph.node_at(99),
            Err(ViewError::IndexOutOfRange {
                kind: ElementKind::Node,
                index: 99,
                len: 3
            })
        );
        assert_matches!(
            graph.edge_at(2),
            Err(ViewError::IndexOutOfRange {
                kind: ElementKind::Edge,
                index: 2,
                len: 2
            })
        );
    }

    #[test]
    fn edge_not_found() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);

        assert_eq!(
            graph.edge_by_key("L99").err(),
            Some(ViewError::not_found(ElementKind::Edge, "L99"))
        );
        assert_eq!(
            graph.node(&Id::from("Z")).err(),
            Some(ViewError::not_found(ElementKind::Node, "Z"))
        );
    }

    #[test]
    fn unparsable_key_not_found() {
        let mut network = numbered::Network::default();
        network.nodes.push(numbered::Node(7));
        let graph = GraphView::new("numbered", &network);

        assert_eq!(
            graph.node_by_key("7").map(|node| node.key().to_owned()),
            Ok("7".into())
        );
        assert_matches!(
            graph.node_by_key("seven"),
            Err(ViewError::NotFound {
                kind: ElementKind::Node,
                ..
            })
        );
    }

    #[test]
    fn non_canonical_key_not_found() {
        let mut network = numbered::Network::default();
        network.nodes.push(numbered::Node(7));
        let graph = GraphView::new("numbered", &network);

        for key in ["007", "+7", " 7"] {
            assert_matches!(
                graph.node_by_key(key),
                Err(ViewError::NotFound {
                    kind: ElementKind::Node,
                    ..
                })
            );
        }
    }

    #[test]
    fn positional_access() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);

        assert_eq!(graph.node_at(1).unwrap().key(), "B");
        assert_eq!(graph.edge_at(1).unwrap().key(), "L2");
    }

    #[test]
    fn nodes_in_collection_order() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);

        let keys = graph
            .nodes()
            .map(|node| node.key().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn nodes_not_restartable() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);

        let mut first = graph.nodes();
        first.next();
        first.next();

        // A second bridge starts from the beginning, independently of the
        // first one.
        let mut second = graph.nodes();
        assert_eq!(second.next().unwrap().key(), "A");
        assert_eq!(first.next().unwrap().key(), "C");
        assert!(first.next().is_none());
        assert_eq!(second.count(), 2);
    }

    #[test]
    fn fresh_views_are_equal() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);

        let by_key = graph.node_by_key("C").unwrap();
        let by_index = graph.node_at(2).unwrap();
        let by_edge = graph.edge_by_key("L2").unwrap();

        assert_eq!(by_key, by_index);
        assert_eq!(&by_key, by_edge.target());
    }

    #[test]
    fn position_attribute() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);
        let b = graph.node_by_key("B").unwrap();

        assert_eq!(
            b.attribute(POSITION_ATTR).and_then(AttrValue::as_coord),
            Some(Coord::new(100.0, 0.0))
        );

        let options = ViewOptions::default().position_attr(None);
        let graph = GraphView::with_options("bare", &network, options);
        let b = graph.node_by_key("B").unwrap();
        assert!(b.attribute(POSITION_ATTR).is_none());

        let options = ViewOptions::default().position_attr(Some("pos"));
        let graph = GraphView::with_options("custom", &network, options);
        let b = graph.node_by_key("B").unwrap();
        assert!(b.attribute(POSITION_ATTR).is_none());
        assert!(b.attribute("pos").is_some());
    }

    #[test]
    fn mutation_unsupported() {
        let network = sample_network();
        let mut graph = GraphView::new("sample", &network);

        assert_matches!(
            graph.add_node("D"),
            Err(ViewError::Unsupported {
                operation: "add_node"
            })
        );
        assert_matches!(graph.remove_node("A"), Err(ViewError::Unsupported { .. }));
        assert_matches!(
            graph.add_edge("L3", "C", "A"),
            Err(ViewError::Unsupported { .. })
        );
        assert_matches!(graph.remove_edge("L1"), Err(ViewError::Unsupported { .. }));
        assert_matches!(
            graph.clear(),
            Err(ViewError::Unsupported { operation: "clear" })
        );

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn generic_consumer() {
        fn summary<G: GraphLike>(graph: &G) -> (usize, usize, usize) {
            let degree_sum = graph.nodes().map(|node| node.degree()).sum();
            let directed = graph.edges().filter(|edge| edge.is_directed()).count();
            (graph.node_count(), degree_sum, directed)
        }

        let network = create_grid(3, 2);
        let graph = GraphView::new("grid", &network);

        let (node_count, degree_sum, directed) = summary(&graph);
        assert_eq!(node_count, 6);
        assert_eq!(degree_sum, 2 * graph.edge_count());
        assert_eq!(directed, graph.edge_count());
    }

    #[test]
    fn owned_network() {
        let graph = GraphView::new("owned", sample_network());

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.into_inner().link_count(), 2);
    }

    #[test]
    fn consistency() {
        let network = create_grid(4, 3);
        let graph = GraphView::new("grid", &network);

        check_consistency(&graph).unwrap();
    }

    #[test]
    fn empty_network() {
        let network = MemoryNetwork::new();
        let graph = GraphView::new("empty", &network);

        assert_eq!(graph.nodes().count(), 0);
        assert!(!graph.edges().has_next());
        assert_matches!(
            graph.node_at(0),
            Err(ViewError::IndexOutOfRange { len: 0, .. })
        );
    }

    proptest! {
        #[test]
        fn proptest_degree_matches_network(network in network(32)) {
            let graph = GraphView::new("prop", &network);

            for node in network.nodes() {
                let view = graph.node(node.id()).unwrap();
                let expected = network.in_links(node).count() + network.out_links(node).count();
                prop_assert_eq!(view.degree(), expected);
            }
        }

        #[test]
        fn proptest_edge_endpoints(network in network(32)) {
            let graph = GraphView::new("prop", &network);

            for link in network.links() {
                let edge = graph.edge(link.id()).unwrap();
                prop_assert_eq!(edge.source().key(), network.source(link).id().as_str());
                prop_assert_eq!(edge.target().key(), network.target(link).id().as_str());
                prop_assert!(edge.is_directed());
            }
        }

        #[test]
        fn proptest_nodes_iteration(network in network(32)) {
            let graph = GraphView::new("prop", &network);

            let keys = graph.nodes().map(|node| node.key().to_owned()).collect::<Vec<_>>();
            let expected = network.nodes().map(|node| node.id().to_string()).collect::<Vec<_>>();

            prop_assert_eq!(keys.len(), graph.node_count());
            prop_assert_eq!(keys, expected);
        }

        #[test]
        fn proptest_consistency(network in network(32)) {
            let graph = GraphView::new("prop", &network);
            prop_assert_eq!(check_consistency(&graph), Ok(()));
        }
    }

    // Network with integer identifiers, exercising non-textual id types.
    mod numbered {
        use std::{iter, slice};

        use crate::core::{
            marker::Direction,
            network::{Coord, NetworkLink, NetworkNode},
        };

        #[derive(Debug)]
        pub struct Node(pub u32);

        #[derive(Debug)]
        pub struct Link(u32);

        impl NetworkNode for Node {
            type Id = u32;

            fn id(&self) -> &u32 {
                &self.0
            }

            fn coord(&self) -> Coord {
                Coord::new(self.0 as f64, 0.0)
            }
        }

        impl NetworkLink for Link {
            type Id = u32;

            fn id(&self) -> &u32 {
                &self.0
            }
        }

        #[derive(Debug, Default)]
        pub struct Network {
            pub nodes: Vec<Node>,
        }

        impl crate::core::network::Network for Network {
            type Node = Node;
            type Link = Link;

            type NodesIter<'a> = slice::Iter<'a, Node>;
            type LinksIter<'a> = iter::Empty<&'a Link>;
            type IncidentIter<'a> = iter::Empty<&'a Link>;

            fn node_count(&self) -> usize {
                self.nodes.len()
            }

            fn link_count(&self) -> usize {
                0
            }

            fn nodes(&self) -> Self::NodesIter<'_> {
                self.nodes.iter()
            }

            fn links(&self) -> Self::LinksIter<'_> {
                iter::empty()
            }

            fn node(&self, id: &u32) -> Option<&Node> {
                self.nodes.iter().find(|node| node.0 == *id)
            }

            fn link(&self, _id: &u32) -> Option<&Link> {
                None
            }

            fn source<'a>(&'a self, _link: &'a Link) -> &'a Node {
                unreachable!("network has no links")
            }

            fn target<'a>(&'a self, _link: &'a Link) -> &'a Node {
                unreachable!("network has no links")
            }

            fn incident_links<'a>(
                &'a self,
                _node: &'a Node,
                _dir: Direction,
            ) -> Self::IncidentIter<'a> {
                iter::empty()
            }
        }
    }
}
