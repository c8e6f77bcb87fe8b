//! Generic graph contract exposed to graph consumers.
//!
//! Consumers such as renderers or exporters work against [`GraphLike`],
//! [`NodeLike`] and [`EdgeLike`] only. Elements are addressed by their textual
//! keys and by their position in the graph's collections.

use super::{attr::AttrValue, error::ViewError};

pub trait EdgeLike {
    type Node: NodeLike;

    fn key(&self) -> &str;
    fn source(&self) -> &Self::Node;
    fn target(&self) -> &Self::Node;
    fn is_directed(&self) -> bool;

    /// Returns the endpoint on the other side of `node`, or `None` if `node`
    /// is not an endpoint of this edge.
    fn opposite(&self, node: &Self::Node) -> Option<&Self::Node> {
        if self.source().key() == node.key() {
            Some(self.target())
        } else if self.target().key() == node.key() {
            Some(self.source())
        } else {
            None
        }
    }
}

pub trait NodeLike {
    type Edge: EdgeLike;

    type EdgesIter: Iterator<Item = Self::Edge>;
    type DirectedEdgesIter: Iterator<Item = Self::Edge>;

    fn key(&self) -> &str;

    fn attribute(&self, key: &str) -> Option<&AttrValue>;
    fn set_attribute(&mut self, key: &str, value: AttrValue) -> Option<AttrValue>;
    fn remove_attribute(&mut self, key: &str) -> Option<AttrValue>;

    fn in_degree(&self) -> usize;
    fn out_degree(&self) -> usize;

    fn degree(&self) -> usize {
        self.in_degree() + self.out_degree()
    }

    /// Incident edge at the given position, counting entering edges first.
    fn edge_at(&self, index: usize) -> Result<Self::Edge, ViewError>;
    fn entering_edge_at(&self, index: usize) -> Result<Self::Edge, ViewError>;
    fn leaving_edge_at(&self, index: usize) -> Result<Self::Edge, ViewError>;

    /// All incident edges, entering edges first.
    fn edges(&self) -> Self::EdgesIter;
    fn entering_edges(&self) -> Self::DirectedEdgesIter;
    fn leaving_edges(&self) -> Self::DirectedEdgesIter;

    /// First edge leaving this node and entering `other`.
    fn edge_toward(&self, other: &Self) -> Option<Self::Edge>;

    /// First edge leaving `other` and entering this node.
    fn edge_from(&self, other: &Self) -> Option<Self::Edge>;

    /// Edge connecting this node and `other` in any direction. The edge from
    /// `other` is preferred.
    fn edge_between(&self, other: &Self) -> Option<Self::Edge> {
        self.edge_from(other).or_else(|| self.edge_toward(other))
    }

    fn attach_edge(&mut self, edge: &Self::Edge) -> Result<(), ViewError>;
    fn detach_edge(&mut self, edge: &Self::Edge) -> Result<(), ViewError>;
}

pub trait GraphLike {
    type Node<'a>: NodeLike
    where
        Self: 'a;

    type Edge<'a>: EdgeLike
    where
        Self: 'a;

    type NodesIter<'a>: Iterator<Item = Self::Node<'a>>
    where
        Self: 'a;

    type EdgesIter<'a>: Iterator<Item = Self::Edge<'a>>
    where
        Self: 'a;

    fn id(&self) -> &str;

    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    fn node(&self, key: &str) -> Result<Self::Node<'_>, ViewError>;
    fn node_at(&self, index: usize) -> Result<Self::Node<'_>, ViewError>;
    fn edge(&self, key: &str) -> Result<Self::Edge<'_>, ViewError>;
    fn edge_at(&self, index: usize) -> Result<Self::Edge<'_>, ViewError>;

    fn nodes(&self) -> Self::NodesIter<'_>;
    fn edges(&self) -> Self::EdgesIter<'_>;

    fn contains_node(&self, key: &str) -> bool {
        self.node(key).is_ok()
    }

    fn contains_edge(&self, key: &str) -> bool {
        self.edge(key).is_ok()
    }

    fn add_node(&mut self, key: &str) -> Result<(), ViewError>;
    fn remove_node(&mut self, key: &str) -> Result<(), ViewError>;
    fn add_edge(&mut self, key: &str, from: &str, to: &str) -> Result<(), ViewError>;
    fn remove_edge(&mut self, key: &str) -> Result<(), ViewError>;
    fn clear(&mut self) -> Result<(), ViewError>;
}
