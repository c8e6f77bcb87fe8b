//! Interface consumed from a domain transportation network.
//!
//! A network owns a set of nodes and a set of directed links. Each node knows
//! its coordinate and the ordered collections of its incoming and outgoing
//! links, each link knows its two endpoints. Graph views borrow the network
//! through this interface and never copy or mutate its elements.
//!
//! Endpoint and incident-link resolution goes through the [`Network`] rather
//! than through the elements themselves, so that storages are free to keep
//! their elements in arenas and refer to them by index.

use super::{id::IdType, marker::Direction};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub trait NetworkNode {
    type Id: IdType;

    fn id(&self) -> &Self::Id;
    fn coord(&self) -> Coord;
}

pub trait NetworkLink {
    type Id: IdType;

    fn id(&self) -> &Self::Id;
}

pub type NodeId<N> = <<N as Network>::Node as NetworkNode>::Id;
pub type LinkId<N> = <<N as Network>::Link as NetworkLink>::Id;

pub trait Network {
    type Node: NetworkNode;
    type Link: NetworkLink;

    type NodesIter<'a>: Iterator<Item = &'a Self::Node>
    where
        Self: 'a;

    type LinksIter<'a>: Iterator<Item = &'a Self::Link>
    where
        Self: 'a;

    type IncidentIter<'a>: Iterator<Item = &'a Self::Link>
    where
        Self: 'a;

    fn node_count(&self) -> usize;
    fn link_count(&self) -> usize;

    /// Iterates over all nodes in the network's collection order.
    fn nodes(&self) -> Self::NodesIter<'_>;

    /// Iterates over all links in the network's collection order.
    fn links(&self) -> Self::LinksIter<'_>;

    fn node(&self, id: &NodeId<Self>) -> Option<&Self::Node>;
    fn link(&self, id: &LinkId<Self>) -> Option<&Self::Link>;

    /// Returns the node the link starts at.
    ///
    /// The link must belong to this network. Implementations may panic
    /// otherwise.
    fn source<'a>(&'a self, link: &'a Self::Link) -> &'a Self::Node;

    /// Returns the node the link ends at.
    ///
    /// The link must belong to this network. Implementations may panic
    /// otherwise.
    fn target<'a>(&'a self, link: &'a Self::Link) -> &'a Self::Node;

    /// Iterates over links incident to the node in the given direction, in the
    /// node's collection order.
    fn incident_links<'a>(&'a self, node: &'a Self::Node, dir: Direction)
        -> Self::IncidentIter<'a>;

    fn in_links<'a>(&'a self, node: &'a Self::Node) -> Self::IncidentIter<'a> {
        self.incident_links(node, Direction::Incoming)
    }

    fn out_links<'a>(&'a self, node: &'a Self::Node) -> Self::IncidentIter<'a> {
        self.incident_links(node, Direction::Outgoing)
    }

    fn incident_count(&self, node: &Self::Node, dir: Direction) -> usize {
        // Should be overridden by an efficient implementation whenever
        // possible.
        self.incident_links(node, dir).count()
    }

    fn incident_at<'a>(
        &'a self,
        node: &'a Self::Node,
        dir: Direction,
        index: usize,
    ) -> Option<&'a Self::Link> {
        self.incident_links(node, dir).nth(index)
    }

    fn node_at(&self, index: usize) -> Option<&Self::Node> {
        self.nodes().nth(index)
    }

    fn link_at(&self, index: usize) -> Option<&Self::Link> {
        self.links().nth(index)
    }

    fn contains_node(&self, id: &NodeId<Self>) -> bool {
        self.node(id).is_some()
    }

    fn contains_link(&self, id: &LinkId<Self>) -> bool {
        self.link(id).is_some()
    }
}

macro_rules! deref_network {
    ($($ref_kind:tt)*) => {
        impl<N> Network for $($ref_kind)* N
        where
            N: Network + ?Sized,
        {
            type Node = N::Node;
            type Link = N::Link;

            type NodesIter<'a> = N::NodesIter<'a>
            where
                Self: 'a;

            type LinksIter<'a> = N::LinksIter<'a>
            where
                Self: 'a;

            type IncidentIter<'a> = N::IncidentIter<'a>
            where
                Self: 'a;

            fn node_count(&self) -> usize {
                (**self).node_count()
            }

            fn link_count(&self) -> usize {
                (**self).link_count()
            }

            fn nodes(&self) -> Self::NodesIter<'_> {
                (**self).nodes()
            }

            fn links(&self) -> Self::LinksIter<'_> {
                (**self).links()
            }

            fn node(&self, id: &NodeId<Self>) -> Option<&Self::Node> {
                (**self).node(id)
            }

            fn link(&self, id: &LinkId<Self>) -> Option<&Self::Link> {
                (**self).link(id)
            }

            fn source<'a>(&'a self, link: &'a Self::Link) -> &'a Self::Node {
                (**self).source(link)
            }

            fn target<'a>(&'a self, link: &'a Self::Link) -> &'a Self::Node {
                (**self).target(link)
            }

            fn incident_links<'a>(
                &'a self,
                node: &'a Self::Node,
                dir: Direction,
            ) -> Self::IncidentIter<'a> {
                (**self).incident_links(node, dir)
            }

            fn incident_count(&self, node: &Self::Node, dir: Direction) -> usize {
                (**self).incident_count(node, dir)
            }

            fn incident_at<'a>(
                &'a self,
                node: &'a Self::Node,
                dir: Direction,
                index: usize,
            ) -> Option<&'a Self::Link> {
                (**self).incident_at(node, dir, index)
            }

            fn node_at(&self, index: usize) -> Option<&Self::Node> {
                (**self).node_at(index)
            }

            fn link_at(&self, index: usize) -> Option<&Self::Link> {
                (**self).link_at(index)
            }

            fn contains_node(&self, id: &NodeId<Self>) -> bool {
                (**self).contains_node(id)
            }

            fn contains_link(&self, id: &LinkId<Self>) -> bool {
                (**self).contains_link(id)
            }
        }
    };
}

deref_network!(&);
deref_network!(&mut);
