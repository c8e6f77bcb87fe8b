//! In-memory transportation network.
//!
//! [`MemoryNetwork`] keeps nodes and links in insertion order and indexes them
//! by identifier. Every node keeps the ordered lists of its incoming and
//! outgoing links, so degree queries and positional access to incident links
//! are constant time.
//!
//! # Examples
//!
//! ```
//! use netview::{core::{Coord, Network}, storage::MemoryNetwork};
//!
//! let mut network = MemoryNetwork::new();
//!
//! network.add_node("A", Coord::new(0.0, 0.0));
//! network.add_node("B", Coord::new(100.0, 0.0));
//! network.add_link("L1", "A", "B");
//!
//! assert_eq!(network.node_count(), 2);
//! assert_eq!(network.link_count(), 1);
//! ```

use std::{fmt, iter::FusedIterator, slice};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{
    id::Id,
    marker::Direction,
    network::{Coord, Network, NetworkLink, NetworkNode},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    coord: Coord,
    // Indexed by `Direction::index`.
    links: [Vec<usize>; 2],
}

impl Node {
    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    id: Id,
    from: usize,
    to: usize,
}

impl Link {
    pub fn id(&self) -> &Id {
        &self.id
    }
}

impl NetworkNode for Node {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }

    fn coord(&self) -> Coord {
        self.coord
    }
}

impl NetworkLink for Link {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("adding node failed: node `{id}` already exists")]
pub struct AddNodeError {
    pub id: Id,
}

#[derive(Debug, Error, PartialEq)]
#[error("adding link `{id}` failed: {kind}")]
pub struct AddLinkError {
    pub id: Id,
    pub kind: AddLinkErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddLinkErrorKind {
    Duplicate,
    SourceAbsent,
    TargetAbsent,
}

impl fmt::Display for AddLinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddLinkErrorKind::Duplicate => "a link with the same id already exists",
            AddLinkErrorKind::SourceAbsent => "source does not exist",
            AddLinkErrorKind::TargetAbsent => "target does not exist",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryNetwork {
    nodes: Vec<Node>,
    links: Vec<Link>,
    node_index: FxHashMap<Id, usize>,
    link_index: FxHashMap<Id, usize>,
}

impl MemoryNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_count: usize, link_count: usize) -> Self {
        let mut node_index = FxHashMap::default();
        node_index.reserve(node_count);
        let mut link_index = FxHashMap::default();
        link_index.reserve(link_count);

        Self {
            nodes: Vec::with_capacity(node_count),
            links: Vec::with_capacity(link_count),
            node_index,
            link_index,
        }
    }

    pub fn try_add_node(&mut self, id: impl Into<Id>, coord: Coord) -> Result<&Node, AddNodeError> {
        let id = id.into();

        if self.node_index.contains_key(&id) {
            return Err(AddNodeError { id });
        }

        let index = self.nodes.len();
        self.node_index.insert(id.clone(), index);
        self.nodes.push(Node {
            id,
            coord,
            links: [Vec::new(), Vec::new()],
        });

        Ok(&self.nodes[index])
    }

    pub fn add_node(&mut self, id: impl Into<Id>, coord: Coord) -> &Node {
        match self.try_add_node(id, coord) {
            Ok(node) => node,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_add_link(
        &mut self,
        id: impl Into<Id>,
        from: &str,
        to: &str,
    ) -> Result<&Link, AddLinkError> {
        let id = id.into();

        if self.link_index.contains_key(&id) {
            return Err(AddLinkError {
                id,
                kind: AddLinkErrorKind::Duplicate,
            });
        }

        let Some(&from) = self.node_index.get(from) else {
            return Err(AddLinkError {
                id,
                kind: AddLinkErrorKind::SourceAbsent,
            });
        };

        let Some(&to) = self.node_index.get(to) else {
            return Err(AddLinkError {
                id,
                kind: AddLinkErrorKind::TargetAbsent,
            });
        };

        let index = self.links.len();
        self.link_index.insert(id.clone(), index);
        self.links.push(Link { id, from, to });

        // For a self-loop, the link ends up in both lists of the same node.
        self.nodes[from].links[Direction::Outgoing.index()].push(index);
        self.nodes[to].links[Direction::Incoming.index()].push(index);

        Ok(&self.links[index])
    }

    pub fn add_link(&mut self, id: impl Into<Id>, from: &str, to: &str) -> &Link {
        match self.try_add_link(id, from, to) {
            Ok(link) => link,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn node_by_key(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&index| &self.nodes[index])
    }

    pub fn link_by_key(&self, id: &str) -> Option<&Link> {
        self.link_index.get(id).map(|&index| &self.links[index])
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
        self.node_index.clear();
        self.link_index.clear();
    }
}

impl Network for MemoryNetwork {
    type Node = Node;
    type Link = Link;

    type NodesIter<'a> = slice::Iter<'a, Node>
    where
        Self: 'a;

    type LinksIter<'a> = slice::Iter<'a, Link>
    where
        Self: 'a;

    type IncidentIter<'a> = IncidentIter<'a>
    where
        Self: 'a;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn link_count(&self) -> usize {
        self.links.len()
    }

    fn nodes(&self) -> Self::NodesIter<'_> {
        self.nodes.iter()
    }

    fn links(&self) -> Self::LinksIter<'_> {
        self.links.iter()
    }

    fn node(&self, id: &Id) -> Option<&Node> {
        self.node_by_key(id.as_str())
    }

    fn link(&self, id: &Id) -> Option<&Link> {
        self.link_by_key(id.as_str())
    }

    fn source<'a>(&'a self, link: &'a Link) -> &'a Node {
        &self.nodes[link.from]
    }

    fn target<'a>(&'a self, link: &'a Link) -> &'a Node {
        &self.nodes[link.to]
    }

    fn incident_links<'a>(&'a self, node: &'a Node, dir: Direction) -> Self::IncidentIter<'a> {
        IncidentIter {
            links: &self.links,
            indices: node.links[dir.index()].iter(),
        }
    }

    fn incident_count(&self, node: &Node, dir: Direction) -> usize {
        node.links[dir.index()].len()
    }

    fn incident_at<'a>(&'a self, node: &'a Node, dir: Direction, index: usize) -> Option<&'a Link> {
        node.links[dir.index()]
            .get(index)
            .map(|&link| &self.links[link])
    }

    fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    fn link_at(&self, index: usize) -> Option<&Link> {
        self.links.get(index)
    }
}

#[derive(Debug, Clone)]
pub struct IncidentIter<'a> {
    links: &'a [Link],
    indices: slice::Iter<'a, usize>,
}

impl<'a> Iterator for IncidentIter<'a> {
    type Item = &'a Link;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|&index| &self.links[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.indices.nth(n).map(|&index| &self.links[index])
    }
}

impl ExactSizeIterator for IncidentIter<'_> {}

impl FusedIterator for IncidentIter<'_> {}
