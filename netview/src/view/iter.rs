//! Bridge from iterators over network elements to iterators over views.

use std::{fmt, iter::Peekable, marker::PhantomData};

use tracing::warn;

use crate::core::{error::ViewError, network::Network};

use super::{edge::EdgeView, graph::GraphView, node::NodeView};

/// Determines what a [`Bridge`] wraps the network elements into.
pub trait BridgeKind<'a, N: Network + 'a> {
    type Source;
    type View;

    fn wrap(graph: &'a GraphView<N>, source: Self::Source) -> Self::View;
}

/// Bridge kind wrapping network nodes into [`NodeView`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {}

/// Bridge kind wrapping network links into [`EdgeView`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {}

impl<'a, N: Network + 'a> BridgeKind<'a, N> for NodeKind {
    type Source = &'a N::Node;
    type View = NodeView<'a, N>;

    fn wrap(graph: &'a GraphView<N>, source: Self::Source) -> Self::View {
        NodeView::new(graph, source)
    }
}

impl<'a, N: Network + 'a> BridgeKind<'a, N> for EdgeKind {
    type Source = &'a N::Link;
    type View = EdgeView<'a, N>;

    fn wrap(graph: &'a GraphView<N>, source: Self::Source) -> Self::View {
        EdgeView::new(graph, source)
    }
}

/// Forward-only iterator that wraps each element yielded by a network
/// iterator into a view at the moment it is pulled.
///
/// The bridge does not buffer views and cannot be restarted. Asking the
/// originating view for another bridge starts a fresh, independent pass over
/// the network.
pub struct Bridge<'a, N, I, K>
where
    N: Network + 'a,
    I: Iterator,
{
    graph: &'a GraphView<N>,
    source: Peekable<I>,
    kind: PhantomData<fn() -> K>,
}

pub type NodeBridge<'a, N, I> = Bridge<'a, N, I, NodeKind>;
pub type EdgeBridge<'a, N, I> = Bridge<'a, N, I, EdgeKind>;

impl<'a, N, I, K> Bridge<'a, N, I, K>
where
    N: Network + 'a,
    I: Iterator<Item = K::Source>,
    K: BridgeKind<'a, N>,
{
    pub fn new(graph: &'a GraphView<N>, source: I) -> Self {
        Self {
            graph,
            source: source.peekable(),
            kind: PhantomData,
        }
    }

    pub fn graph(&self) -> &'a GraphView<N> {
        self.graph
    }

    /// Returns `true` if another element is available.
    ///
    /// No view is built for the peeked element until it is pulled.
    pub fn has_next(&mut self) -> bool {
        self.source.peek().is_some()
    }

    /// Pulls the next element, failing with [`ViewError::EndOfSequence`] when
    /// the sequence is exhausted.
    pub fn try_next(&mut self) -> Result<K::View, ViewError> {
        self.next().ok_or(ViewError::EndOfSequence)
    }

    /// Removes the most recently pulled element from the network.
    ///
    /// Views only ever hold shared references to the network, so this always
    /// fails with [`ViewError::Unsupported`].
    pub fn remove(&mut self) -> Result<(), ViewError> {
        warn!(graph = self.graph.id(), "removal through an iterator bridge rejected");
        Err(ViewError::unsupported("remove"))
    }
}

impl<'a, N, I, K> Iterator for Bridge<'a, N, I, K>
where
    N: Network + 'a,
    I: Iterator<Item = K::Source>,
    K: BridgeKind<'a, N>,
{
    type Item = K::View;

    fn next(&mut self) -> Option<Self::Item> {
        self.source
            .next()
            .map(|source| K::wrap(self.graph, source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<'a, N, I, K> fmt::Debug for Bridge<'a, N, I, K>
where
    N: Network + 'a,
    I: Iterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("graph", &self.graph.id())
            .field("kind", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{
        core::{error::ViewError, network::Network},
        infra::testing::sample_network,
        view::GraphView,
    };

    #[test]
    fn has_next_does_not_advance() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);
        let mut nodes = graph.nodes();

        assert!(nodes.has_next());
        assert!(nodes.has_next());
        assert_eq!(nodes.next().map(|node| node.key().to_owned()), Some("A".into()));
        assert_eq!(nodes.count(), 2);
    }

    #[test]
    fn end_of_sequence() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);
        let mut edges = graph.edges();

        assert_eq!(edges.try_next().map(|edge| edge.key().to_owned()), Ok("L1".into()));
        assert_eq!(edges.try_next().map(|edge| edge.key().to_owned()), Ok("L2".into()));
        assert!(!edges.has_next());
        assert_matches!(edges.try_next(), Err(ViewError::EndOfSequence));
        assert_matches!(edges.try_next(), Err(ViewError::EndOfSequence));
    }

    #[test]
    fn remove_unsupported() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);
        let mut nodes = graph.nodes();

        nodes.next();
        assert_matches!(
            nodes.remove(),
            Err(ViewError::Unsupported {
                operation: "remove"
            })
        );
        assert_eq!(network.node_count(), 3);
    }

    #[test]
    fn size_hint_follows_source() {
        let network = sample_network();
        let graph = GraphView::new("sample", &network);
        let mut nodes = graph.nodes();

        assert_eq!(nodes.size_hint(), (3, Some(3)));
        nodes.next();
        assert_eq!(nodes.size_hint(), (2, Some(2)));
    }
}
