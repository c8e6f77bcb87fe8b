use thiserror::Error;

use crate::{
    core::{
        marker::Direction,
        network::{Coord, Network},
    },
    storage::MemoryNetwork,
    view::GraphView,
};

/// Network with nodes `A`, `B`, `C` and links `L1: A -> B`, `L2: B -> C`.
pub fn sample_network() -> MemoryNetwork {
    let mut network = MemoryNetwork::with_capacity(3, 2);

    network.add_node("A", Coord::new(0.0, 0.0));
    network.add_node("B", Coord::new(100.0, 0.0));
    network.add_node("C", Coord::new(100.0, 100.0));

    network.add_link("L1", "A", "B");
    network.add_link("L2", "B", "C");

    network
}

/// Builds a network from node coordinates and links given by positions of
/// their endpoints. Nodes are named `n0`, `n1`, ..., links `l0`, `l1`, ...
///
/// # Panics
///
/// Panics if a link refers to a node position that does not exist.
pub fn create_network<C, L>(coords: C, links: L) -> MemoryNetwork
where
    C: IntoIterator<Item = Coord>,
    L: IntoIterator<Item = (usize, usize)>,
{
    let mut network = MemoryNetwork::new();

    for (i, coord) in coords.into_iter().enumerate() {
        network.add_node(format!("n{i}"), coord);
    }

    for (i, (from, to)) in links.into_iter().enumerate() {
        network.add_link(format!("l{i}"), &format!("n{from}"), &format!("n{to}"));
    }

    network
}

/// Street grid with nodes `r{row}c{col}` spaced 100 units apart and a pair of
/// opposite links between each two neighboring nodes.
pub fn create_grid(width: usize, height: usize) -> MemoryNetwork {
    let name = |row: usize, col: usize| format!("r{row}c{col}");

    let mut network = MemoryNetwork::new();

    for row in 0..height {
        for col in 0..width {
            network.add_node(
                name(row, col),
                Coord::new(col as f64 * 100.0, row as f64 * 100.0),
            );
        }
    }

    let mut connect = |u: String, v: String| {
        network.add_link(format!("{u}-{v}"), &u, &v);
        network.add_link(format!("{v}-{u}"), &v, &u);
    };

    for row in 0..height {
        for col in 0..width {
            if col + 1 < width {
                connect(name(row, col), name(row, col + 1));
            }

            if row + 1 < height {
                connect(name(row, col), name(row + 1, col));
            }
        }
    }

    network
}

fn degree_dir(dir: Direction) -> &'static str {
    match dir {
        Direction::Outgoing => "out",
        Direction::Incoming => "in",
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsistencyCheckError {
    #[error("nodes iterator count ({0}) is not equal to node count ({1})")]
    NodesNodeCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("node at index {0} differs from the node yielded at that position")]
    NodeIndexMismatch(usize),
    #[error("edge at index {0} differs from the edge yielded at that position")]
    EdgeIndexMismatch(usize),
    #[error("lookup of node `{0}` by its key failed or returned a different node")]
    NodeKeyLookup(String),
    #[error("lookup of edge `{0}` by its key failed or returned different endpoints")]
    EdgeKeyLookup(String),
    #[error("degree of node `{0}` is not equal to the number of its incident edges")]
    DegreeMismatch(String),
    #[error("edge `{0}` is not incident to both of its endpoints")]
    EdgeNotIncident(String),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", degree_dir(*.2))]
    HandshakingLemmaDirected(usize, usize, Direction),
}

pub fn check_consistency<N: Network>(graph: &GraphView<N>) -> Result<(), ConsistencyCheckError> {
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let node_count = graph.node_count();
    let edge_count = graph.edge_count();

    cmp(
        graph.nodes().count(),
        node_count,
        ConsistencyCheckError::NodesNodeCountMismatch,
    )?;
    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for (i, node) in graph.nodes().enumerate() {
        if graph.node_at(i).ok().as_ref() != Some(&node) {
            return Err(ConsistencyCheckError::NodeIndexMismatch(i));
        }

        if graph.node_by_key(node.key()).ok().as_ref() != Some(&node) {
            return Err(ConsistencyCheckError::NodeKeyLookup(node.key().to_owned()));
        }

        if node.degree() != node.edges().count() {
            return Err(ConsistencyCheckError::DegreeMismatch(node.key().to_owned()));
        }
    }

    for (i, edge) in graph.edges().enumerate() {
        if graph.edge_at(i).ok().map(|e| e.key().to_owned()).as_deref() != Some(edge.key()) {
            return Err(ConsistencyCheckError::EdgeIndexMismatch(i));
        }

        let consistent = graph.edge_by_key(edge.key()).is_ok_and(|e| {
            e.source() == edge.source() && e.target() == edge.target()
        });

        if !consistent {
            return Err(ConsistencyCheckError::EdgeKeyLookup(edge.key().to_owned()));
        }

        let leaves_source = edge.source().leaving_edges().any(|e| e.key() == edge.key());
        let enters_target = edge.target().entering_edges().any(|e| e.key() == edge.key());

        if !leaves_source || !enters_target {
            return Err(ConsistencyCheckError::EdgeNotIncident(edge.key().to_owned()));
        }
    }

    for dir in Direction::both() {
        let deg_sum = graph
            .nodes()
            .map(|node| node.degree_directed(dir))
            .sum::<usize>();

        cmp(deg_sum, edge_count, |actual, expected| {
            ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, dir)
        })?;
    }

    Ok(())
}
