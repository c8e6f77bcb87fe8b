use std::io::{self, Cursor, Write};

use rustc_hash::FxHashMap;

use crate::core::{
    attr::POSITION_ATTR,
    graph::{EdgeLike, GraphLike, NodeLike},
};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exports a graph in the [DOT](https://graphviz.org/doc/info/lang.html)
/// format. Nodes that carry a position attribute get a pinned `pos`, so
/// that `neato -n` draws the network in its geographic layout.
pub struct Dot {
    name: Option<String>,
    position_attr: Option<String>,
}

impl Dot {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            position_attr: Some(String::from(POSITION_ATTR)),
        }
    }

    pub fn position_attr(self, position_attr: Option<&str>) -> Self {
        Self {
            position_attr: position_attr.map(String::from),
            ..self
        }
    }

    pub fn to_string<G>(&self, graph: &G) -> String
    where
        G: GraphLike,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<G> Export<G> for Dot
where
    G: GraphLike,
{
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()> {
        let name = self.name.as_deref().unwrap_or(graph.id());
        writeln!(out, "digraph {name:?} {{")?;

        let mut indexer = Indexer::new();

        for node in graph.nodes() {
            let index = indexer.get(node.key());
            let coord = self
                .position_attr
                .as_deref()
                .and_then(|attr| node.attribute(attr))
                .and_then(|value| value.as_coord());

            match coord {
                Some(coord) => writeln!(
                    out,
                    "    v{index} [label={:?}, pos=\"{},{}!\"];",
                    node.key(),
                    coord.x,
                    coord.y
                )?,
                None => writeln!(out, "    v{index} [label={:?}];", node.key())?,
            }
        }

        for edge in graph.edges() {
            let from = indexer.get(edge.source().key());
            let to = indexer.get(edge.target().key());

            if edge.is_directed() {
                writeln!(out, "    v{from} -> v{to} [label={:?}];", edge.key())?;
            } else {
                writeln!(
                    out,
                    "    v{from} -> v{to} [label={:?}, dir=none];",
                    edge.key()
                )?;
            }
        }

        writeln!(out, "}}")?;

        Ok(())
    }
}

#[derive(Debug)]
struct Indexer(FxHashMap<String, usize>);

impl Indexer {
    pub fn new() -> Self {
        Self(FxHashMap::default())
    }

    pub fn get(&mut self, key: &str) -> usize {
        let new_idx = self.0.len();

        if let Some(&idx) = self.0.get(key) {
            idx
        } else {
            self.0.insert(key.to_owned(), new_idx);
            new_idx
        }
    }
}
