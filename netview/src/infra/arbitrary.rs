use arbitrary::{Arbitrary, Unstructured};

use crate::{core::network::Coord, storage::MemoryNetwork};

use super::testing::create_network;

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum BuildOp {
    AddNode { x: i16, y: i16 },
    AddLink(Index, Index),
}

/// Sequence of operations building a network. Links referring to a node
/// when there are no nodes yet are skipped.
#[derive(Debug, Arbitrary, Clone, Default)]
pub struct BuildOps(pub Vec<BuildOp>);

impl BuildOps {
    pub fn build(&self) -> MemoryNetwork {
        let mut coords = Vec::new();
        let mut links = Vec::new();

        for op in self.0.iter() {
            match *op {
                BuildOp::AddNode { x, y } => coords.push(Coord::new(x.into(), y.into())),
                BuildOp::AddLink(from, to) => {
                    if let (Some(from), Some(to)) = (from.get(coords.len()), to.get(coords.len())) {
                        links.push((from, to));
                    }
                }
            }
        }

        create_network(coords, links)
    }
}

impl<'a> Arbitrary<'a> for MemoryNetwork {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        BuildOps::arbitrary(u).map(|ops| ops.build())
    }
}
