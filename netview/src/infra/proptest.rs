use proptest::{collection::vec, prelude::*};

use crate::{core::network::Coord, storage::MemoryNetwork};

use super::testing::create_network;

/// Strategy generating networks with up to `max_nodes` nodes and up to twice
/// as many links. Self-loops and parallel links are included.
pub fn network(max_nodes: usize) -> impl Strategy<Value = MemoryNetwork> {
    (0..=max_nodes)
        .prop_flat_map(|node_count| {
            let coords = vec((-1000i32..1000, -1000i32..1000), node_count);

            let links = if node_count > 0 {
                vec((0..node_count, 0..node_count), 0..=2 * node_count).boxed()
            } else {
                Just(Vec::new()).boxed()
            };

            (coords, links)
        })
        .prop_map(|(coords, links)| {
            let coords = coords
                .into_iter()
                .map(|(x, y)| Coord::new(x.into(), y.into()));

            create_network(coords, links)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::network::Network;

    proptest! {
        #[test]
        fn respects_max_nodes(generated in network(8)) {
            prop_assert!(generated.node_count() <= 8);
            prop_assert!(generated.link_count() <= 2 * generated.node_count());
        }
    }
}
