//! Read-only graph views over transportation networks.
//!
//! A domain network (anything implementing [`core::Network`]) is exposed
//! through [`view::GraphView`] as a directed multigraph that generic graph
//! consumers can walk using the [`core::GraphLike`] family of traits. The
//! views never copy the network: all queries are answered from it directly.

pub mod core;
pub mod infra;
pub mod storage;
pub mod view;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::core::{EdgeLike, GraphLike, Network, NetworkLink, NetworkNode, NodeLike};

    pub use crate::{
        core::{Coord, ViewError},
        storage::MemoryNetwork,
        view::{EdgeView, GraphView, NodeView, ViewOptions},
    };
}
