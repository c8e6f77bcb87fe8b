//! Graph views projecting a [`Network`](crate::core::Network) onto the generic
//! graph contract.
//!
//! None of the views own or cache anything taken from the network. Every
//! query reads the network directly and builds fresh view objects, so two
//! lookups of the same node yield equal, but distinct, [`NodeView`]s.

pub mod edge;
pub mod graph;
pub mod iter;
pub mod node;

#[doc(inline)]
pub use edge::EdgeView;
#[doc(inline)]
pub use graph::{GraphView, ViewOptions};
#[doc(inline)]
pub use iter::{Bridge, EdgeBridge, NodeBridge};
#[doc(inline)]
pub use node::NodeView;
