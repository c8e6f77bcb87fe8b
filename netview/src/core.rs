//! Traits and types shared by the network model and the graph views.
//!
//! The [`network`] module describes what is consumed from a domain
//! transportation network, the [`graph`] module describes the generic graph
//! contract that the views in [`crate::view`] expose to consumers.

pub mod attr;
pub mod error;
pub mod graph;
pub mod id;
pub mod marker;
pub mod network;

pub use attr::{AttrValue, Attributes, POSITION_ATTR};
pub use error::{ElementKind, ViewError};
pub use graph::{EdgeLike, GraphLike, NodeLike};
pub use network::{Coord, LinkId, Network, NetworkLink, NetworkNode, NodeId};
