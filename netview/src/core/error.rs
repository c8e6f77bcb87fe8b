use std::fmt;

use thiserror::Error;

/// Kind of a graph element an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Node,
    Edge,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Node => "node",
            ElementKind::Edge => "edge",
        };
        f.write_str(name)
    }
}

/// Error returned by fallible operations of the graph views.
///
/// All errors are local to the call that produced them. The views hold no
/// state that an error could leave inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Lookup by identifier found no matching element in the network.
    #[error("{kind} `{key}` does not exist")]
    NotFound { kind: ElementKind, key: String },
    /// Positional access beyond the bounds of the collection.
    #[error("{kind} index {index} is out of range for length {len}")]
    IndexOutOfRange {
        kind: ElementKind,
        index: usize,
        len: usize,
    },
    /// Structural mutation of a read-only view.
    #[error("`{operation}` is not supported by a read-only view")]
    Unsupported { operation: &'static str },
    /// Iteration continued past the end of the sequence.
    #[error("iteration continued past the end of the sequence")]
    EndOfSequence,
}

impl ViewError {
    pub fn not_found(kind: ElementKind, key: impl fmt::Display) -> Self {
        ViewError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn out_of_range(kind: ElementKind, index: usize, len: usize) -> Self {
        ViewError::IndexOutOfRange { kind, index, len }
    }

    pub fn unsupported(operation: &'static str) -> Self {
        ViewError::Unsupported { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ViewError::not_found(ElementKind::Edge, "L99").to_string(),
            "edge `L99` does not exist"
        );
        assert_eq!(
            ViewError::out_of_range(ElementKind::Node, 99, 3).to_string(),
            "node index 99 is out of range for length 3"
        );
        assert_eq!(
            ViewError::unsupported("add_node").to_string(),
            "`add_node` is not supported by a read-only view"
        );
    }
}
