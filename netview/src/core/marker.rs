#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing,
    Incoming,
}

pub use Direction::*;

impl Direction {
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Direction::Outgoing => 0,
            Direction::Incoming => 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Outgoing => Incoming,
            Incoming => Outgoing,
        }
    }

    /// Both directions in the order in which incident links of a node are
    /// enumerated, incoming first.
    #[inline]
    pub fn both() -> [Direction; 2] {
        [Incoming, Outgoing]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::both() {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn incoming_first() {
        assert_eq!(Direction::both(), [Incoming, Outgoing]);
    }
}
