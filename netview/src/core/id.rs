//! Identifiers of network nodes and links.
//!
//! Every identifier must implement [`IdType`]. The textual form of an
//! identifier (its [`Display`](fmt::Display) output) is what the graph views
//! use as the element key, so two identifiers with equal textual forms denote
//! the same element as far as a view is concerned.

use std::{borrow::Borrow, fmt, hash::Hash};

/// A unique identification of a node or link in a network.
pub trait IdType: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    /// Converts the textual form of an identifier back into the identifier.
    ///
    /// Returns `None` if the text is not the textual form of an identifier of
    /// this type. For every valid identifier `id`, `parse_id(&id.to_string())`
    /// must be equal to `Some(id)`, and any text accepted by `parse_id` must be
    /// equal to the textual form of the returned identifier.
    fn parse_id(text: &str) -> Option<Self>;
}

/// Textual identifier used by [`MemoryNetwork`](crate::storage::MemoryNetwork).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(Box<str>);

impl Id {
    pub fn new(value: impl Into<Box<str>>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IdType for Id {
    fn parse_id(text: &str) -> Option<Self> {
        Some(Self::new(text))
    }
}

impl IdType for String {
    fn parse_id(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }
}

macro_rules! impl_int_id_type {
    ($int_ty:ty) => {
        impl IdType for $int_ty {
            fn parse_id(text: &str) -> Option<Self> {
                // Only the canonical form, "007" or "+7" do not denote `7`.
                text.parse().ok().filter(|id: &Self| display_eq(id, text))
            }
        }
    };
}

impl_int_id_type!(u16);
impl_int_id_type!(u32);
impl_int_id_type!(u64);
impl_int_id_type!(usize);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Allows looking up `Id`-keyed maps by `&str`.
impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Checks whether the textual form of `value` is equal to `text` without
/// allocating the textual form.
pub(crate) fn display_eq<T: fmt::Display + ?Sized>(value: &T, text: &str) -> bool {
    struct Matcher<'t> {
        rest: &'t str,
    }

    impl fmt::Write for Matcher<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            match self.rest.strip_prefix(s) {
                Some(rest) => {
                    self.rest = rest;
                    Ok(())
                }
                None => Err(fmt::Error),
            }
        }
    }

    let mut matcher = Matcher { rest: text };
    fmt::write(&mut matcher, format_args!("{value}")).is_ok() && matcher.rest.is_empty()
}
