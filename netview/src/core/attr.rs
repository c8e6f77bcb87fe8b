//! Key/value attribute storage attached to graph nodes.

use rustc_hash::FxHashMap;

use super::network::Coord;

/// Attribute under which a node view publishes its spatial position as a
/// two-element [`AttrValue::Vector`] `[x, y]`.
pub const POSITION_ATTR: &str = "xy";

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Vector(Vec<f64>),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            AttrValue::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    /// Interprets a two-element vector as a coordinate.
    pub fn as_coord(&self) -> Option<Coord> {
        match self.as_vector()? {
            [x, y] => Some(Coord::new(*x, *y)),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Coord> for AttrValue {
    fn from(value: Coord) -> Self {
        AttrValue::Vector(vec![value.x, value.y])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    values: FxHashMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.values.get(key)
    }

    /// Sets the attribute and returns the previous value, if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }
}
