use serde::{Deserialize, Serialize};

/// Pair of optional inclusive bounds.
///
/// An absent bound places no constraint on that side, so a fully
/// unbounded range admits every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range<T> {
    pub minimum: Option<T>,
    pub maximum: Option<T>,
}

impl<T> Range<T> {
    pub fn new(minimum: Option<T>, maximum: Option<T>) -> Self {
        Self { minimum, maximum }
    }

    pub fn unbounded() -> Self {
        Self {
            minimum: None,
            maximum: None,
        }
    }
}

impl<T: PartialOrd> Range<T> {
    /// True when `value` is within both present bounds
    pub fn contains(&self, value: &T) -> bool {
        in_range(self, value)
    }

    /// False only when both bounds are present and out of order
    pub fn is_ordered(&self) -> bool {
        match (&self.minimum, &self.maximum) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }
}

/// Shared predicate for price, rooms and area filtering.
pub fn in_range<T: PartialOrd>(range: &Range<T>, value: &T) -> bool {
    range.minimum.as_ref().map_or(true, |min| value >= min)
        && range.maximum.as_ref().map_or(true, |max| value <= max)
}
