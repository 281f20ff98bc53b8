use crate::unit::{ChoiceSet, Unit};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt::{self, Display, Formatter};

/// One `count` of `unit` in a [`Breakdown`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Part {
    pub count: u64,
    pub unit: Unit,
}

impl Part {
    #[inline]
    pub const fn new(count: u64, unit: Unit) -> Self {
        Self { count, unit }
    }

    /// Seconds covered by this part.
    #[inline]
    pub const fn seconds(&self) -> u64 {
        self.count * self.unit.seconds()
    }
}

impl Display for Part {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.unit.label())
    }
}

impl Serialize for Part {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Part", 3)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("unit", self.unit.name())?;
        state.serialize_field("label", self.unit.label())?;
        state.end()
    }
}

/// Counts per unit, largest unit first.
///
/// An empty breakdown means there is nothing worth displaying.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Breakdown(Vec<Part>);

impl Breakdown {
    #[inline]
    pub fn parts(&self) -> &[Part] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Seconds covered by all parts.
    #[inline]
    pub fn seconds(&self) -> u64 {
        self.0.iter().map(Part::seconds).sum()
    }
}

impl Display for Breakdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut parts = self.0.iter();
        if let Some(first) = parts.next() {
            Display::fmt(first, f)?;
            for part in parts {
                write!(f, " {part}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Breakdown {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Breaks `total` seconds down into the units of `choices`.
///
/// Stops as soon as the remainder is below `min_unit` seconds; whatever is
/// left at that point is dropped. Units larger than the remainder are skipped.
pub fn decompose(total: u64, choices: &ChoiceSet, min_unit: u64) -> Breakdown {
    let mut remaining = total;
    let mut parts = Vec::with_capacity(choices.len());
    for unit in choices {
        if remaining < min_unit {
            break;
        }
        let seconds = unit.seconds();
        if remaining < seconds {
            continue;
        }
        let count = remaining / seconds;
        remaining -= count * seconds;
        parts.push(Part::new(count, unit));
    }
    Breakdown(parts)
}
