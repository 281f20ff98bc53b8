use crate::error::UnknownUnitError;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A time unit an interval can be broken down into.
///
/// Variants are declared largest first, so the derived [`Ord`] is the
/// canonical descending-magnitude order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Unit {
    Years,
    Months,
    /// Only reachable through [`Unit::from_str`]; never part of a [`ChoiceSet`].
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// The units a [`ChoiceSet`] may contain, largest first.
    pub const CHOICES: [Unit; 6] = [
        Unit::Years,
        Unit::Months,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Magnitude of this unit in seconds.
    #[inline]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Years => 31_536_000,
            Self::Months => 2_592_000,
            Self::Weeks => 604_800,
            Self::Days => 86_400,
            Self::Hours => 3_600,
            Self::Minutes => 60,
            Self::Seconds => 1,
        }
    }

    /// Single character label rendered next to a count.
    ///
    /// Months and minutes share the label `m`.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Years => "y",
            Self::Months | Self::Minutes => "m",
            Self::Weeks => "w",
            Self::Days => "d",
            Self::Hours => "h",
            Self::Seconds => "s",
        }
    }

    /// Name used in settings, e.g. `hours`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// Whether this unit may appear in a [`ChoiceSet`].
    #[inline]
    pub const fn is_choice(self) -> bool {
        !matches!(self, Self::Weeks)
    }
}

impl Display for Unit {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnitError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "years" => Ok(Self::Years),
            "months" => Ok(Self::Months),
            "weeks" => Ok(Self::Weeks),
            "days" => Ok(Self::Days),
            "hours" => Ok(Self::Hours),
            "minutes" => Ok(Self::Minutes),
            "seconds" => Ok(Self::Seconds),
            other => Err(UnknownUnitError(other.into())),
        }
    }
}

/// The units a breakdown is allowed to use.
///
/// Always kept in canonical order, whatever order the units were given in.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ChoiceSet(Vec<Unit>);

impl ChoiceSet {
    /// Every selectable unit.
    #[inline]
    pub fn all() -> Self {
        Self(Unit::CHOICES.to_vec())
    }

    /// Empty set. Every breakdown made with it is empty.
    #[inline]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Resolves unit names, dropping the ones that are unknown or not selectable.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| match Unit::from_str(name.as_ref()) {
                Ok(unit) if unit.is_choice() => Some(unit),
                Ok(unit) => {
                    log::warn!("`{unit}` can not be used as an interval choice, ignoring");
                    None
                }
                Err(e) => {
                    log::warn!("{e} in interval choices, ignoring");
                    None
                }
            })
            .collect()
    }

    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Unit> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    pub fn contains(&self, unit: Unit) -> bool {
        self.0.contains(&unit)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when two selected units render with the same label.
    #[inline]
    pub fn has_ambiguous_labels(&self) -> bool {
        self.contains(Unit::Months) && self.contains(Unit::Minutes)
    }
}

impl Default for ChoiceSet {
    #[inline]
    fn default() -> Self {
        Self(vec![Unit::Hours, Unit::Minutes, Unit::Seconds])
    }
}

impl FromIterator<Unit> for ChoiceSet {
    /// Collects units into canonical order. Duplicates and non-selectable units are dropped.
    #[inline]
    fn from_iter<T: IntoIterator<Item = Unit>>(iter: T) -> Self {
        let mut units = iter
            .into_iter()
            .filter(|unit| unit.is_choice())
            .collect::<Vec<_>>();
        units.sort_unstable();
        units.dedup();
        Self(units)
    }
}

impl<'a> IntoIterator for &'a ChoiceSet {
    type Item = Unit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Unit>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
