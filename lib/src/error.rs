use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Unknown unit name error.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct UnknownUnitError(pub(crate) String);

impl UnknownUnitError {
    /// The name that could not be resolved to a unit.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for UnknownUnitError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown unit `{}`", self.0)
    }
}

impl Error for UnknownUnitError {}

/// Datetime parse error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DateTimeError {
    /// The input is not in any accepted datetime format.
    Unrecognized(String),
    /// The input names a local time that does not exist in the local timezone.
    NonexistentLocalTime(String),
}

impl Display for DateTimeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized(s) => write!(f, "unrecognized datetime `{s}`"),
            Self::NonexistentLocalTime(s) => {
                write!(f, "`{s}` does not exist in the local timezone")
            }
        }
    }
}

impl Error for DateTimeError {}
