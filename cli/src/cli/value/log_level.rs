use clap::ValueEnum;
use log::LevelFilter;

/// Threshold for diagnostics written to stderr.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    /// Settings that had to be corrected are reported at this level.
    #[default]
    Warn,
    Info,
    /// Also reports skipped timestamps and configuration changes.
    Debug,
    Trace,
}

impl LogLevel {
    #[inline]
    pub(crate) const fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    #[inline]
    fn from(value: LogLevel) -> Self {
        value.as_level_filter()
    }
}
