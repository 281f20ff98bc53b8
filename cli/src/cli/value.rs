mod log_level;
mod output_format;

pub(crate) use log_level::LogLevel;
pub(crate) use output_format::OutputFormat;
