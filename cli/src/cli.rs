pub mod value;

use crate::command::{
    Command, bugreport::BugReportCommand, complete::CompleteCommand, hint::HintCommand,
    render::RenderCommand, scan::ScanCommand, schema::SchemaCommand, style::StyleCommand,
};
use clap::{Args, Parser, Subcommand, ValueHint};
use libintervalhints::Settings;
use std::{fs, io, path::PathBuf};
pub(crate) use value::*;

#[derive(Parser, Clone, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about,
    author,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) commands: Commands,
    #[command(flatten)]
    pub(crate) global: GlobalArgs,
}

impl Cli {
    pub fn init_logger(&self) -> anyhow::Result<()> {
        fern::Dispatch::new()
            .level(self.global.log_level.as_level_filter())
            .format(|out, message, record| match record.level() {
                log::Level::Error => out.finish(format_args!("error: {message}")),
                log::Level::Warn => out.finish(format_args!("warning: {message}")),
                level => out.finish(format_args!("[{level}] {}: {message}", record.target())),
            })
            .chain(io::stderr())
            .apply()?;
        Ok(())
    }

    #[inline]
    pub fn execute(self) -> anyhow::Result<()> {
        crate::command::entry(self)
    }
}

#[derive(Args, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct GlobalArgs {
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Read settings from a JSON file",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) settings: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_enum,
        value_name = "LEVEL",
        default_value_t = LogLevel::Warn,
        help = "Verbosity of diagnostics written to stderr"
    )]
    pub(crate) log_level: LogLevel,
}

impl GlobalArgs {
    /// Settings from `--settings`, or the defaults when it is not given.
    pub(crate) fn load_settings(&self) -> Result<Settings, SettingsFileError> {
        let Some(path) = &self.settings else {
            return Ok(Settings::default());
        };
        log::debug!("loading settings from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| SettingsFileError::Read {
            path: path.clone(),
            source,
        })?;
        Settings::from_json(&json).map_err(|source| SettingsFileError::Parse {
            path: path.clone(),
            source,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum SettingsFileError {
    #[error("failed to read settings file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`{}` is not a valid settings file", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub(crate) enum Commands {
    #[command(about = "Show interval hints for datetimes")]
    Hint(HintCommand),
    #[command(about = "Run the interval-hint renderer macro")]
    Render(RenderCommand),
    #[command(about = "Show interval hints for the journal timestamps of a file")]
    Scan(ScanCommand),
    #[command(about = "Print the settings schema as JSON")]
    Schema(SchemaCommand),
    #[command(about = "Print the hint stylesheet")]
    Style(StyleCommand),
    #[command(about = "Generate shell auto complete")]
    Complete(CompleteCommand),
    #[command(about = "Generate bug report template")]
    BugReport(BugReportCommand),
}

impl Commands {
    #[inline]
    pub(crate) fn execute(self, ctx: &GlobalArgs) -> anyhow::Result<()> {
        match self {
            Self::Hint(cmd) => cmd.execute(ctx),
            Self::Render(cmd) => cmd.execute(ctx),
            Self::Scan(cmd) => cmd.execute(ctx),
            Self::Schema(cmd) => cmd.execute(ctx),
            Self::Style(cmd) => cmd.execute(ctx),
            Self::Complete(cmd) => cmd.execute(ctx),
            Self::BugReport(cmd) => cmd.execute(ctx),
        }
    }
}
