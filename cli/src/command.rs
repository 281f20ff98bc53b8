pub mod bugreport;
pub mod complete;
pub mod hint;
pub mod render;
pub mod scan;
pub mod schema;
pub mod style;

use crate::cli::{Cli, GlobalArgs};

pub fn entry(cli: Cli) -> anyhow::Result<()> {
    cli.commands.execute(&cli.global)
}

pub(crate) trait Command {
    fn execute(self, ctx: &GlobalArgs) -> anyhow::Result<()>;
}

/// Reference time for a command: `--now` when given, the current time otherwise.
fn resolve_now(now: Option<&libintervalhints::HintDateTime>) -> anyhow::Result<i64> {
    match now {
        Some(datetime) => Ok(datetime.to_epoch_seconds()?),
        None => Ok(libintervalhints::now()),
    }
}
