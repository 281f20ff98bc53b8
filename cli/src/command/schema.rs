use crate::{cli::GlobalArgs, command::Command};
use clap::Parser;
use libintervalhints::settings_schema;
use std::io::{self, Write};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct SchemaCommand {
    #[arg(long, help = "Print the schema on a single line")]
    compact: bool,
}

impl Command for SchemaCommand {
    #[inline]
    fn execute(self, _ctx: &GlobalArgs) -> anyhow::Result<()> {
        let schema = settings_schema();
        let mut out = io::stdout().lock();
        if self.compact {
            serde_json::to_writer(&mut out, &schema)?;
        } else {
            serde_json::to_writer_pretty(&mut out, &schema)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
