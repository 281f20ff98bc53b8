use crate::{
    cli::{Cli, GlobalArgs},
    command::Command,
};
use clap::{Args, CommandFactory};
use clap_complete::{Generator, Shell, generate};
use std::io;

#[derive(Args, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct CompleteCommand {
    #[arg(help = "shell")]
    shell: Shell,
}

impl Command for CompleteCommand {
    #[inline]
    fn execute(self, _ctx: &GlobalArgs) -> anyhow::Result<()> {
        print_completions(self.shell, &mut Cli::command(), &mut io::stdout().lock());
        Ok(())
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command, out: &mut dyn io::Write) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, out);
}
