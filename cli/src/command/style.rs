use crate::{cli::GlobalArgs, command::Command};
use clap::Parser;
use libintervalhints::stylesheet;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct StyleCommand;

impl Command for StyleCommand {
    #[inline]
    fn execute(self, ctx: &GlobalArgs) -> anyhow::Result<()> {
        let config = ctx.load_settings()?.config();
        let styles = stylesheet(config.no_default_styles);
        if styles.is_empty() {
            log::info!("default styles are disabled");
        }
        print!("{styles}");
        Ok(())
    }
}
