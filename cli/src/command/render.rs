use crate::{
    cli::GlobalArgs,
    command::{Command, resolve_now},
};
use clap::Parser;
use libintervalhints::{HintDateTime, Session};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct RenderCommand {
    #[arg(
        long,
        default_value = "0",
        help = "Slot the macro renders into, used for the UI key"
    )]
    slot: String,
    #[arg(
        long,
        value_name = "DATETIME",
        help = "Render relative to this datetime instead of the current time"
    )]
    now: Option<HintDateTime>,
    #[arg(long, help = "Print the UI key on its own line before the template")]
    key: bool,
    #[arg(
        value_name = "ARGS",
        required = true,
        help = "Macro arguments, starting with the macro type (e.g. :interval-hint 2024-12-24)"
    )]
    args: Vec<String>,
}

impl Command for RenderCommand {
    #[inline]
    fn execute(self, ctx: &GlobalArgs) -> anyhow::Result<()> {
        render_macro(ctx, self)
    }
}

fn render_macro(ctx: &GlobalArgs, args: RenderCommand) -> anyhow::Result<()> {
    let settings = ctx.load_settings()?;
    let now = resolve_now(args.now.as_ref())?;
    let mut session = Session::new(&settings);
    match session.render_macro(args.slot.as_str(), &args.slot, &args.args, now) {
        Some(output) => {
            if args.key {
                println!("{}", output.key);
            }
            println!("{}", output.template);
        }
        None => log::info!(
            "`{}` is not an interval-hint macro, nothing to render",
            args.args.first().map(String::as_str).unwrap_or_default()
        ),
    }
    Ok(())
}
