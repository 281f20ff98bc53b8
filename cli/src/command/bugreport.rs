use crate::{cli::GlobalArgs, command::Command};
use bugreport::{bugreport, collector::*, format::Markdown};
use clap::Parser;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct BugReportCommand;

impl Command for BugReportCommand {
    #[inline]
    fn execute(self, ctx: &GlobalArgs) -> anyhow::Result<()> {
        let mut report = bugreport!()
            .info(SoftwareVersion::default())
            .info(OperatingSystem::default())
            .info(CommandLine::default())
            .info(EnvironmentVariables::list(&["TZ", "LANG", "LC_ALL", "LC_TIME"]))
            .info(CompileTimeInformation::default());
        if let Some(path) = &ctx.settings {
            report = report.info(FileContent::new("Settings", path));
        }
        report.print::<Markdown>();
        Ok(())
    }
}
