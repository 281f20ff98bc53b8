use crate::{
    cli::{GlobalArgs, OutputFormat},
    command::{Command, resolve_now},
};
use clap::Parser;
use libintervalhints::{
    Hint, HintDateTime, HintKind, HintState, INVALID_DATETIME, PluginConfig, render_hint,
};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::{io, str::FromStr};
use tabled::{builder::Builder as TableBuilder, settings::Style as TableStyle};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct HintCommand {
    #[arg(
        long,
        value_name = "DATETIME",
        help = "Compute hints relative to this datetime instead of the current time"
    )]
    now: Option<HintDateTime>,
    #[arg(long, help = "Treat the datetimes as renderer macro hints")]
    renderer: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Line, help = "Output format")]
    format: OutputFormat,
    #[arg(required = true, value_name = "DATETIME", help = "Datetimes to show hints for")]
    datetimes: Vec<String>,
}

impl Command for HintCommand {
    #[inline]
    fn execute(self, ctx: &GlobalArgs) -> anyhow::Result<()> {
        show_hints(ctx, self)
    }
}

fn show_hints(ctx: &GlobalArgs, args: HintCommand) -> anyhow::Result<()> {
    let config = ctx.load_settings()?.config();
    let now = resolve_now(args.now.as_ref())?;
    let kind = if args.renderer {
        HintKind::Renderer
    } else {
        HintKind::Timestamp
    };
    let records = args
        .datetimes
        .iter()
        .map(|input| HintRecord::new(input, kind, now, &config))
        .collect::<Vec<_>>();
    print_records(&records, args.format, &mut io::stdout().lock())?;
    Ok(())
}

/// Outcome for one input datetime.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct HintRecord<'a> {
    pub(crate) input: &'a str,
    pub(crate) result: HintResult,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum HintResult {
    Valid { hint: Hint, state: HintState },
    Invalid { error: String },
}

impl Serialize for HintRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("input", self.input)?;
        match &self.result {
            HintResult::Valid { hint, state } => {
                map.serialize_entry("timestamp", &hint.timestamp)?;
                map.serialize_entry("title", &hint.title)?;
                map.serialize_entry("kind", &hint.kind)?;
                map.serialize_entry("is_future", &state.is_future)?;
                map.serialize_entry("is_hidden", &state.is_hidden)?;
                map.serialize_entry("is_short", &state.is_short)?;
                map.serialize_entry("breakdown", &state.breakdown)?;
            }
            HintResult::Invalid { error } => map.serialize_entry("error", error)?,
        }
        map.end()
    }
}

impl<'a> HintRecord<'a> {
    pub(crate) fn new(input: &'a str, kind: HintKind, now: i64, config: &PluginConfig) -> Self {
        let result = match HintDateTime::from_str(input)
            .and_then(|datetime| Hint::from_datetime(&datetime, kind))
        {
            Ok(hint) => {
                let state = hint.state(now, config);
                HintResult::Valid { hint, state }
            }
            Err(e) => {
                log::debug!("{e}");
                HintResult::Invalid {
                    error: e.to_string(),
                }
            }
        };
        Self { input, result }
    }

    pub(crate) fn with_hint(input: &'a str, hint: Hint, state: HintState) -> Self {
        Self {
            input,
            result: HintResult::Valid { hint, state },
        }
    }

    /// Short text of the hint: glyph and breakdown, `hidden`, or the
    /// invalid datetime placeholder.
    pub(crate) fn summary(&self) -> String {
        match &self.result {
            HintResult::Valid { state, .. } if state.is_hidden => "hidden".into(),
            HintResult::Valid { state, .. } => format!("{} {}", state.glyph(), state.breakdown),
            HintResult::Invalid { .. } => INVALID_DATETIME.into(),
        }
    }

    fn markup(&self) -> String {
        match &self.result {
            HintResult::Valid { hint, state } => render_hint(hint, state).to_string(),
            HintResult::Invalid { .. } => INVALID_DATETIME.into(),
        }
    }
}

pub(crate) fn print_records(
    records: &[HintRecord<'_>],
    format: OutputFormat,
    out: &mut impl io::Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Line => {
            for record in records {
                writeln!(out, "{}: {}", record.input, record.summary())?;
            }
        }
        OutputFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Table => {
            let mut builder = TableBuilder::new();
            builder.push_record(["Input", "Direction", "Interval", "Short"]);
            for record in records {
                let (direction, short) = match &record.result {
                    HintResult::Valid { state, .. } => (
                        if state.is_future { "future" } else { "past" },
                        if state.is_short { "yes" } else { "no" },
                    ),
                    HintResult::Invalid { .. } => ("-", "-"),
                };
                builder.push_record([
                    record.input.to_string(),
                    direction.to_string(),
                    record.summary(),
                    short.to_string(),
                ]);
            }
            let mut table = builder.build();
            table.with(TableStyle::psql());
            writeln!(out, "{table}")?;
        }
        OutputFormat::Html => {
            for record in records {
                writeln!(out, "{}", record.markup())?;
            }
        }
    }
    Ok(())
}
