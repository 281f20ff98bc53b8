use crate::{
    cli::{GlobalArgs, OutputFormat},
    command::{
        Command,
        hint::{HintRecord, print_records},
        resolve_now,
    },
};
use anyhow::Context;
use clap::{Parser, ValueHint};
use libintervalhints::{HintDateTime, Session, Settings};
use regex::Regex;
use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display, Formatter},
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
    thread,
    time::{Duration, Instant, SystemTime},
};

/// Journal timestamp such as `<2024-03-20 Wed 10:00 .+1d>`.
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(\d{4}-\d{2}-\d{2}(?: [^<>\r\n]*)?)>").expect("valid timestamp pattern")
});

const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct ScanCommand {
    #[arg(
        long,
        value_name = "DATETIME",
        help = "Compute hints relative to this datetime instead of the current time"
    )]
    now: Option<HintDateTime>,
    #[arg(
        long,
        help = "Keep running, re-scanning the file on change and refreshing on the update interval"
    )]
    watch: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Line, help = "Output format")]
    format: OutputFormat,
    #[arg(value_hint = ValueHint::FilePath)]
    file: PathBuf,
}

impl Command for ScanCommand {
    #[inline]
    fn execute(self, ctx: &GlobalArgs) -> anyhow::Result<()> {
        scan_file(ctx, self)
    }
}

/// Location of a timestamp in the scanned file, 1-based.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct Position {
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Display for Position {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Timestamps of `text` with their positions, in reading order.
pub(crate) fn find_timestamps(text: &str) -> Vec<(Position, &str)> {
    text.lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            TIMESTAMP.captures_iter(line).filter_map(move |caps| {
                let whole = caps.get(0)?;
                let inner = caps.get(1)?;
                let position = Position {
                    line: idx + 1,
                    column: whole.start() + 1,
                };
                Some((position, inner.as_str()))
            })
        })
        .collect()
}

/// Timestamps of one file kept in sync with a [`Session`].
pub(crate) struct Scanner {
    session: Session<Position>,
    texts: HashMap<Position, String>,
}

impl Scanner {
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            session: Session::new(settings),
            texts: HashMap::new(),
        }
    }

    /// Applies the current contents of the file.
    ///
    /// Timestamps seen for the first time are discovered, the ones already
    /// tracked are edited, and the ones that disappeared are untracked.
    pub(crate) fn sync(&mut self, text: &str, now: i64) {
        let found = find_timestamps(text);
        let present = found.iter().map(|(pos, _)| *pos).collect::<HashSet<_>>();
        let stale = self
            .session
            .keys()
            .filter(|pos| !present.contains(*pos))
            .copied()
            .collect::<Vec<_>>();
        for pos in stale {
            log::debug!("{pos}: timestamp removed");
            self.session.untrack(&pos);
            self.texts.remove(&pos);
        }
        for (pos, timestamp) in found {
            let state = if self.session.get(&pos).is_some() {
                if self.texts.get(&pos).is_some_and(|it| it == timestamp) {
                    continue;
                }
                self.session.edit(pos, timestamp, now)
            } else {
                self.session.discover(pos, timestamp, now)
            };
            match state {
                Some(_) => {
                    self.texts.insert(pos, timestamp.to_string());
                }
                None => log::debug!("{pos}: `{timestamp}` left as is"),
            }
        }
    }

    pub(crate) fn print(&self, now: i64, format: OutputFormat, out: &mut impl io::Write) -> io::Result<()> {
        let refreshed = self.session.refresh(now);
        let labels = refreshed
            .iter()
            .map(|it| {
                let text = self.texts.get(it.key).map(String::as_str).unwrap_or_default();
                format!("{} <{text}>", it.key)
            })
            .collect::<Vec<_>>();
        let records = refreshed
            .into_iter()
            .zip(&labels)
            .map(|(it, label)| HintRecord::with_hint(label, it.hint.clone(), it.state))
            .collect::<Vec<_>>();
        print_records(&records, format, out)
    }
}

/// Keeps `--now` moving at wall clock pace while watching.
#[derive(Copy, Clone, Debug)]
struct Clock {
    offset: i64,
}

impl Clock {
    fn new(now: i64) -> Self {
        Self {
            offset: now.saturating_sub(libintervalhints::now()),
        }
    }

    #[inline]
    fn now(&self) -> i64 {
        libintervalhints::now().saturating_add(self.offset)
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

fn modified(path: &Path) -> anyhow::Result<SystemTime> {
    fs::metadata(path)
        .and_then(|it| it.modified())
        .with_context(|| format!("failed to stat `{}`", path.display()))
}

fn scan_file(ctx: &GlobalArgs, args: ScanCommand) -> anyhow::Result<()> {
    let settings = ctx.load_settings()?;
    let clock = Clock::new(resolve_now(args.now.as_ref())?);
    let mut scanner = Scanner::new(&settings);
    let mut last_modified = modified(&args.file)?;
    scanner.sync(&read_file(&args.file)?, clock.now());
    scanner.print(clock.now(), args.format, &mut io::stdout().lock())?;
    if !args.watch {
        return Ok(());
    }

    // edits to known timestamps are gated by update-on-edit inside the session,
    // insertions and removals are always picked up
    let interval = scanner.session.refresh_interval();
    log::info!("watching {}", args.file.display());
    let mut last_refresh = Instant::now();
    loop {
        thread::sleep(POLL_INTERVAL);
        let modified = modified(&args.file)?;
        if modified != last_modified {
            last_modified = modified;
            log::debug!("{} changed", args.file.display());
            scanner.sync(&read_file(&args.file)?, clock.now());
            println!();
            scanner.print(clock.now(), args.format, &mut io::stdout().lock())?;
            last_refresh = Instant::now();
            continue;
        }
        if interval.is_some_and(|interval| last_refresh.elapsed() >= interval) {
            println!();
            scanner.print(clock.now(), args.format, &mut io::stdout().lock())?;
            last_refresh = Instant::now();
        }
    }
}
