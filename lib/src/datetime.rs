use crate::error::DateTimeError;
use chrono::{
    FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    TimeZone,
};
use regex::Regex;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
    sync::LazyLock,
    time::{SystemTime, UNIX_EPOCH},
};

/// Bare date with any non-word separators, e.g. `2024-03-20` or `2024/03/20`.
static BARE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})\W(\d{2})\W(\d{2})$").expect("valid date pattern"));

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// i64 bounds as f64, the upper one exclusive
const EPOCH_MIN: f64 = -9_223_372_036_854_775_808.0;
const EPOCH_MAX: f64 = 9_223_372_036_854_775_808.0;

/// A datetime a hint can point at.
///
/// Values without an offset are interpreted in the local timezone.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum HintDateTime {
    Naive(NaiveDateTime),
    Zoned(chrono::DateTime<FixedOffset>),
    /// Midnight of this day.
    Date(NaiveDate),
    /// Unix epoch timestamp in seconds
    Epoch(i64),
}

impl HintDateTime {
    /// Whole seconds since the unix epoch, truncated toward zero.
    pub fn to_epoch_seconds(&self) -> Result<i64, DateTimeError> {
        match self {
            Self::Naive(naive) => local(naive).map(|it| truncate_millis(it.timestamp_millis())),
            Self::Zoned(zoned) => Ok(truncate_millis(zoned.timestamp_millis())),
            Self::Date(date) => date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| DateTimeError::NonexistentLocalTime(date.to_string()))
                .and_then(|midnight| local(&midnight))
                .map(|it| truncate_millis(it.timestamp_millis())),
            Self::Epoch(seconds) => Ok(*seconds),
        }
    }
}

fn local(naive: &NaiveDateTime) -> Result<chrono::DateTime<Local>, DateTimeError> {
    resolve_local(naive, &Local)
        .ok_or_else(|| DateTimeError::NonexistentLocalTime(naive.to_string()))
}

/// Places `naive` in `tz`, taking the earlier instant in a fold.
///
/// A time skipped by a forward transition keeps the offset in effect before
/// it, which lands past the gap by the length of the gap.
fn resolve_local<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<chrono::DateTime<Tz>> {
    match naive.and_local_timezone(tz.clone()) {
        LocalResult::Single(it) | LocalResult::Ambiguous(it, _) => Some(it),
        LocalResult::None => {
            let before = naive.checked_sub_signed(TimeDelta::days(1))?;
            let offset = tz.offset_from_local_datetime(&before).earliest()?.fix();
            naive
                .and_local_timezone(offset)
                .single()
                .map(|it| it.with_timezone(tz))
        }
    }
}

#[inline]
const fn truncate_millis(millis: i64) -> i64 {
    millis / 1000
}

impl Display for HintDateTime {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive(naive) => Display::fmt(naive, f),
            Self::Zoned(zoned) => Display::fmt(zoned, f),
            Self::Date(date) => Display::fmt(date, f),
            Self::Epoch(seconds) => write!(f, "@{seconds}"),
        }
    }
}

impl FromStr for HintDateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(seconds) = s.strip_prefix('@') {
            return match f64::from_str(seconds) {
                Ok(seconds) if (EPOCH_MIN..EPOCH_MAX).contains(&seconds.trunc()) => {
                    Ok(Self::Epoch(seconds.trunc() as i64))
                }
                _ => Err(DateTimeError::Unrecognized(s.into())),
            };
        }
        if let Some(caps) = BARE_DATE.captures(s) {
            let field = |i: usize| caps[i].parse::<u32>().ok();
            return match (caps[1].parse::<i32>().ok(), field(2), field(3)) {
                (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d)
                    .map(Self::Date)
                    .ok_or_else(|| DateTimeError::Unrecognized(s.into())),
                _ => Err(DateTimeError::Unrecognized(s.into())),
            };
        }
        if let Some(naive) = NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return Ok(Self::Naive(naive));
        }
        chrono::DateTime::parse_from_rfc3339(s)
            .or_else(|_| chrono::DateTime::<FixedOffset>::from_str(s))
            .or_else(|_| chrono::DateTime::parse_from_rfc2822(s))
            .map(Self::Zoned)
            .map_err(|_| DateTimeError::Unrecognized(s.into()))
    }
}

/// Parses the text of a journal timestamp such as `2024-03-20 Wed 10:00 .+1d`.
///
/// The third token is taken as the time of day only when it starts with a digit.
pub fn parse_timestamp_text(text: &str) -> Option<HintDateTime> {
    let mut tokens = text.trim().split(' ');
    let date = NaiveDate::parse_from_str(tokens.next()?, "%Y-%m-%d").ok()?;
    let time = tokens
        .nth(1)
        .filter(|it| it.starts_with(|c: char| c.is_ascii_digit()));
    match time {
        Some(time) => NaiveTime::parse_from_str(time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
            .ok()
            .map(|time| HintDateTime::Naive(date.and_time(time))),
        None => Some(HintDateTime::Date(date)),
    }
}

/// Whole seconds since the unix epoch, truncated toward zero.
pub fn epoch_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

/// Current time in epoch seconds.
#[inline]
pub fn now() -> i64 {
    epoch_seconds(SystemTime::now())
}

/// Human readable tooltip for an instant, in the local timezone.
pub fn tooltip(epoch: i64) -> String {
    match Local.timestamp_opt(epoch, 0).single() {
        Some(datetime) => datetime.format("%c").to_string(),
        None => format!("@{epoch}"),
    }
}
