use crate::{
    datetime::{HintDateTime, tooltip},
    decompose::{Breakdown, decompose},
    error::DateTimeError,
    settings::PluginConfig,
    unit::{ChoiceSet, Unit},
};
use serde::Serialize;

/// Parameters of the hint calculation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct HintConfig {
    /// Show hints for targets that are still ahead.
    pub show_future: bool,
    /// Show hints for targets that have passed.
    pub show_past: bool,
    /// Seconds below which nothing is broken down.
    pub min_interval: u64,
    /// Units a breakdown may use.
    pub choices: ChoiceSet,
    /// Intervals up to this many seconds are short. `0` disables it.
    pub short_threshold: u64,
}

impl Default for HintConfig {
    #[inline]
    fn default() -> Self {
        Self {
            show_future: true,
            show_past: true,
            min_interval: Unit::Hours.seconds(),
            choices: ChoiceSet::default(),
            short_threshold: 3600,
        }
    }
}

/// Display state of a single hint at one point in time.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
pub struct HintState {
    pub is_future: bool,
    /// Hidden wins over every other flag when rendering.
    pub is_hidden: bool,
    pub is_short: bool,
    /// Empty when hidden.
    pub breakdown: Breakdown,
}

impl HintState {
    /// Presentation glyph for a visible hint.
    #[inline]
    pub const fn glyph(&self) -> &'static str {
        match (self.is_future, self.is_short) {
            (true, true) => "⏰",
            (true, false) => "⏳",
            (false, _) => "⌛",
        }
    }
}

/// Where a hint came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    /// Attached to a timestamp found in a page.
    Timestamp,
    /// Produced by the `interval-hint` renderer macro.
    Renderer,
}

/// A hint pointing at a fixed instant.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Hint {
    /// Epoch seconds.
    pub timestamp: i64,
    /// Tooltip text.
    pub title: String,
    pub kind: HintKind,
}

impl Hint {
    #[inline]
    pub fn new(timestamp: i64, kind: HintKind) -> Self {
        Self {
            timestamp,
            title: tooltip(timestamp),
            kind,
        }
    }

    #[inline]
    pub fn from_datetime(datetime: &HintDateTime, kind: HintKind) -> Result<Self, DateTimeError> {
        Ok(Self::new(datetime.to_epoch_seconds()?, kind))
    }

    /// Whether visibility suppression is lifted for this hint under `config`.
    #[inline]
    pub fn is_always_visible(&self, config: &PluginConfig) -> bool {
        config.always_show_renderer && self.kind == HintKind::Renderer
    }

    /// State of this hint at `now`.
    #[inline]
    pub fn state(&self, now: i64, config: &PluginConfig) -> HintState {
        compute_state(self.timestamp, now, &config.hint, self.is_always_visible(config))
    }
}

/// Computes how the hint for `target` looks at `now`. Both are epoch seconds.
///
/// `always_visible` exempts the hint from the past/future switches and lowers
/// the minimum interval so that anything but a zero interval shows up.
pub fn compute_state(target: i64, now: i64, config: &HintConfig, always_visible: bool) -> HintState {
    let diff = target.abs_diff(now);
    let is_future = target >= now;
    let is_short = config.short_threshold > 0 && diff <= config.short_threshold;
    let is_hidden = !always_visible
        && ((is_future && !config.show_future) || (!is_future && !config.show_past));
    if is_hidden {
        return HintState {
            is_future,
            is_hidden,
            is_short,
            breakdown: Breakdown::default(),
        };
    }
    let min_unit = if always_visible && diff < config.min_interval {
        diff
    } else {
        config.min_interval
    };
    let breakdown = decompose(diff, &config.choices, min_unit);
    HintState {
        is_future,
        is_hidden: breakdown.is_empty(),
        is_short,
        breakdown,
    }
}
