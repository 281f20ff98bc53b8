//! Host settings and the configuration derived from them.
//!
//! Settings arrive as a loosely typed JSON document. Missing keys take their
//! defaults, malformed values are coerced instead of rejected.
use crate::{
    hint::HintConfig,
    unit::{ChoiceSet, Unit},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use std::{str::FromStr, time::Duration};

/// Settings document as stored by the host.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    #[serde(deserialize_with = "bool_or_true")]
    pub show_future: bool,
    #[serde(deserialize_with = "bool_or_true")]
    pub show_past: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub minimum_interval: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub interval_choices: Vec<String>,
    /// Seconds. `NaN` when the host sent something that is not a number.
    #[serde(deserialize_with = "lenient_number")]
    pub short_interval_threshold: f64,
    #[serde(deserialize_with = "bool_or_true")]
    pub update_on_edit: bool,
    /// Seconds. `NaN` when the host sent something that is not a number.
    #[serde(deserialize_with = "lenient_number")]
    pub update_interval: f64,
    #[serde(deserialize_with = "bool_or_false")]
    pub always_show_renderer: bool,
    #[serde(deserialize_with = "bool_or_false")]
    pub no_default_styles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_future: true,
            show_past: true,
            minimum_interval: Unit::Hours.name().into(),
            interval_choices: ChoiceSet::default()
                .iter()
                .map(|unit| unit.name().into())
                .collect(),
            short_interval_threshold: 3600.0,
            update_on_edit: true,
            update_interval: 0.0,
            always_show_renderer: false,
            no_default_styles: false,
        }
    }
}

impl Settings {
    /// Parses a settings document.
    #[inline]
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Builds settings from an already parsed document.
    #[inline]
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Derives the immutable configuration for these settings.
    #[inline]
    pub fn config(&self) -> PluginConfig {
        PluginConfig::from(self)
    }
}

fn bool_or_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(!matches!(Value::deserialize(deserializer)?, Value::Bool(false)))
}

fn bool_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => f64::from_str(s.trim()).unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|it| match it {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        _ => Settings::default().interval_choices,
    })
}

/// Configuration derived from [`Settings`]. Replaced as a whole when settings change.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PluginConfig {
    pub hint: HintConfig,
    /// Re-run a hint when its timestamp is edited.
    pub update_on_edit: bool,
    /// Period of the refresh timer, `None` when disabled.
    pub update_interval: Option<Duration>,
    /// Macro rendered hints are exempt from visibility suppression.
    pub always_show_renderer: bool,
    pub no_default_styles: bool,
}

impl Default for PluginConfig {
    #[inline]
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for PluginConfig {
    fn from(settings: &Settings) -> Self {
        let choices = ChoiceSet::from_names(&settings.interval_choices);
        if choices.has_ambiguous_labels() {
            log::warn!("`months` and `minutes` are both selected, both are labeled `m`");
        }
        Self {
            hint: HintConfig {
                show_future: settings.show_future,
                show_past: settings.show_past,
                min_interval: minimum_interval(&settings.minimum_interval).seconds(),
                choices,
                short_threshold: short_threshold(settings.short_interval_threshold),
            },
            update_on_edit: settings.update_on_edit,
            update_interval: update_interval(settings.update_interval),
            always_show_renderer: settings.always_show_renderer,
            no_default_styles: settings.no_default_styles,
        }
    }
}

fn minimum_interval(name: &str) -> Unit {
    match Unit::from_str(name) {
        Ok(unit) if unit.is_choice() => unit,
        Ok(unit) => {
            log::warn!("`{unit}` can not be used as minimum interval, using `hours`");
            Unit::Hours
        }
        Err(e) => {
            log::warn!("{e} as minimum interval, using `hours`");
            Unit::Hours
        }
    }
}

fn short_threshold(seconds: f64) -> u64 {
    if seconds.is_nan() || seconds < 1.0 {
        0
    } else {
        seconds as u64
    }
}

fn update_interval(seconds: f64) -> Option<Duration> {
    if seconds.is_nan() || seconds < 1.0 {
        None
    } else {
        Duration::try_from_secs_f64(seconds).ok()
    }
}

/// Kind of a setting's value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Boolean,
    Enum,
    Number,
}

/// How the host presents an enum setting.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumPicker {
    Select,
    Checkbox,
}

/// One entry of the settings schema handed to the host.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingSchema {
    pub key: &'static str,
    #[serde(rename = "type")]
    pub ty: SettingType,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_picker: Option<EnumPicker>,
    #[serde(skip_serializing_if = "no_choices")]
    pub enum_choices: &'static [&'static str],
    pub default: Value,
}

impl SettingSchema {
    fn new(
        key: &'static str,
        ty: SettingType,
        title: &'static str,
        description: &'static str,
        default: Value,
    ) -> Self {
        Self {
            key,
            ty,
            title,
            description,
            enum_picker: None,
            enum_choices: &[],
            default,
        }
    }

    fn with_choices(mut self, picker: EnumPicker, choices: &'static [&'static str]) -> Self {
        self.enum_picker = Some(picker);
        self.enum_choices = choices;
        self
    }
}

#[inline]
fn no_choices(choices: &&'static [&'static str]) -> bool {
    choices.is_empty()
}

const MINIMUM_INTERVAL_CHOICES: &[&str] = &["days", "hours", "minutes", "seconds"];
const INTERVAL_CHOICES: &[&str] = &["years", "months", "days", "hours", "minutes", "seconds"];

/// The settings schema, in display order.
pub fn settings_schema() -> Vec<SettingSchema> {
    let defaults = Settings::default();
    vec![
        SettingSchema::new(
            "show-future",
            SettingType::Boolean,
            "Future",
            "Show hints for events in the future. Requires a page refresh to apply.",
            json!(defaults.show_future),
        ),
        SettingSchema::new(
            "show-past",
            SettingType::Boolean,
            "Past",
            "Show hints for events in the past. Requires a page refresh to apply.",
            json!(defaults.show_past),
        ),
        SettingSchema::new(
            "minimum-interval",
            SettingType::Enum,
            "Minimum interval",
            "Hints are only shown when the interval is at least this long, e.g. an hour for `hours`. Requires a page refresh to apply.",
            json!(defaults.minimum_interval),
        )
        .with_choices(EnumPicker::Select, MINIMUM_INTERVAL_CHOICES),
        SettingSchema::new(
            "interval-choices",
            SettingType::Enum,
            "Intervals to display",
            "Units the interval is divided into.",
            json!(defaults.interval_choices),
        )
        .with_choices(EnumPicker::Checkbox, INTERVAL_CHOICES),
        SettingSchema::new(
            "short-interval-threshold",
            SettingType::Number,
            "Short interval threshold",
            "Intervals up to this many seconds are marked short (day: 86400, hour: 3600, minute: 60). Values below 1 disable it.",
            json!(defaults.short_interval_threshold as u64),
        ),
        SettingSchema::new(
            "update-on-edit",
            SettingType::Boolean,
            "Update on edit",
            "Update hints while their timestamp is edited. Requires a page refresh to apply. Pages with many scheduled or deadline entries may slow down.",
            json!(defaults.update_on_edit),
        ),
        SettingSchema::new(
            "update-interval",
            SettingType::Number,
            "Update interval",
            "Refresh all hints every this many seconds. Values below 1 disable it. Values below 600 are not recommended.",
            json!(defaults.update_interval as u64),
        ),
        SettingSchema::new(
            "always-show-renderer",
            SettingType::Boolean,
            "Always show renderer hints",
            "Show macro rendered hints regardless of the future, past and minimum interval settings. Requires a page refresh to apply.",
            json!(defaults.always_show_renderer),
        ),
        SettingSchema::new(
            "no-default-styles",
            SettingType::Boolean,
            "Disable default styles",
            "Do not install the bundled hint styles, for use with your own custom styles. Requires a restart.",
            json!(defaults.no_default_styles),
        ),
    ]
}
