//! Tracking of hints on behalf of a host.
//!
//! The host owns discovery and scheduling: it reports timestamps it finds or
//! sees edited, hands over renderer macro invocations and asks for fresh
//! states whenever its timer fires. The session only remembers which hints
//! exist and recomputes them against the configuration it currently holds.
use crate::{
    datetime::parse_timestamp_text,
    hint::{Hint, HintKind, HintState},
    render::{INVALID_DATETIME, MacroOutput, macro_key, parse_macro, render_hint},
    settings::{PluginConfig, Settings},
};
use indexmap::IndexMap;
use std::{hash::Hash, sync::Arc, time::Duration};

/// State of a tracked hint after a refresh.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Refreshed<'a, K> {
    pub key: &'a K,
    pub hint: &'a Hint,
    pub state: HintState,
}

/// Hints tracked for a host, keyed by the host's element identity.
#[derive(Clone, Debug)]
pub struct Session<K> {
    config: Arc<PluginConfig>,
    hints: IndexMap<K, Hint>,
}

impl<K: Hash + Eq> Session<K> {
    #[inline]
    pub fn new(settings: &Settings) -> Self {
        Self::with_config(Arc::new(settings.config()))
    }

    #[inline]
    pub fn with_config(config: Arc<PluginConfig>) -> Self {
        Self {
            config,
            hints: IndexMap::new(),
        }
    }

    /// Configuration currently in effect.
    #[inline]
    pub fn config(&self) -> &Arc<PluginConfig> {
        &self.config
    }

    /// Replaces the configuration and recomputes every tracked hint.
    pub fn apply_settings(&mut self, settings: &Settings, now: i64) -> Vec<Refreshed<'_, K>> {
        self.config = Arc::new(settings.config());
        log::debug!("settings applied: {:?}", self.config);
        self.refresh(now)
    }

    /// Period of the refresh timer, `None` when periodic refresh is disabled.
    #[inline]
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.config.update_interval
    }

    /// Reports a timestamp element with the given text.
    ///
    /// Returns `None` without tracking anything when neither past nor future
    /// hints are shown, or when the text is not a timestamp.
    pub fn discover(&mut self, key: K, text: &str, now: i64) -> Option<HintState> {
        let hint = &self.config.hint;
        if !(hint.show_future || hint.show_past) {
            return None;
        }
        self.track_text(key, text, now)
    }

    /// Reports an edit of a tracked timestamp's text.
    ///
    /// Ignored when updating on edit is disabled or the key is not tracked.
    pub fn edit(&mut self, key: K, text: &str, now: i64) -> Option<HintState> {
        if !self.config.update_on_edit || !self.hints.contains_key(&key) {
            return None;
        }
        self.track_text(key, text, now)
    }

    fn track_text(&mut self, key: K, text: &str, now: i64) -> Option<HintState> {
        let datetime = parse_timestamp_text(text)?;
        let hint = match Hint::from_datetime(&datetime, HintKind::Timestamp) {
            Ok(hint) => hint,
            Err(e) => {
                log::debug!("{e}");
                return None;
            }
        };
        let state = hint.state(now, &self.config);
        self.hints.insert(key, hint);
        Some(state)
    }

    /// Handles a renderer macro invocation in `slot`.
    ///
    /// Returns `None` when the macro is not an interval hint. A valid hint is
    /// tracked under `key` so later refreshes keep it current.
    pub fn render_macro<S: AsRef<str>>(
        &mut self,
        key: K,
        slot: &str,
        args: &[S],
        now: i64,
    ) -> Option<MacroOutput> {
        let template = match parse_macro(args)? {
            Ok(hint) => {
                let template = render_hint(&hint, &hint.state(now, &self.config)).to_string();
                self.hints.insert(key, hint);
                template
            }
            Err(e) => {
                log::debug!("{e}");
                INVALID_DATETIME.into()
            }
        };
        Some(MacroOutput {
            key: macro_key(slot),
            template,
        })
    }

    /// Recomputes every tracked hint, in the order they were first tracked.
    pub fn refresh(&self, now: i64) -> Vec<Refreshed<'_, K>> {
        self.hints
            .iter()
            .map(|(key, hint)| Refreshed {
                key,
                hint,
                state: hint.state(now, &self.config),
            })
            .collect()
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&Hint> {
        self.hints.get(key)
    }

    /// Keys of the tracked hints, in the order they were first tracked.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.hints.keys()
    }

    /// Stops tracking the hint under `key`.
    #[inline]
    pub fn untrack(&mut self, key: &K) -> Option<Hint> {
        self.hints.shift_remove(key)
    }

    /// Drops every tracked hint.
    #[inline]
    pub fn unload(&mut self) {
        self.hints.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}
