#![no_main]

use libfuzzer_sys::fuzz_target;
use libintervalhints::{HintDateTime, PluginConfig, parse_macro, parse_timestamp_text};
use std::str::FromStr;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let config = PluginConfig::default();
    if let Ok(datetime) = HintDateTime::from_str(s) {
        let _ = datetime.to_epoch_seconds();
    }
    if let Some(datetime) = parse_timestamp_text(s) {
        let _ = datetime.to_epoch_seconds();
    }
    if let Some(Ok(hint)) = parse_macro(&[":interval-hint", s]) {
        let state = hint.state(0, &config);
        assert!(!state.is_hidden || state.breakdown.is_empty());
    }
});
