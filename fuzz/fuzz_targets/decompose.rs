#![no_main]

use libfuzzer_sys::fuzz_target;
use libintervalhints::{ChoiceSet, HintConfig, Unit, compute_state, decompose};

fn u64_at(data: &[u8], at: usize) -> u64 {
    let mut buf = [0; 8];
    if let Some(bytes) = data.get(at..at + 8) {
        buf.copy_from_slice(bytes);
    }
    u64::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
    let Some((&mask, rest)) = data.split_first() else {
        return;
    };
    let total = u64_at(rest, 0);
    let min_unit = u64_at(rest, 8);
    let choices = Unit::CHOICES
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, unit)| *unit)
        .collect::<ChoiceSet>();

    let breakdown = decompose(total, &choices, min_unit);
    assert!(breakdown.seconds() <= total);
    assert!(breakdown.iter().all(|part| part.count > 0 && choices.contains(part.unit)));
    assert!(breakdown.parts().windows(2).all(|w| w[0].unit < w[1].unit));

    let config = HintConfig {
        min_interval: min_unit,
        choices,
        ..Default::default()
    };
    let target = total as i64;
    let now = min_unit as i64;
    let state = compute_state(target, now, &config, mask & 0x80 != 0);
    assert_eq!(state.is_future, target >= now);
    assert_eq!(state.is_hidden, state.breakdown.is_empty());
});
