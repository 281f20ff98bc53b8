//! Relative-time hints for timestamps.
//!
//! This library computes how far away a timestamp is from now, broken down
//! into a configurable set of units (`2h 15m`), together with the display
//! flags a host needs to present it: past or future, short, hidden. It also
//! provides the glue around that calculation: host settings, parsing of
//! journal timestamps and renderer macro arguments, hint markup, and a
//! [`Session`] tracking the hints of a host.
//!
//! # Examples
//!
//! ```rust
//! use libintervalhints::{ChoiceSet, HintConfig, compute_state, decompose};
//!
//! let breakdown = decompose(3661, &ChoiceSet::default(), 60);
//! assert_eq!(breakdown.to_string(), "1h 1m");
//!
//! let state = compute_state(1_000 + 7_200, 1_000, &HintConfig::default(), false);
//! assert!(state.is_future);
//! assert_eq!(state.breakdown.to_string(), "2h");
//! ```
pub(crate) mod datetime;
pub(crate) mod decompose;
pub(crate) mod error;
pub(crate) mod hint;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod settings;
pub(crate) mod unit;

pub use datetime::*;
pub use decompose::*;
pub use error::*;
pub use hint::*;
pub use render::*;
pub use session::*;
pub use settings::*;
pub use unit::*;
