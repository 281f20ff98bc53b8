//! The `interval-hints` crate provides a command-line host for
//! [`libintervalhints`].
//!
//! It loads settings, finds timestamps in note files, runs the renderer macro
//! and keeps hints fresh while a file is being watched.

#![doc = include_str!("../README.md")]
pub mod cli;
pub mod command;
