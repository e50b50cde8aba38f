//! Mica CLI - command handlers for the `mica` binary.
//!
//! The binary itself (`main.rs`) only parses arguments; everything a
//! command does lives here so library consumers and tests can call it.

pub mod commands;
