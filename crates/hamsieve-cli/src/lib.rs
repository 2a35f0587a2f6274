//! Command definitions and handlers for the Hamsieve CLI.
//!
//! The binary in `main.rs` is a thin wrapper: argument parsing and command
//! execution live here so they can be unit tested.

pub mod commands;
