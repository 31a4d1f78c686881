//! Support library for the topicsim CLI binary.
//!
//! Exposes the command and logging modules so tests can drive generation and
//! rendering without spawning a subprocess.

pub mod cli;
pub mod logging;
