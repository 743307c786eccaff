//! Tilawa terminal front end
//!
//! Wires the player controller to a terminal: line commands in, rendered
//! text out, a clock-driven media element standing in for audio output and
//! OSC 52 clipboard sharing.

pub mod commands;
pub mod config;
pub mod error;
pub mod media;
pub mod session;
pub mod share;
pub mod view;

pub use config::CliConfig;
pub use error::{CliError, Result};
