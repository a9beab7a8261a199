//! # voxplay-core
//!
//! Core types, platform detection, configuration, and error handling for voxplay.

pub mod config;
pub mod error;
pub mod types;

pub use config::PlayerConfig;
pub use error::{Error, Result};
pub use types::*;
