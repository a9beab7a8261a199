//! Core domain types for voxplay.

pub mod command;
pub mod platform;
pub mod request;
pub mod volume;

pub use command::PlayerCommand;
pub use platform::Platform;
pub use request::PlaybackRequest;
pub use volume::Volume;
