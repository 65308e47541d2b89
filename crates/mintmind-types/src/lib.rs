//! Shared edit events and error hierarchy for MintMind.

pub mod error;
pub mod event;

pub use error::{BuildError, ConfigError, MintmindError};
pub use event::{CursorMove, Direction, EditEvent};
