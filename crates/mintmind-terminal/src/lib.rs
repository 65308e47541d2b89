//! Full-screen terminal front end, key mapping and C highlighting for MintMind.

mod editor;
pub mod highlight;
mod keys;
mod render;

pub use editor::{EditorExit, ScreenEditor};
pub use keys::{KeyAction, map_key};
pub use render::{Screen, viewport};
