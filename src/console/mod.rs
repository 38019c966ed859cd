//! Console layer: line input, prompts, decorated output and the menu

pub mod display;
pub mod input;
pub mod menu;
pub mod terminal;

pub use display::ProgressDisplay;
pub use input::{InputHandler, LineSource, ScriptedInput};
pub use terminal::{DisplaySettings, SharedBuffer, Terminal};
