pub mod console;
pub mod keyboard;
pub mod line;

pub use console::{run_interactive, run_piped};
pub use keyboard::{KeyAction, KeyboardManager};
pub use line::{InputEvent, InputState};
