//! Terminal UI using ratatui.

mod app;
mod input;
pub mod render;

pub use app::{App, Mode, UiState, ViewerState, DEFAULT_VIEWPORT_HEIGHT};
pub use input::handle_input;
pub use render::render;
