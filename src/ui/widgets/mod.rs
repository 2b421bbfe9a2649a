//! TUI widgets: prompt, result list, status line.

mod input;
mod results;
mod status;

pub use input::render as render_prompt;
pub use results::render as render_results;
pub use status::render as render_status;
