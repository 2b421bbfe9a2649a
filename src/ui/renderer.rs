//! Single-panel render: prompt, result list, status line.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::widgets::{render_prompt, render_results, render_status};

pub fn render(f: &mut Frame, app: &App) {
    let regions = layout::compute(f.area());

    render_prompt(f, app.state.query(), app.state.caret(), regions.prompt);
    render_results(f, app, regions.list);
    render_status(f, app, regions.status);
}
