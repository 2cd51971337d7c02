pub mod banner;
mod chat;
mod glyphs;
mod input_box;
mod landing;
mod language;
mod layout;
mod registry;
mod simulation;
mod status_bar;
mod theme;
mod traits;

use crate::app::navigator::Screen;
use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::Theme::text().bg(theme::Theme::BG_DARK)), area);
    let app_layout = layout::compute_layout(area);

    match state.screen() {
        Screen::Landing => landing::render(frame, app_layout.body, state),
        Screen::Language => language::render(frame, app_layout.body, state),
        Screen::Chat => chat::render(frame, app_layout.body, state),
        Screen::Traits => traits::render(frame, app_layout.body, state),
        Screen::Simulation => simulation::render(frame, app_layout.body, state),
        Screen::Registry => registry::render(frame, app_layout.body, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
