use crate::app::state::AppState;
use crate::ui::glyphs::glyph;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

const PLACEHOLDER: &str = "Ask me anything about farming...";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Message ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = if state.input.text.is_empty() {
        Span::styled(PLACEHOLDER, Theme::muted())
    } else {
        Span::styled(state.input.text.as_str(), Theme::input_text())
    };
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_EMERALD)),
        body,
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    let send = Span::styled(glyph("send"), Style::default().fg(Theme::ACCENT_EMERALD));
    if inner.width > 4 {
        let send_area = Rect::new(inner.right() - 1, inner.y, 1, 1);
        frame.render_widget(Paragraph::new(send), send_area);
    }

    // Cursor offset: chevron "❯ " (2 cols)
    let prompt_offset = 2u16;
    let cursor_x = inner.x + prompt_offset + state.input.cursor_column() as u16;
    frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
}
