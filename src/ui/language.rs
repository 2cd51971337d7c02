use crate::app::state::AppState;
use crate::content::languages::LANGUAGES;
use crate::ui::glyphs::glyph;
use crate::ui::layout::columns;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Heading
            Constraint::Min(8),    // Cards
            Constraint::Length(1), // Footer note
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled("Choose Your Language", Theme::secondary())),
        Line::from(Span::styled("Speak in Your Language", Theme::title())),
        Line::from(Span::styled(
            "Select your preferred language to get started with your AI farming companion",
            Theme::secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    // Two rows of two cards
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[1]);
    let cells: Vec<Rect> = rows.iter().flat_map(|row| columns(*row, 2)).collect();

    for (i, (lang, cell)) in LANGUAGES.iter().zip(cells).enumerate() {
        let highlighted = i == state.language_cursor;
        let marker = if highlighted {
            Span::styled(format!(" {} ", glyph("check")), Theme::selected())
        } else {
            Span::styled(" ○ ", Theme::muted())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(if highlighted {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Theme::key_hint()),
                marker,
            ]));

        let name_style = if highlighted {
            Theme::heading()
        } else {
            Theme::title()
        };
        let card = Paragraph::new(vec![
            Line::from(lang.flag),
            Line::from(Span::styled(lang.name, name_style)),
            Line::from(Span::styled(lang.native_name, Theme::secondary())),
            Line::from(""),
            Line::from(Span::styled(lang.region, Theme::muted())),
        ])
        .block(block);
        frame.render_widget(card, cell);
    }

    let footer = Paragraph::new(Span::styled(
        "More languages coming soon • Powered by AI",
        Theme::muted(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}
