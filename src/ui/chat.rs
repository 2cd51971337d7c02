use crate::app::state::AppState;
use crate::chat::{ChatMessage, Sender, Tool};
use crate::ui::glyphs::glyph;
use crate::ui::layout::chat_layout;
use crate::ui::theme::Theme;
use crate::ui::input_box;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let layout = chat_layout(area, state.sidebar_open);

    if let Some(sidebar) = layout.sidebar {
        render_sidebar(frame, sidebar, state);
    }
    render_header(frame, layout.header);
    render_messages(frame, layout.messages, state);
    input_box::render(frame, layout.input_box, state);

    let footer = Paragraph::new(Span::styled(
        "AI can make mistakes. Verify important information.",
        Theme::muted(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", glyph("sparkles")),
                Style::default().fg(Theme::ACCENT_EMERALD),
            ),
            Span::styled("AgriAI ", Theme::title()),
        ]));

    let mut lines: Vec<Line> = Vec::new();
    let language = state.navigator.language();
    if !language.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Language: {}", language),
            Theme::secondary(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("AI Tools", Theme::muted())));
    lines.push(Line::from(""));
    for tool in Tool::ALL {
        lines.push(Line::from(vec![
            Span::styled(format!("F{} ", tool.hotkey()), Theme::key_hint()),
            Span::styled(
                format!("{} ", glyph(tool.icon())),
                Style::default().fg(Theme::ACCENT_EMERALD),
            ),
            Span::styled(tool.name(), Theme::title()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", tool.description()),
            Theme::secondary(),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let left = Line::from(vec![
        Span::styled(" AI Assistant  ", Theme::title()),
        Span::styled(glyph("dot"), Style::default().fg(Theme::ACCENT_EMERALD)),
        Span::styled(" Online", Theme::secondary()),
    ]);
    frame.render_widget(Paragraph::new(left), inner);

    let right = Line::from(vec![
        Span::styled("Esc ", Theme::key_hint()),
        Span::styled("Exit ", Theme::secondary()),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), inner);
}

/// Greedy word wrap to `width` display columns. Words wider than a row
/// are split between characters.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in text.split_whitespace() {
        let w = word.width();
        if current_w > 0 && current_w + 1 + w > width {
            rows.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if w > width {
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if current_w > 0 && current_w + cw > width {
                    rows.push(std::mem::take(&mut current));
                    current_w = 0;
                }
                current.push(c);
                current_w += cw;
            }
            continue;
        }
        if current_w > 0 {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += w;
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// One terminal row per returned line.
fn message_rows(msg: &ChatMessage, timestamp_format: &str, width: usize) -> Vec<Line<'static>> {
    let time = msg.timestamp.format(timestamp_format).to_string();
    let (who, style, alignment) = match msg.sender {
        Sender::User => ("You", Theme::user_bubble(), Alignment::Right),
        Sender::Agent => ("AgriAI", Theme::agent_bubble(), Alignment::Left),
    };

    let mut rows = vec![Line::from(vec![
        Span::styled(who, style),
        Span::styled(format!("  {}", time), Theme::timestamp()),
    ])
    .alignment(alignment)];
    rows.extend(
        wrap_text(&msg.content, width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Theme::text())).alignment(alignment)),
    );
    rows.push(Line::from(""));
    rows
}

fn render_messages(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let messages = state.chat.messages();
    let visible = messages.len().saturating_sub(state.chat.scroll_offset);
    let format = state.config.ui.timestamp_format.as_str();

    let rows: Vec<Line> = messages[..visible]
        .iter()
        .flat_map(|m| message_rows(m, format, inner.width as usize))
        .collect();

    // Bottom-anchor: newest message sits right above the input box.
    let start = rows.len().saturating_sub(inner.height as usize);
    frame.render_widget(Paragraph::new(rows[start..].to_vec()), inner);

    if state.chat.scroll_offset > 0 {
        let hint = format!(" ↓ {} newer ", state.chat.scroll_offset);
        let w = hint.width() as u16;
        if inner.width > w {
            let hint_area = Rect::new(inner.right() - w, area.y, w, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(hint, Theme::key_hint())),
                hint_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_between_words() {
        let rows = wrap_text("plant maize after the first rains", 12);
        assert_eq!(rows, vec!["plant maize", "after the", "first rains"]);
        assert!(rows.iter().all(|r| r.width() <= 12));
    }

    #[test]
    fn test_wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_text_keeps_one_row() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("   ", 10), vec![String::new()]);
    }
}
