use crate::app::state::AppState;
use crate::content::FEATURE_PILLS;
use crate::ui::glyphs::glyph;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SUBTEXT: &str = "Empowering African farmers with AI-powered insights in your native language. \
Get personalized crop guidance, trait analysis, and growth predictions.";

/// Vertical gradient for the banner, emerald into blue.
fn banner_color(row: usize, rows: usize) -> Color {
    let t = if rows > 1 {
        row as f64 / (rows - 1) as f64
    } else {
        0.0
    };
    let (r1, g1, b1) = (52.0, 211.0, 153.0);
    let (r2, g2, b2) = (96.0, 165.0, 250.0);
    Color::Rgb(
        (r1 + (r2 - r1) * t) as u8,
        (g1 + (g2 - g1) * t) as u8,
        (b1 + (b2 - b1) * t) as u8,
    )
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", glyph("sparkles")),
                Style::default().fg(Theme::ACCENT_EMERALD),
            ),
            Span::styled("AgriAI ", Theme::title()),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let rows = state.banner.len();
    for (i, row) in state.banner.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            row.as_str(),
            Style::default()
                .fg(banner_color(i, rows))
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    // Badge with a pulsing dot
    let pulse = if (state.tick_count / 4) % 2 == 0 {
        Theme::ACCENT_EMERALD
    } else {
        Theme::BORDER_DIM
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", glyph("dot")), Style::default().fg(pulse)),
        Span::styled("Multilingual Agricultural Intelligence", Theme::secondary()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Your Smart", Theme::title())));
    lines.push(Line::from(Span::styled(
        "Farming Companion",
        Theme::heading(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(SUBTEXT, Theme::secondary())));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(
            format!(" Enter  Try Agent {} ", glyph("arrow-right")),
            Theme::selected(),
        ),
        Span::raw("   "),
        Span::styled(
            format!(" d  {} View Demo ", glyph("play")),
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BG_SURFACE),
        ),
    ]));
    lines.push(Line::from(""));

    let mut pills: Vec<Span> = Vec::new();
    for feature in FEATURE_PILLS {
        pills.push(Span::styled(format!("( {} )", feature), Theme::muted()));
        pills.push(Span::raw(" "));
    }
    lines.push(Line::from(pills));

    let content_h = (lines.len() as u16).min(inner.height);
    let top = inner.y + inner.height.saturating_sub(content_h) / 3;
    let content = Rect::new(
        inner.x + 2,
        top,
        inner.width.saturating_sub(4),
        inner.height.saturating_sub(top - inner.y),
    );
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, content);
}
