use crate::content::traits::{Trait, INSIGHTS, OVERALL_SCORE, REPORT_ACTIONS, TRAITS};
use crate::content::SUBJECT;
use crate::ui::glyphs::glyph;
use crate::ui::layout::columns;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

fn trait_icon(id: &str) -> &'static str {
    match id {
        "drought" => glyph("droplet"),
        "growth" => glyph("trending-up"),
        "disease" => glyph("shield"),
        "yield" => glyph("sprout"),
        _ => glyph(""),
    }
}

pub fn render(frame: &mut Frame, area: Rect, _state: &crate::app::state::AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Trait cards
            Constraint::Length(7), // Key insights
            Constraint::Length(1), // Report actions
        ])
        .split(area);

    render_header(frame, chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[1]);
    let cells: Vec<Rect> = rows.iter().flat_map(|row| columns(*row, 2)).collect();
    for (t, cell) in TRAITS.iter().zip(cells) {
        render_trait_card(frame, cell, t);
    }

    render_insights(frame, chunks[2]);

    let mut spans: Vec<Span> = Vec::new();
    for action in REPORT_ACTIONS {
        spans.push(Span::styled(format!("[ {} ]", action), Theme::muted()));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let left = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyph("arrow-left")), Theme::secondary()),
            Span::styled("Back to Chat (Esc)", Theme::secondary()),
        ]),
        Line::from(Span::styled("Trait Scoring Results", Theme::title())),
        Line::from(Span::styled(
            format!("Analysis for {}", SUBJECT),
            Theme::secondary(),
        )),
    ]);
    frame.render_widget(left, area);

    let badge = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}% Overall Score ", OVERALL_SCORE),
            Theme::selected(),
        )),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(badge, area);
}

fn render_trait_card(frame: &mut Frame, area: Rect, t: &Trait) {
    let color = Theme::trait_color(t.id);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .title(Line::from(vec![
            Span::styled(format!(" {} ", trait_icon(t.id)), Style::default().fg(color)),
            Span::styled(format!("{} ", t.name), Theme::title()),
        ]))
        .title(
            Line::from(Span::styled(
                format!(" {}% ", t.score),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Level
            Constraint::Length(1), // Gauge
            Constraint::Min(1),    // Description
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(t.level, Theme::secondary())),
        parts[0],
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Theme::BG_SURFACE))
        .percent(t.score.min(100))
        .label("");
    frame.render_widget(gauge, parts[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(t.description, Theme::text())).wrap(Wrap { trim: true }),
        parts[2],
    );
}

fn render_insights(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .title(Span::styled(" Key Insights ", Theme::heading()));

    let mut lines: Vec<Line> = INSIGHTS
        .iter()
        .map(|insight| {
            Line::from(vec![
                Span::styled(format!(" {} ", glyph("dot")), Theme::heading()),
                Span::styled(*insight, Theme::text()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Enter ", Theme::key_hint()),
        Span::styled(
            format!(" Run Growth Simulation {} ", glyph("arrow-right")),
            Theme::selected(),
        ),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
