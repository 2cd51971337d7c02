use crate::content::growth::{
    self, StageStatus, CYCLE_DAYS, ENVIRONMENT, EXPECTED_OUTCOMES, GROWTH, METRICS,
    OPTIMAL_CONDITIONS, STAGES,
};
use crate::content::SUBJECT;
use crate::ui::glyphs::glyph;
use crate::ui::layout::columns;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, _state: &crate::app::state::AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(5),  // Stage timeline
            Constraint::Min(10),    // Charts
            Constraint::Length(4),  // Metrics
            Constraint::Length(6),  // Insights
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_stages(frame, chunks[1]);

    let charts = columns(chunks[2], 2);
    render_growth_chart(frame, charts[0]);
    render_environment_chart(frame, charts[1]);

    render_metrics(frame, chunks[3]);
    render_insights(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyph("arrow-left")), Theme::secondary()),
            Span::styled("Back to Chat (Esc)", Theme::secondary()),
        ]),
        Line::from(Span::styled("Growth Simulation", Theme::title())),
        Line::from(Span::styled(
            format!("{} • {}-day cycle", SUBJECT, CYCLE_DAYS),
            Theme::secondary(),
        )),
    ]);
    frame.render_widget(header, area);

    let download = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(" Download Report ", Theme::muted())),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(download, area);
}

fn stage_color(status: StageStatus) -> Color {
    match status {
        StageStatus::Complete => Theme::ACCENT_EMERALD,
        StageStatus::InProgress => Theme::ACCENT_BLUE,
        StageStatus::Upcoming => Theme::TEXT_MUTED,
    }
}

fn render_stages(frame: &mut Frame, area: Rect) {
    for (i, (stage, cell)) in STAGES.iter().zip(columns(area, STAGES.len())).enumerate() {
        let color = stage_color(stage.status);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Style::default().fg(color))
            .title(Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default().fg(Theme::BG_DARK).bg(color),
                ),
                Span::styled(format!(" {} ", stage.name), Theme::title()),
            ]));
        let body = Paragraph::new(vec![
            Line::from(Span::styled(format!("Days {}", stage.days), Theme::secondary())),
            Line::from(Span::styled(stage.status.label(), Style::default().fg(color))),
        ])
        .block(block);
        frame.render_widget(body, cell);
    }
}

fn day_axis() -> Axis<'static> {
    Axis::default()
        .title(Span::styled("day", Theme::muted()))
        .style(Theme::muted())
        .bounds([0.0, CYCLE_DAYS as f64])
        .labels(vec![
            Span::raw("0"),
            Span::raw("45"),
            Span::raw("75"),
            Span::raw(CYCLE_DAYS.to_string()),
        ])
}

fn value_axis(max: f64) -> Axis<'static> {
    Axis::default()
        .style(Theme::muted())
        .bounds([0.0, max])
        .labels(vec![
            Span::raw("0"),
            Span::raw(format!("{}", (max / 2.0).round())),
            Span::raw(format!("{}", max)),
        ])
}

fn chart_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", title), Theme::title()))
}

fn render_growth_chart(frame: &mut Frame, area: Rect) {
    let height = growth::series(GROWTH, |s| s.day, |s| s.height_cm);
    let biomass = growth::series(GROWTH, |s| s.day, |s| s.biomass_g);

    let datasets = vec![
        Dataset::default()
            .name("Height (cm)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Theme::ACCENT_EMERALD))
            .data(&height),
        Dataset::default()
            .name("Biomass (g)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Theme::ACCENT_BLUE))
            .data(&biomass),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block("Plant Growth Trajectory"))
        .x_axis(day_axis())
        .y_axis(value_axis(320.0));
    frame.render_widget(chart, area);
}

fn render_environment_chart(frame: &mut Frame, area: Rect) {
    let rainfall = growth::series(ENVIRONMENT, |s| s.day, |s| s.rainfall_mm);
    let temperature = growth::series(ENVIRONMENT, |s| s.day, |s| s.temperature_c);

    let datasets = vec![
        Dataset::default()
            .name("Rainfall (mm)")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Theme::ACCENT_CYAN))
            .data(&rainfall),
        Dataset::default()
            .name("Temperature (°C)")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Theme::ACCENT_AMBER))
            .data(&temperature),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block("Environmental Conditions"))
        .x_axis(day_axis())
        .y_axis(value_axis(60.0));
    frame.render_widget(chart, area);
}

fn render_metrics(frame: &mut Frame, area: Rect) {
    for (metric, cell) in METRICS.iter().zip(columns(area, METRICS.len())) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border())
            .title(Line::from(vec![
                Span::styled(format!(" {} ", glyph(metric.icon)), Theme::heading()),
                Span::styled(format!("{} ", metric.label), Theme::secondary()),
            ]));
        let body = Paragraph::new(vec![
            Line::from(Span::styled(metric.value, Theme::title())),
            Line::from(Span::styled(metric.caption, Theme::muted())),
        ])
        .block(block);
        frame.render_widget(body, cell);
    }
}

fn bullet_list(title: &'static str, items: &[&'static str], color: Color) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(title, Theme::title()))];
    for item in items {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", glyph("dot")), Style::default().fg(color)),
            Span::styled(*item, Theme::text()),
        ]));
    }
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn render_insights(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .title(Span::styled(" Key Insights ", Theme::heading()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = columns(inner, 2);
    frame.render_widget(
        bullet_list("Optimal Conditions", OPTIMAL_CONDITIONS, Theme::ACCENT_EMERALD),
        halves[0],
    );
    frame.render_widget(
        bullet_list("Expected Outcomes", EXPECTED_OUTCOMES, Theme::ACCENT_BLUE),
        halves[1],
    );
}
