use crate::app::state::AppState;
use crate::registry::{Field, RegistrationWizard, WizardStep};
use crate::ui::glyphs::glyph;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const PANEL_WIDTH: u16 = 72;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let wizard = &state.registry;
    let panel = centered(area, PANEL_WIDTH, area.height);

    if wizard.step() == WizardStep::Success {
        render_success(frame, panel, wizard);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress
            Constraint::Min(8),    // Step body
        ])
        .split(panel);

    render_header(frame, chunks[0]);
    render_progress(frame, chunks[1], wizard.step());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {} ", wizard.step().title()),
            Theme::heading(),
        ));

    let lines = match wizard.step() {
        WizardStep::Confirmation => confirmation_lines(state),
        _ => form_lines(wizard),
    };
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[2],
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyph("arrow-left")), Theme::secondary()),
            Span::styled("Back to Chat (Esc)", Theme::secondary()),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} ", glyph("database")),
                Style::default().fg(Theme::ACCENT_EMERALD),
            ),
            Span::styled("RWA Registry", Theme::title()),
        ]),
        Line::from(Span::styled(
            "Register your agricultural assets on the blockchain",
            Theme::secondary(),
        )),
    ]);
    frame.render_widget(header, area);
}

fn render_progress(frame: &mut Frame, area: Rect, current: WizardStep) {
    let current_idx = WizardStep::PROGRESS
        .iter()
        .position(|s| *s == current)
        .unwrap_or(WizardStep::PROGRESS.len());

    let mut spans: Vec<Span> = Vec::new();
    for (i, step) in WizardStep::PROGRESS.iter().enumerate() {
        let (marker, style) = if i < current_idx {
            (glyph("check").to_string(), Style::default().fg(Theme::ACCENT_EMERALD))
        } else if i == current_idx {
            ((i + 1).to_string(), Theme::selected())
        } else {
            ((i + 1).to_string(), Theme::muted())
        };
        spans.push(Span::styled(format!(" {} ", marker), style));
        let label_style = if i <= current_idx {
            Theme::text()
        } else {
            Theme::muted()
        };
        spans.push(Span::styled(format!(" {}", step.title()), label_style));
        if i + 1 < WizardStep::PROGRESS.len() {
            let bar_style = if i < current_idx {
                Style::default().fg(Theme::ACCENT_EMERALD)
            } else {
                Theme::muted()
            };
            spans.push(Span::styled(" ──── ", bar_style));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn choice_label(field: Field, value: &str) -> String {
    field
        .choices()
        .and_then(|choices| choices.iter().find(|(v, _)| *v == value))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

fn form_lines(wizard: &RegistrationWizard) -> Vec<Line<'static>> {
    let focused = wizard.focused_field();
    let mut lines = Vec::new();

    for field in wizard.step().fields() {
        let is_focused = focused == Some(*field);
        let value = wizard.form().get(*field);

        let label_style = if is_focused {
            Theme::heading()
        } else {
            Theme::secondary()
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let marker = if is_focused { "▌ " } else { "  " };
        let mut row = vec![Span::styled(marker, Theme::heading())];
        if field.choices().is_some() {
            row.push(Span::styled("◂ ", Theme::muted()));
            row.push(Span::styled(choice_label(*field, value), Theme::input_text()));
            row.push(Span::styled(" ▸", Theme::muted()));
        } else if value.is_empty() {
            row.push(Span::styled(field.placeholder(), Theme::muted()));
        } else {
            row.push(Span::styled(value.to_string(), Theme::input_text()));
        }
        if is_focused && field.choices().is_none() {
            row.push(Span::styled("_", Theme::heading().add_modifier(Modifier::SLOW_BLINK)));
        }
        lines.push(Line::from(row));
        lines.push(Line::from(""));
    }

    if wizard.step() == WizardStep::Location {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyph("map-pin")), Theme::heading()),
            Span::styled(
                "Location data is verified and recorded with your asset.",
                Theme::muted(),
            ),
        ]));
    }

    lines
}

fn summary_lines(rows: Vec<(&'static str, String)>) -> Vec<Line<'static>> {
    rows.into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<20}", label), Theme::secondary()),
                Span::styled(value, Theme::text()),
            ])
        })
        .collect()
}

fn confirmation_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Review Your Asset", Theme::title())),
        Line::from(""),
    ];
    lines.extend(summary_lines(state.registry.form().confirmation_summary()));

    let hints = state.validation_hints();
    if !hints.is_empty() {
        lines.push(Line::from(""));
        for issue in hints {
            lines.push(Line::from(vec![
                Span::styled("! ", Style::default().fg(Theme::ACCENT_AMBER)),
                Span::styled(issue.to_string(), Style::default().fg(Theme::ACCENT_AMBER)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Your asset will be tokenized on the blockchain, creating a verifiable \
         digital record that can be used for trade, financing, and insurance purposes.",
        Theme::muted(),
    )));
    lines
}

fn render_success(frame: &mut Frame, area: Rect, wizard: &RegistrationWizard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_EMERALD))
        .padding(Padding::new(2, 2, 1, 1));

    let mut lines = vec![
        Line::from(Span::styled(
            glyph("check"),
            Style::default()
                .fg(Theme::ACCENT_EMERALD)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled("Asset Registered Successfully!", Theme::title()))
            .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Your asset has been tokenized and recorded on the blockchain",
            Theme::secondary(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    if let Some(receipt) = wizard.receipt() {
        lines.extend(summary_lines(wizard.form().success_summary(receipt)));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled(" r ", Theme::key_hint()),
            Span::styled(" Register Another Asset   ", Theme::secondary()),
            Span::styled(" Enter ", Theme::key_hint()),
            Span::styled(" Back to Chat", Theme::secondary()),
        ])
        .alignment(Alignment::Center),
    );

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
