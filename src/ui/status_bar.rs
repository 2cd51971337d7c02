use crate::app::navigator::Screen;
use crate::app::state::AppState;
use crate::registry::WizardStep;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Key hints for the visible screen.
fn key_hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match state.screen() {
        Screen::Landing => &[("Enter", "Get Started"), ("d", "View Demo"), ("q", "Quit")],
        Screen::Language => &[("↑↓", "Choose"), ("Enter", "Select"), ("Esc", "Back")],
        Screen::Chat => &[
            ("Enter", "Send"),
            ("F1-F3", "Tools"),
            ("^B", "Sidebar"),
            ("PgUp/PgDn", "Scroll"),
            ("Esc", "Exit"),
        ],
        Screen::Traits => &[("Enter", "Run Growth Simulation"), ("Esc", "Back to Chat")],
        Screen::Simulation => &[("Esc", "Back to Chat")],
        Screen::Registry => match state.registry.step() {
            WizardStep::Success => &[("r", "Register Another"), ("Enter", "Back to Chat")],
            WizardStep::Details => &[
                ("Tab", "Field"),
                ("←→", "Option"),
                ("Enter", "Continue"),
                ("Esc", "Back to Chat"),
            ],
            WizardStep::Location => &[
                ("Tab", "Field"),
                ("Enter", "Continue"),
                ("^B", "Back"),
                ("Esc", "Back to Chat"),
            ],
            WizardStep::Confirmation => &[
                ("Enter", "Register Asset"),
                ("^B", "Back"),
                ("Esc", "Back to Chat"),
            ],
        },
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar().add_modifier(Modifier::BOLD),
    )];

    for (key, label) in key_hints(state) {
        parts.push(Span::styled(format!(" {}", key), Theme::key_hint().bg(Theme::BG_SURFACE)));
        parts.push(Span::styled(format!(" {} ", label), Theme::status_bar()));
    }

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
