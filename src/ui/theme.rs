use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42);
    pub const BG_SURFACE: Color = Color::Rgb(30, 41, 59);
    pub const BORDER_DIM: Color = Color::Rgb(71, 85, 105);
    pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249);
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
    pub const ACCENT_EMERALD: Color = Color::Rgb(16, 185, 129);
    pub const ACCENT_GREEN: Color = Color::Rgb(34, 197, 94);
    pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);
    pub const ACCENT_CYAN: Color = Color::Rgb(6, 182, 212);
    pub const ACCENT_AMBER: Color = Color::Rgb(245, 158, 11);
    pub const ACCENT_PURPLE: Color = Color::Rgb(168, 85, 247);
    pub const ACCENT_ORANGE: Color = Color::Rgb(249, 115, 22);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_EMERALD)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_EMERALD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn user_bubble() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn agent_bubble() -> Style {
        Style::default().fg(Self::ACCENT_CYAN)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_EMERALD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Gauge colour per trait, matching the card gradients.
    pub fn trait_color(id: &str) -> Color {
        match id {
            "drought" => Self::ACCENT_BLUE,
            "growth" => Self::ACCENT_EMERALD,
            "disease" => Self::ACCENT_PURPLE,
            "yield" => Self::ACCENT_ORANGE,
            _ => Self::TEXT_SECONDARY,
        }
    }
}
