//! Top-level screen selector.
//!
//! Every transition is total: any screen may reach any other, and the
//! only carried context is the language chosen on the language screen.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Landing,
    Language,
    Chat,
    Traits,
    Simulation,
    Registry,
}

impl Screen {
    #[cfg(test)]
    pub const ALL: [Screen; 6] = [
        Screen::Landing,
        Screen::Language,
        Screen::Chat,
        Screen::Traits,
        Screen::Simulation,
        Screen::Registry,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Landing => "Welcome",
            Screen::Language => "Choose Your Language",
            Screen::Chat => "AI Assistant",
            Screen::Traits => "Trait Scoring",
            Screen::Simulation => "Growth Simulation",
            Screen::Registry => "RWA Registry",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Landing => "landing",
            Screen::Language => "language",
            Screen::Chat => "chat",
            Screen::Traits => "traits",
            Screen::Simulation => "simulation",
            Screen::Registry => "registry",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    screen: Screen,
    language: String,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Selected language label; empty until one is chosen.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Show `screen`. Returns the screen that was visible before.
    pub fn navigate(&mut self, screen: Screen) -> Screen {
        let previous = self.screen;
        self.screen = screen;
        tracing::debug!(from = %previous, to = %screen, "navigate");
        previous
    }

    pub fn select_language(&mut self, language: impl Into<String>) -> Screen {
        self.language = language.into();
        tracing::info!(language = %self.language, "language selected");
        self.navigate(Screen::Chat)
    }
}
