use crate::app::navigator::Screen;

/// Shortcut cards in the chat sidebar. Each one is a plain navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Traits,
    Simulation,
    Registry,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Traits, Tool::Simulation, Tool::Registry];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Traits => "Trait Scoring",
            Tool::Simulation => "Crop Simulation",
            Tool::Registry => "RWA Registry",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::Traits => "Analyze crop characteristics",
            Tool::Simulation => "Predict growth patterns",
            Tool::Registry => "Register your harvest",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Traits => "bar-chart",
            Tool::Simulation => "trending-up",
            Tool::Registry => "database",
        }
    }

    /// Function key that opens the tool from the chat screen.
    pub fn hotkey(self) -> u8 {
        match self {
            Tool::Traits => 1,
            Tool::Simulation => 2,
            Tool::Registry => 3,
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            Tool::Traits => Screen::Traits,
            Tool::Simulation => Screen::Simulation,
            Tool::Registry => Screen::Registry,
        }
    }

    pub fn from_hotkey(n: u8) -> Option<Tool> {
        Tool::ALL.into_iter().find(|t| t.hotkey() == n)
    }
}
