use crate::chat::SessionId;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A deferred assistant reply is due
    AgentReply { session: SessionId },

    /// Tick for UI refresh
    Tick,
}
