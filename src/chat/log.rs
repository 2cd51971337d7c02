use chrono::{DateTime, Local};

/// Identifies one conversation. A new language selection starts a new one.
pub type SessionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

/// Opening line of every conversation.
pub fn greeting(language: &str) -> String {
    let mut text = "Hello! I'm your AI farming assistant. How can I help you today?".to_string();
    if !language.is_empty() {
        text.push_str(&format!(" (Speaking in {})", language));
    }
    text
}

/// Append-only message log for the current session.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    session: SessionId,
    next_seq: u64,
    pub scroll_offset: usize,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[cfg(test)]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Discard the current conversation and open a new one with a greeting.
    pub fn start_session(&mut self, language: &str) -> SessionId {
        self.session += 1;
        self.messages.clear();
        self.scroll_offset = 0;
        self.push(Sender::Agent, greeting(language));
        tracing::debug!(session = self.session, "chat session started");
        self.session
    }

    /// Open a session unless one is already running.
    pub fn ensure_started(&mut self, language: &str) {
        if self.session == 0 {
            self.start_session(language);
        }
    }

    /// Append a user message. Returns the session its reply belongs to,
    /// or `None` when the text is blank.
    pub fn push_user(&mut self, text: &str) -> Option<SessionId> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(Sender::User, text.to_string());
        Some(self.session)
    }

    /// Append an agent reply scheduled for `session`. Replies for a
    /// replaced session are dropped.
    pub fn deliver_reply(&mut self, session: SessionId, text: &str) -> bool {
        if session != self.session {
            tracing::debug!(session, current = self.session, "dropping stale reply");
            return false;
        }
        self.push(Sender::Agent, text.to_string());
        true
    }

    fn push(&mut self, sender: Sender, content: String) {
        let timestamp = Local::now();
        self.next_seq += 1;
        let id = format!("{}-{}", timestamp.timestamp_millis(), self.next_seq);
        self.messages.push(ChatMessage {
            id,
            sender,
            content,
            timestamp,
        });
        if let Some(msg) = self.messages.last() {
            tracing::trace!(id = %msg.id, sender = ?msg.sender, "message appended");
        }
        // Follow the newest message.
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_mentions_language() {
        assert_eq!(
            greeting("Kiswahili"),
            "Hello! I'm your AI farming assistant. How can I help you today? (Speaking in Kiswahili)"
        );
        assert!(!greeting("").contains("Speaking in"));
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let mut log = ChatLog::new();
        log.start_session("");
        assert_eq!(log.push_user(""), None);
        assert_eq!(log.push_user("   "), None);
        assert_eq!(log.push_user("\t\n"), None);
        assert_eq!(log.messages().len(), 1);
    }

    #[test]
    fn test_user_message_appended_in_order() {
        let mut log = ChatLog::new();
        let session = log.start_session("isiXhosa");
        assert_eq!(log.push_user("hello"), Some(session));
        assert_eq!(log.push_user("  when to plant?  "), Some(session));

        let msgs = log.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].sender, Sender::User);
        assert_eq!(msgs[1].content, "hello");
        // Content is kept verbatim, only the emptiness check trims.
        assert_eq!(msgs[2].content, "  when to plant?  ");
        assert_ne!(msgs[1].id, msgs[2].id);
    }

    #[test]
    fn test_stale_reply_is_dropped() {
        let mut log = ChatLog::new();
        let first = log.start_session("Portuguese");
        log.push_user("ola");
        let second = log.start_session("Kiswahili");
        assert_ne!(first, second);

        assert!(!log.deliver_reply(first, "late"));
        assert_eq!(log.messages().len(), 1);

        assert!(log.deliver_reply(second, "on time"));
        assert_eq!(log.messages().last().map(|m| m.sender), Some(Sender::Agent));
    }

    #[test]
    fn test_ensure_started_keeps_running_session() {
        let mut log = ChatLog::new();
        log.ensure_started("");
        let session = log.session();
        log.push_user("hi");
        log.ensure_started("");
        assert_eq!(log.session(), session);
        assert_eq!(log.messages().len(), 2);
    }
}
