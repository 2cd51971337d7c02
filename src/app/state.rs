use crate::app::action::Action;
use crate::app::navigator::{Navigator, Screen};
use crate::chat::{ChatLog, SessionId, Tool};
use crate::config::AppConfig;
use crate::content::languages::LANGUAGES;
use crate::registry::validation::{self, FieldIssue};
use crate::registry::RegistrationWizard;
use unicode_width::UnicodeWidthStr;

/// Single-line text input with a byte-offset cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub navigator: Navigator,
    pub chat: ChatLog,
    pub input: InputState,
    pub registry: RegistrationWizard,
    /// Highlighted card on the language screen.
    pub language_cursor: usize,
    pub sidebar_open: bool,
    /// Landing artwork, already resolved to the fallback if needed.
    pub banner: Vec<String>,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig, banner: Vec<String>) -> Self {
        let sidebar_open = config.ui.show_sidebar;
        Self {
            config,
            navigator: Navigator::new(),
            chat: ChatLog::new(),
            input: InputState::new(),
            registry: RegistrationWizard::new(),
            language_cursor: 0,
            sidebar_open,
            banner,
            should_quit: false,
            dirty: true,
            tick_count: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    pub fn navigate(&mut self, screen: Screen) {
        let previous = self.navigator.navigate(screen);
        self.on_screen_change(previous, screen);
        if screen == Screen::Chat {
            let language = self.navigator.language().to_string();
            self.chat.ensure_started(&language);
        }
    }

    /// Record the language and open a fresh conversation in it.
    pub fn select_language(&mut self, language: &str) {
        let previous = self.navigator.select_language(language);
        self.on_screen_change(previous, Screen::Chat);
        self.chat.start_session(language);
        self.input.take_text();
    }

    pub fn select_highlighted_language(&mut self) {
        if let Some(lang) = LANGUAGES.get(self.language_cursor) {
            self.select_language(lang.name);
        }
    }

    pub fn open_tool(&mut self, tool: Tool) {
        self.navigate(tool.screen());
    }

    /// Submit the chat input. Blank input is left untouched.
    pub fn send_message(&mut self) -> Option<Action> {
        if self.input.is_blank() {
            return None;
        }
        let text = self.input.take_text();
        let session = self.chat.push_user(&text)?;
        self.dirty = true;
        tracing::debug!(session, "user message sent");
        Some(Action::ScheduleReply { session })
    }

    pub fn deliver_reply(&mut self, session: SessionId) {
        let text = self.config.chat.reply_text.clone();
        if self.chat.deliver_reply(session, &text) {
            self.dirty = true;
        }
    }

    /// Advisory hints for the confirmation step, when enabled.
    pub fn validation_hints(&self) -> Vec<FieldIssue> {
        if !self.config.registry.validation_hints {
            return Vec::new();
        }
        validation::check(self.registry.form())
    }

    pub fn status_line(&self) -> String {
        let language = self.navigator.language();
        let mut s = self.screen().title().to_string();
        if !language.is_empty() {
            s.push_str(&format!(" | Language: {}", language));
        }
        s
    }

    // Registry state lives only while its screen is shown.
    fn on_screen_change(&mut self, previous: Screen, next: Screen) {
        if previous == Screen::Registry && next != Screen::Registry {
            self.registry.reset();
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crate::registry::{Field, WizardStep};

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Vec::new())
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "maïze".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "maze");
        input.move_home();
        input.delete_forward();
        input.move_end();
        input.insert_char('!');
        assert_eq!(input.text, "aze!");
        assert_eq!(input.cursor_column(), 4);
        assert_eq!(input.take_text(), "aze!");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_blank_send_keeps_input_and_log() {
        let mut s = state();
        s.navigate(Screen::Chat);
        let before = s.chat.messages().len();

        assert_eq!(s.send_message(), None);
        for c in "   ".chars() {
            s.input.insert_char(c);
        }
        assert_eq!(s.send_message(), None);
        assert_eq!(s.input.text, "   ");
        assert_eq!(s.chat.messages().len(), before);
    }

    #[test]
    fn test_send_appends_user_then_reply() {
        let mut s = state();
        s.select_language("Kiswahili");
        for c in "hello".chars() {
            s.input.insert_char(c);
        }
        let action = s.send_message();
        let session = s.chat.session();
        assert_eq!(action, Some(Action::ScheduleReply { session }));
        assert!(s.input.text.is_empty());

        let msgs = s.chat.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[1].sender, Sender::User);
        assert_eq!(msgs[1].content, "hello");

        s.deliver_reply(session);
        let last = s.chat.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Agent);
        assert_eq!(last.content, s.config.chat.reply_text);
    }

    #[test]
    fn test_language_starts_new_session() {
        let mut s = state();
        s.navigate(Screen::Chat);
        assert!(!s.chat.messages()[0].content.contains("Speaking in"));

        s.navigate(Screen::Language);
        s.select_language("Nigerian Pidgin");
        assert_eq!(s.screen(), Screen::Chat);
        assert_eq!(s.navigator.language(), "Nigerian Pidgin");
        assert_eq!(s.chat.messages().len(), 1);
        assert!(s.chat.messages()[0]
            .content
            .ends_with("(Speaking in Nigerian Pidgin)"));
    }

    #[test]
    fn test_chat_survives_tool_round_trip() {
        let mut s = state();
        s.select_language("isiXhosa");
        s.input.insert_char('x');
        s.send_message();
        s.open_tool(Tool::Traits);
        s.navigate(Screen::Chat);
        assert_eq!(s.chat.messages().len(), 2);
    }

    #[test]
    fn test_leaving_registry_discards_form() {
        let mut s = state();
        s.open_tool(Tool::Registry);
        s.registry.update_field(Field::CropName, "Teff");
        s.registry.advance();
        s.navigate(Screen::Registry);
        assert_eq!(s.registry.step(), WizardStep::Location);

        s.navigate(Screen::Chat);
        assert_eq!(s.registry.step(), WizardStep::Details);
        assert!(s.registry.form().crop_name.is_empty());
    }

    #[test]
    fn test_validation_hints_are_opt_in() {
        let mut s = state();
        s.registry.update_field(Field::Quantity, "plenty");
        assert!(s.validation_hints().is_empty());

        s.config.registry.validation_hints = true;
        assert_eq!(s.validation_hints().len(), 1);
    }
}
