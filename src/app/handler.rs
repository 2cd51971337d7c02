use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::navigator::Screen;
use crate::app::state::*;
use crate::chat::Tool;
use crate::content::languages::LANGUAGES;
use crate::registry::WizardStep;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::AgentReply { session } => {
            state.deliver_reply(session);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // The landing badge pulses.
            if state.screen() == Screen::Landing {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.screen() {
        Screen::Landing => handle_landing_key(state, key),
        Screen::Language => {
            handle_language_key(state, key);
            vec![]
        }
        Screen::Chat => handle_chat_key(state, key),
        Screen::Traits => {
            handle_traits_key(state, key);
            vec![]
        }
        Screen::Simulation => {
            handle_simulation_key(state, key);
            vec![]
        }
        Screen::Registry => {
            handle_registry_key(state, key);
            vec![]
        }
    }
}

fn handle_landing_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        // "Get Started" / "Try Agent"
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char('t') => {
            state.navigate(Screen::Language);
        }
        // "View Demo"
        KeyCode::Char('d') => state.navigate(Screen::Chat),
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_language_key(state: &mut AppState, key: KeyEvent) {
    let total = LANGUAGES.len();
    match key.code {
        KeyCode::Up | KeyCode::Left => {
            state.language_cursor = state.language_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Right => {
            if state.language_cursor + 1 < total {
                state.language_cursor += 1;
            }
        }
        KeyCode::Home => state.language_cursor = 0,
        KeyCode::End => state.language_cursor = total.saturating_sub(1),
        KeyCode::Enter => state.select_highlighted_language(),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            if idx < total {
                state.language_cursor = idx;
                state.select_highlighted_language();
            }
        }
        KeyCode::Esc => state.navigate(Screen::Landing),
        _ => {}
    }
}

fn handle_chat_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('b') {
        state.sidebar_open = !state.sidebar_open;
        return vec![];
    }

    match key.code {
        KeyCode::F(n) => {
            if let Some(tool) = Tool::from_hotkey(n) {
                state.open_tool(tool);
            }
        }
        // "Exit"
        KeyCode::Esc => state.navigate(Screen::Landing),
        KeyCode::Enter => {
            if let Some(action) = state.send_message() {
                return vec![action];
            }
        }
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::PageUp => {
            let max = state.chat.messages().len().saturating_sub(1);
            state.chat.scroll_offset = (state.chat.scroll_offset + 3).min(max);
        }
        KeyCode::PageDown => {
            state.chat.scroll_offset = state.chat.scroll_offset.saturating_sub(3);
        }
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => match c {
            'a' => state.input.move_home(),
            'e' => state.input.move_end(),
            'u' => {
                state.input.take_text();
            }
            _ => {}
        },
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => {}
        KeyCode::Char(c) => state.input.insert_char(c),
        _ => {}
    }
    vec![]
}

fn handle_traits_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => state.navigate(Screen::Chat),
        // "Run Growth Simulation"
        KeyCode::Enter | KeyCode::Char('s') => state.navigate(Screen::Simulation),
        _ => {}
    }
}

fn handle_simulation_key(state: &mut AppState, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')
    ) {
        state.navigate(Screen::Chat);
    }
}

fn handle_registry_key(state: &mut AppState, key: KeyEvent) {
    if state.registry.step() == WizardStep::Success {
        match key.code {
            // "Register Another"
            KeyCode::Char('r') => {
                state.registry.reset_and_restart();
            }
            KeyCode::Enter | KeyCode::Esc => state.navigate(Screen::Chat),
            _ => {}
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('b') {
        state.registry.retreat();
        return;
    }
    if key.code == KeyCode::Esc {
        state.navigate(Screen::Chat);
        return;
    }

    let wizard = &mut state.registry;
    match key.code {
        // "Continue" / "Register Asset"
        KeyCode::Enter => {
            wizard.advance();
        }
        KeyCode::Tab | KeyCode::Down => wizard.focus_next(),
        KeyCode::BackTab | KeyCode::Up => wizard.focus_prev(),
        KeyCode::Left => wizard.cycle_choice(false),
        KeyCode::Right => wizard.cycle_choice(true),
        KeyCode::Backspace => wizard.pop_char(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            wizard.push_char(c)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crate::config::AppConfig;
    use crate::registry::asset_id;
    use crossterm::event::KeyEventState;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Vec::new())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_walkthrough_to_simulation() {
        let mut s = state();
        assert_eq!(s.screen(), Screen::Landing);

        handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(s.screen(), Screen::Language);

        handle_event(&mut s, key(KeyCode::Down));
        handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(s.screen(), Screen::Chat);
        assert_eq!(s.navigator.language(), "Kiswahili");

        handle_event(&mut s, key(KeyCode::F(1)));
        assert_eq!(s.screen(), Screen::Traits);

        handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(s.screen(), Screen::Simulation);

        handle_event(&mut s, key(KeyCode::Esc));
        assert_eq!(s.screen(), Screen::Chat);
    }

    #[test]
    fn test_view_demo_skips_language() {
        let mut s = state();
        handle_event(&mut s, key(KeyCode::Char('d')));
        assert_eq!(s.screen(), Screen::Chat);
        assert_eq!(s.navigator.language(), "");
        assert_eq!(s.chat.messages().len(), 1);
    }

    #[test]
    fn test_language_digit_shortcut() {
        let mut s = state();
        s.navigate(Screen::Language);
        handle_event(&mut s, key(KeyCode::Char('4')));
        assert_eq!(s.navigator.language(), "Portuguese");
        assert_eq!(s.screen(), Screen::Chat);
    }

    #[test]
    fn test_language_cursor_is_clamped() {
        let mut s = state();
        s.navigate(Screen::Language);
        handle_event(&mut s, key(KeyCode::Up));
        assert_eq!(s.language_cursor, 0);
        for _ in 0..10 {
            handle_event(&mut s, key(KeyCode::Down));
        }
        assert_eq!(s.language_cursor, LANGUAGES.len() - 1);
    }

    #[test]
    fn test_chat_send_returns_schedule_action() {
        let mut s = state();
        s.select_language("isiXhosa");
        type_text(&mut s, "hello");
        let actions = handle_event(&mut s, key(KeyCode::Enter));
        let session = s.chat.session();
        assert_eq!(actions, vec![Action::ScheduleReply { session }]);

        let actions = handle_event(&mut s, key(KeyCode::Enter));
        assert!(actions.is_empty());

        handle_event(&mut s, AppEvent::AgentReply { session });
        let senders: Vec<_> = s.chat.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Agent, Sender::User, Sender::Agent]);
    }

    #[test]
    fn test_rapid_sends_each_schedule() {
        let mut s = state();
        s.navigate(Screen::Chat);
        type_text(&mut s, "one");
        let first = handle_event(&mut s, key(KeyCode::Enter));
        type_text(&mut s, "two");
        let second = handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);

        let session = s.chat.session();
        handle_event(&mut s, AppEvent::AgentReply { session });
        handle_event(&mut s, AppEvent::AgentReply { session });
        let agent_replies = s
            .chat
            .messages()
            .iter()
            .skip(1)
            .filter(|m| m.sender == Sender::Agent)
            .count();
        assert_eq!(agent_replies, 2);
    }

    #[test]
    fn test_tool_keys_leave_log_alone() {
        let mut s = state();
        s.navigate(Screen::Chat);
        let before = s.chat.messages().len();
        handle_event(&mut s, key(KeyCode::F(3)));
        assert_eq!(s.screen(), Screen::Registry);
        handle_event(&mut s, key(KeyCode::Esc));
        handle_event(&mut s, key(KeyCode::F(2)));
        assert_eq!(s.screen(), Screen::Simulation);
        assert_eq!(s.chat.messages().len(), before);
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut s = state();
        s.navigate(Screen::Chat);
        assert!(s.sidebar_open);
        handle_event(&mut s, ctrl('b'));
        assert!(!s.sidebar_open);
        assert!(s.input.text.is_empty());
    }

    #[test]
    fn test_registry_flow() {
        let mut s = state();
        s.navigate(Screen::Registry);

        handle_event(&mut s, key(KeyCode::Right));
        assert_eq!(s.registry.form().asset_type, "livestock");
        handle_event(&mut s, key(KeyCode::Tab));
        type_text(&mut s, "Goats");
        assert_eq!(s.registry.form().crop_name, "Goats");

        handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(s.registry.step(), WizardStep::Location);
        type_text(&mut s, "Kisumu");
        handle_event(&mut s, ctrl('b'));
        assert_eq!(s.registry.step(), WizardStep::Details);
        assert_eq!(s.registry.form().location, "Kisumu");

        handle_event(&mut s, key(KeyCode::Enter));
        handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(s.registry.step(), WizardStep::Confirmation);
        handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(s.registry.step(), WizardStep::Success);
        let id = s.registry.receipt().map(|r| r.asset_id.clone()).unwrap();
        assert!(asset_id::is_well_formed(&id));

        handle_event(&mut s, key(KeyCode::Char('r')));
        assert_eq!(s.registry.step(), WizardStep::Details);
        assert_eq!(s.registry.form().asset_type, "harvest");
        assert_eq!(s.screen(), Screen::Registry);
    }

    #[test]
    fn test_registry_back_to_chat_discards() {
        let mut s = state();
        s.navigate(Screen::Registry);
        handle_event(&mut s, key(KeyCode::Tab));
        type_text(&mut s, "Millet");
        handle_event(&mut s, key(KeyCode::Esc));
        assert_eq!(s.screen(), Screen::Chat);
        assert!(s.registry.form().crop_name.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for screen in Screen::ALL {
            let mut s = state();
            s.navigate(screen);
            assert_eq!(handle_event(&mut s, ctrl('c')), vec![Action::Quit]);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let mut s = state();
        let release = AppEvent::Terminal(CEvent::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));
        handle_event(&mut s, release);
        assert_eq!(s.screen(), Screen::Landing);
    }

    fn alt(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    #[test]
    fn test_chat_modifier_keys_do_not_type() {
        let mut s = state();
        s.navigate(Screen::Chat);
        type_text(&mut s, "rain");

        handle_event(&mut s, ctrl('a'));
        assert_eq!(s.input.cursor, 0);
        handle_event(&mut s, ctrl('e'));
        assert_eq!(s.input.cursor, 4);
        handle_event(&mut s, ctrl('x'));
        handle_event(&mut s, alt('x'));
        assert_eq!(s.input.text, "rain");

        handle_event(&mut s, ctrl('u'));
        assert!(s.input.text.is_empty());
        assert_eq!(s.input.cursor, 0);
    }

    #[test]
    fn test_registry_modifier_keys_do_not_type() {
        let mut s = state();
        s.open_tool(Tool::Registry);
        handle_event(&mut s, key(KeyCode::Tab));
        type_text(&mut s, "Teff");
        handle_event(&mut s, ctrl('a'));
        handle_event(&mut s, alt('e'));
        assert_eq!(s.registry.form().crop_name, "Teff");
    }
}
