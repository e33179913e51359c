//! Event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::screen::Screen;
use super::state::{AppState, Mode};

/// Lines scrolled by Ctrl+U / Ctrl+D in a chat thread
const CHAT_PAGE: u16 = 5;

/// Handle a key press
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.screen() == Screen::Auth {
        handle_auth_key(state, key);
        return;
    }

    if state.drawer.is_open() {
        handle_drawer_key(state, key);
        return;
    }

    match state.mode {
        Mode::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                state.mode = Mode::Normal;
            }
            return;
        }
        Mode::Compose => {
            handle_compose_key(state, key);
            return;
        }
        Mode::Search => {
            handle_search_key(state, key);
            return;
        }
        Mode::Normal => {}
    }

    // Global shortcuts (work in normal mode)
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => {
            state.should_quit = true;
            return;
        }
        (_, KeyCode::Char('?')) | (_, KeyCode::F(1)) => {
            state.mode = Mode::Help;
            return;
        }
        (_, KeyCode::Char('m')) => {
            state.drawer.open(state.screen());
            return;
        }
        (_, KeyCode::Char('t')) => {
            state.toggle_theme();
            state.set_status(format!("Тема: {}", state.theme().name()));
            return;
        }
        (_, KeyCode::Tab) => {
            state.next_tab();
            return;
        }
        (_, KeyCode::BackTab) => {
            state.prev_tab();
            return;
        }
        (_, KeyCode::Char(c @ '1'..='5')) => {
            let idx = c as usize - '1' as usize;
            if let Some(screen) = Screen::tabs().get(idx) {
                state.navigate(*screen);
            }
            return;
        }
        _ => {}
    }

    // Screen-specific handling
    match state.screen() {
        Screen::Feed => handle_feed_key(state, key),
        Screen::Friends => handle_friends_key(state, key),
        Screen::City => handle_wall_key(state, key),
        Screen::Chat => handle_chat_key(state, key),
        Screen::Auth | Screen::Profile | Screen::Map | Screen::Leaderboard | Screen::Search => {
            if key.code == KeyCode::Esc {
                state.clear_status();
            }
        }
    }
}

fn is_typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn handle_auth_key(state: &mut AppState, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('t')) | (_, KeyCode::F(2)) => state.toggle_theme(),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) | (_, KeyCode::F(3)) => {
            state.auth.toggle_mode();
        }
        (_, KeyCode::Tab | KeyCode::Down) => state.auth.focus_next(),
        (_, KeyCode::BackTab | KeyCode::Up) => state.auth.focus_prev(),
        (_, KeyCode::Enter) => state.submit_auth(),
        (_, KeyCode::Backspace) => state.auth.pop(),
        (_, KeyCode::Esc) => state.should_quit = true,
        _ => {
            if let Some(c) = is_typed_char(&key) {
                state.auth.push(c);
            }
        }
    }
}

fn handle_drawer_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.drawer.next(),
        KeyCode::Up | KeyCode::Char('k') => state.drawer.prev(),
        KeyCode::Enter | KeyCode::Char('l') => state.choose_drawer_item(),
        KeyCode::Esc | KeyCode::Char('m' | 'h') => state.drawer.close(),
        KeyCode::Char('q') => state.should_quit = true,
        _ => {}
    }
}

fn handle_compose_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.cancel_compose(),
        KeyCode::Enter => {
            state.submit_compose();
        }
        KeyCode::Tab => {
            if let Some(composer) = state.active_composer_mut() {
                composer.toggle_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(composer) = state.active_composer_mut() {
                composer.pop();
            }
        }
        _ => {
            if let Some(c) = is_typed_char(&key)
                && let Some(composer) = state.active_composer_mut()
            {
                composer.push(c);
            }
        }
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) {
    let Some(browser) = state.active_browser_mut() else {
        state.mode = Mode::Normal;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            browser.clear_query();
            state.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            state.mode = Mode::Normal;
            open_highlighted_city(state);
        }
        KeyCode::Down => browser.highlight_next(),
        KeyCode::Up => browser.highlight_prev(),
        KeyCode::Backspace => browser.pop_query(),
        _ => {
            if let Some(c) = is_typed_char(&key) {
                browser.push_query(c);
            }
        }
    }
}

fn open_highlighted_city(state: &mut AppState) {
    let opened = match state.screen() {
        Screen::City => state.walls.open_highlighted(),
        Screen::Chat => state.chat.open_highlighted(),
        _ => false,
    };
    if !opened {
        state.set_status("Город не найден");
    }
}

fn handle_feed_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.feed.select_next(),
        KeyCode::Char('k') | KeyCode::Up => state.feed.select_prev(),
        KeyCode::Char('g') => state.feed.selected_post = 0,
        KeyCode::Char('G') => {
            state.feed.selected_post = state.feed.posts.len().saturating_sub(1);
        }
        KeyCode::Char('n') | KeyCode::Char('+') => state.start_compose(),
        KeyCode::Esc => state.clear_status(),
        _ => {}
    }
}

fn handle_friends_key(state: &mut AppState, key: KeyEvent) {
    let columns = super::panels::FriendsPanel::COLUMNS as isize;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.friends.move_by(columns),
        KeyCode::Char('k') | KeyCode::Up => state.friends.move_by(-columns),
        KeyCode::Char('l') | KeyCode::Right => state.friends.move_by(1),
        KeyCode::Char('h') | KeyCode::Left => state.friends.move_by(-1),
        KeyCode::Char('a') | KeyCode::Enter => {
            if let Some(name) = state.friends.highlighted().map(|f| f.name.clone()) {
                state.set_status(format!("Заявка отправлена: {name}"));
            }
        }
        KeyCode::Esc => state.clear_status(),
        _ => {}
    }
}

fn handle_wall_key(state: &mut AppState, key: KeyEvent) {
    let has_city = state.walls.cities.selected().is_some();
    match key.code {
        KeyCode::Char('/') => state.mode = Mode::Search,
        KeyCode::Char('j') | KeyCode::Down => {
            if has_city {
                state.walls.select_next();
            } else {
                state.walls.cities.highlight_next();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if has_city {
                state.walls.select_prev();
            } else {
                state.walls.cities.highlight_prev();
            }
        }
        // The city list stays navigable while a wall is open
        KeyCode::Char('J') => state.walls.cities.highlight_next(),
        KeyCode::Char('K') => state.walls.cities.highlight_prev(),
        KeyCode::Enter => open_highlighted_city(state),
        KeyCode::Char('n') | KeyCode::Char('+') => state.start_compose(),
        KeyCode::Esc | KeyCode::Backspace => {
            if has_city {
                state.walls.close();
            } else {
                state.clear_status();
            }
        }
        _ => {}
    }
}

fn handle_chat_key(state: &mut AppState, key: KeyEvent) {
    let has_city = state.chat.cities.selected().is_some();
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('/')) => state.mode = Mode::Search,
        (KeyModifiers::CONTROL, KeyCode::Char('u')) | (_, KeyCode::PageUp) => {
            state.chat.scroll_up(CHAT_PAGE);
        }
        (KeyModifiers::CONTROL, KeyCode::Char('d')) | (_, KeyCode::PageDown) => {
            state.chat.scroll_down(CHAT_PAGE);
        }
        (_, KeyCode::Char('G')) => state.chat.jump_to_latest(),
        (_, KeyCode::Char('j') | KeyCode::Down) => state.chat.cities.highlight_next(),
        (_, KeyCode::Char('k') | KeyCode::Up) => state.chat.cities.highlight_prev(),
        (_, KeyCode::Enter) => open_highlighted_city(state),
        (_, KeyCode::Char('i' | 'n')) => state.start_compose(),
        (_, KeyCode::Esc | KeyCode::Backspace) => {
            if has_city {
                state.chat.close();
            } else {
                state.clear_status();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::theme::Theme;

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn signed_in() -> AppState {
        let mut state = AppState::new(Config::default());
        press(&mut state, KeyCode::Enter);
        state
    }

    #[test]
    fn test_auth_enter_goes_to_feed() {
        let mut state = AppState::new(Config::default());
        type_text(&mut state, "qwerty");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "secret");
        assert_eq!(state.screen(), Screen::Auth);
        assert_eq!(state.auth.email, "qwerty");
        assert_eq!(state.auth.password, "secret");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::Feed);
    }

    #[test]
    fn test_auth_letters_are_text_not_shortcuts() {
        let mut state = AppState::new(Config::default());
        type_text(&mut state, "qt");
        assert!(!state.should_quit);
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.auth.email, "qt");
    }

    #[test]
    fn test_auth_shortcuts() {
        let mut state = AppState::new(Config::default());
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.theme(), Theme::Light);
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.auth.mode, crate::app::AuthMode::Register);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = AppState::new(Config::default());
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn test_drawer_navigation_to_profile() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('m'));
        assert!(state.drawer.is_open());
        while state.drawer.highlighted() != Screen::Profile {
            press(&mut state, KeyCode::Char('j'));
        }
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::Profile);
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn test_drawer_swallows_shortcuts() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('m'));
        press(&mut state, KeyCode::Char('t'));
        assert_eq!(state.theme(), Theme::Dark);
        press(&mut state, KeyCode::Esc);
        assert!(!state.drawer.is_open());
        assert_eq!(state.screen(), Screen::Feed);
    }

    #[test]
    fn test_theme_key_twice() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('t'));
        assert_eq!(state.theme(), Theme::Light);
        press(&mut state, KeyCode::Char('t'));
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.screen(), Screen::Chat);
        press(&mut state, KeyCode::Char('5'));
        assert_eq!(state.screen(), Screen::Profile);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.screen(), Screen::City);
    }

    #[test]
    fn test_feed_compose_flow() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.mode, Mode::Compose);
        type_text(&mut state, "Хороший клёв!");
        // Shortcuts are plain text while composing
        type_text(&mut state, "q");
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.feed.composer.text(), "Хороший клёв!");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.feed.composer.text(), "");
        assert!(!state.feed.composer.is_open());
        assert_eq!(state.feed.posts[0].content, "Хороший клёв!");
    }

    #[test]
    fn test_feed_compose_escape_keeps_draft() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('n'));
        type_text(&mut state, "черновик");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.feed.composer.is_open());
        assert_eq!(state.feed.posts.len(), 2);

        press(&mut state, KeyCode::Char('n'));
        assert!(state.feed.composer.is_open());
        assert_eq!(state.feed.composer.text(), "черновик");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.feed.posts.len(), 3);
        assert_eq!(state.feed.composer.text(), "");
    }

    #[test]
    fn test_city_search_and_select() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('4'));
        assert_eq!(state.screen(), Screen::City);

        press(&mut state, KeyCode::Char('/'));
        assert_eq!(state.mode, Mode::Search);
        type_text(&mut state, "Моск");
        assert_eq!(state.walls.cities.filtered().len(), 1);
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(
            state.walls.cities.selected().map(|c| c.name.as_str()),
            Some("Москва")
        );

        press(&mut state, KeyCode::Esc);
        assert!(state.walls.cities.selected().is_none());
    }

    #[test]
    fn test_search_without_match_keeps_empty_state() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "zzz");
        press(&mut state, KeyCode::Enter);
        assert!(state.chat.cities.selected().is_none());
        assert_eq!(state.status, "Город не найден");
    }

    #[test]
    fn test_search_escape_clears_query() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('4'));
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "Каз");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.walls.cities.query(), "");
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_wall_post_with_tags() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('4'));
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('n'));
        type_text(&mut state, "Окунь на мормышку");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "#окунь");
        press(&mut state, KeyCode::Enter);

        let post = &state.walls.posts()[0];
        assert_eq!(post.content, "Окунь на мормышку");
        assert_eq!(post.tags, vec!["окунь"]);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_chat_send_flow() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.chat.cities.selected().map(|c| c.id), Some(2));

        press(&mut state, KeyCode::Char('i'));
        type_text(&mut state, "Кто на Неву?");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.chat.thread().len(), 4);
        assert_eq!(state.mode, Mode::Compose);

        // Blank send is ignored
        type_text(&mut state, "   ");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.chat.thread().len(), 4);
        assert_eq!(state.chat.composer.text(), "   ");

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.chat.composer.text(), "   ");
    }

    #[test]
    fn test_chat_scroll_keys() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Enter);
        state.chat.set_max_scroll(20);
        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.chat.scroll_back(), CHAT_PAGE);
        press(&mut state, KeyCode::Char('G'));
        assert_eq!(state.chat.scroll_back(), 0);
    }

    #[test]
    fn test_help_popup() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.mode, Mode::Help);
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Normal);
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_friend_request_status() {
        let mut state = signed_in();
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Char('l'));
        press(&mut state, KeyCode::Char('a'));
        assert_eq!(state.status, "Заявка отправлена: Петр");
    }
}
