//! Application state

use super::auth::AuthForm;
use super::browser::Browser;
use super::composer::Composer;
use super::drawer::Drawer;
use super::panels::{ChatPanel, FeedPanel, FriendsPanel, WallPanel};
use super::screen::Screen;
use crate::config::Config;
use crate::models::{City, User};
use crate::seed;
use crate::theme::Theme;

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation keys
    #[default]
    Normal,
    /// Typing into the active screen's composer
    Compose,
    /// Typing into the active screen's city search
    Search,
    /// Help popup
    Help,
}

/// Application state.
///
/// The shell owns the theme and the current screen; panels only read them and
/// change them through [`AppState::toggle_theme`] and [`AppState::navigate`].
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Whether to quit
    pub should_quit: bool,
    /// Input mode
    pub mode: Mode,
    /// Signed-in user
    pub user: User,
    /// Navigation drawer
    pub drawer: Drawer,
    /// Auth form
    pub auth: AuthForm,
    /// Feed view state
    pub feed: FeedPanel,
    /// City walls view state
    pub walls: WallPanel,
    /// City chats view state
    pub chat: ChatPanel,
    /// Friends view state
    pub friends: FriendsPanel,
    /// Status message (bottom bar)
    pub status: String,

    theme: Theme,
    screen: Screen,
    /// Tick counter for animations
    tick: u64,
}

impl AppState {
    /// Create a new app state with every panel mounted on the mock data
    pub fn new(config: Config) -> Self {
        let theme = config.theme;
        let screen = config.start_screen;

        Self {
            config,
            should_quit: false,
            mode: Mode::Normal,
            user: seed::current_user(),
            drawer: Drawer::default(),
            auth: AuthForm::default(),
            feed: FeedPanel::new(),
            walls: WallPanel::new(),
            chat: ChatPanel::new(),
            friends: FriendsPanel::new(),
            status: String::new(),
            theme,
            screen,
            tick: 0,
        }
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Visible screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Show `screen`. No guard, no history.
    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = self.screen.slug(), to = screen.slug(), "navigate");
        self.screen = screen;
        self.mode = Mode::Normal;
    }

    /// Flip between dark and light
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme = self.theme;
        tracing::debug!(theme = self.theme.slug(), "theme toggled");
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Get current tick
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Submit the auth form. Always succeeds and opens the feed.
    pub fn submit_auth(&mut self) {
        tracing::info!(mode = ?self.auth.mode, "signed in");
        self.navigate(Screen::Feed);
        self.set_status("Добро пожаловать в РыбаКоп!");
    }

    /// Navigate to the drawer's highlighted entry and close the drawer
    pub fn choose_drawer_item(&mut self) {
        let target = self.drawer.highlighted();
        self.navigate(target);
        self.drawer.close();
    }

    /// Navigate via the drawer to a specific screen
    pub fn choose_screen(&mut self, screen: Screen) {
        self.drawer.point_at(screen);
        self.choose_drawer_item();
    }

    /// Switch to the next bottom tab
    pub fn next_tab(&mut self) {
        self.step_tab(1);
    }

    /// Switch to the previous bottom tab
    pub fn prev_tab(&mut self) {
        self.step_tab(Screen::tabs().len() - 1);
    }

    fn step_tab(&mut self, step: usize) {
        let tabs = Screen::tabs();
        let next = match tabs.iter().position(|s| *s == self.screen) {
            Some(idx) => tabs[(idx + step) % tabs.len()],
            None => tabs[0],
        };
        self.navigate(next);
    }

    /// Composer of the visible screen, if it has one
    pub fn active_composer(&self) -> Option<&Composer> {
        match self.screen {
            Screen::Feed => Some(&self.feed.composer),
            Screen::City => Some(&self.walls.composer),
            Screen::Chat => Some(&self.chat.composer),
            _ => None,
        }
    }

    /// Mutable composer of the visible screen, if it has one
    pub fn active_composer_mut(&mut self) -> Option<&mut Composer> {
        match self.screen {
            Screen::Feed => Some(&mut self.feed.composer),
            Screen::City => Some(&mut self.walls.composer),
            Screen::Chat => Some(&mut self.chat.composer),
            _ => None,
        }
    }

    /// City browser of the visible screen, if it has one
    pub fn active_browser(&self) -> Option<&Browser<City>> {
        match self.screen {
            Screen::City => Some(&self.walls.cities),
            Screen::Chat => Some(&self.chat.cities),
            _ => None,
        }
    }

    /// Mutable city browser of the visible screen, if it has one
    pub fn active_browser_mut(&mut self) -> Option<&mut Browser<City>> {
        match self.screen {
            Screen::City => Some(&mut self.walls.cities),
            Screen::Chat => Some(&mut self.chat.cities),
            _ => None,
        }
    }

    /// Start writing on the visible screen.
    ///
    /// Walls and chats need a selected city first.
    pub fn start_compose(&mut self) {
        let ready = match self.screen {
            Screen::Feed => true,
            Screen::City => self.walls.cities.selected().is_some(),
            Screen::Chat => self.chat.cities.selected().is_some(),
            _ => false,
        };
        if !ready {
            if self.active_browser().is_some() {
                self.set_status("Сначала выберите город");
            }
            return;
        }
        if let Some(composer) = self.active_composer_mut() {
            composer.open();
            self.mode = Mode::Compose;
        }
    }

    /// Discard the draft on the visible screen and leave compose mode
    pub fn cancel_compose(&mut self) {
        if let Some(composer) = self.active_composer_mut() {
            composer.hide();
        }
        self.mode = Mode::Normal;
    }

    /// Submit the visible screen's composer.
    ///
    /// Blank drafts are ignored without any state change. Returns whether
    /// something was published.
    pub fn submit_compose(&mut self) -> bool {
        let published = match self.screen {
            Screen::Feed => self.feed.publish(&self.user),
            Screen::City => self.walls.publish(&self.user),
            Screen::Chat => self.chat.send(&self.user),
            _ => false,
        };
        if !published {
            return false;
        }
        match self.screen {
            Screen::Chat => self.set_status("Сообщение отправлено"),
            _ => {
                self.set_status("Пост опубликован!");
                self.mode = Mode::Normal;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Config::default())
    }

    #[test]
    fn test_starts_on_auth_in_dark_theme() {
        let state = state();
        assert_eq!(state.screen(), Screen::Auth);
        assert_eq!(state.theme(), Theme::Dark);
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn test_start_screen_from_config() {
        let config = Config {
            start_screen: Screen::Chat,
            theme: Theme::Light,
            ..Config::default()
        };
        let state = AppState::new(config);
        assert_eq!(state.screen(), Screen::Chat);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_auth_submit_ignores_fields() {
        let mut empty = state();
        empty.submit_auth();
        assert_eq!(empty.screen(), Screen::Feed);

        let mut filled = state();
        filled.auth.toggle_mode();
        filled.auth.email = "not an email".to_string();
        filled.auth.name = "Юрий".to_string();
        filled.submit_auth();
        assert_eq!(filled.screen(), Screen::Feed);
        assert_eq!(filled.status, "Добро пожаловать в РыбаКоп!");
    }

    #[test]
    fn test_navigate_is_unconditional() {
        let mut state = state();
        for screen in Screen::menu() {
            state.navigate(*screen);
            assert_eq!(state.screen(), *screen);
        }
        state.navigate(Screen::Auth);
        assert_eq!(state.screen(), Screen::Auth);
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut state = state();
        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.config.theme, Theme::Light);
        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.config.theme, Theme::Dark);
    }

    #[test]
    fn test_drawer_to_profile_closes_drawer() {
        let mut state = state();
        state.navigate(Screen::Feed);
        state.drawer.open(state.screen());
        state.choose_screen(Screen::Profile);
        assert_eq!(state.screen(), Screen::Profile);
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn test_tabs_wrap() {
        let mut state = state();
        state.next_tab();
        assert_eq!(state.screen(), Screen::Feed);
        state.prev_tab();
        assert_eq!(state.screen(), Screen::Profile);
        state.next_tab();
        assert_eq!(state.screen(), Screen::Feed);

        state.navigate(Screen::Map);
        state.next_tab();
        assert_eq!(state.screen(), Screen::Feed);
    }

    #[test]
    fn test_compose_post_scenario() {
        let mut state = state();
        state.navigate(Screen::Feed);
        state.start_compose();
        assert_eq!(state.mode, Mode::Compose);

        state.feed.composer.set_text("Хороший клёв!");
        assert!(state.submit_compose());
        assert_eq!(state.feed.composer.text(), "");
        assert!(!state.feed.composer.is_open());
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.status, "Пост опубликован!");
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut state = state();
        state.navigate(Screen::Feed);
        state.start_compose();
        state.feed.composer.set_text(" ");
        assert!(!state.submit_compose());
        assert_eq!(state.mode, Mode::Compose);
        assert!(state.feed.composer.is_open());
        assert!(state.status.is_empty());
    }

    #[test]
    fn test_compose_on_wall_needs_city() {
        let mut state = state();
        state.navigate(Screen::City);
        state.start_compose();
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.status, "Сначала выберите город");

        state.walls.open_highlighted();
        state.start_compose();
        assert_eq!(state.mode, Mode::Compose);
        assert!(state.walls.composer.is_open());
    }

    #[test]
    fn test_chat_send_keeps_compose_mode() {
        let mut state = state();
        state.navigate(Screen::Chat);
        state.chat.open_highlighted();
        state.start_compose();
        state.chat.composer.set_text("Клюёт!");
        assert!(state.submit_compose());
        assert_eq!(state.mode, Mode::Compose);
        assert_eq!(state.chat.thread().last().map(|m| m.user_id), Some(state.user.id));
    }

    #[test]
    fn test_active_panels_follow_screen() {
        let mut state = state();
        assert!(state.active_composer().is_none());
        assert!(state.active_browser().is_none());
        state.navigate(Screen::City);
        assert!(state.active_browser().is_some());
        state.navigate(Screen::Profile);
        assert!(state.active_composer_mut().is_none());
    }
}
