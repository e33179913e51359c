//! TUI Application module

mod auth;
mod browser;
mod composer;
mod drawer;
mod events;
mod panels;
mod screen;
mod state;
mod ui;

pub use auth::{AuthField, AuthForm, AuthMode};
pub use browser::{Browser, MatchFn};
pub use composer::{Composer, ComposerField, Draft};
pub use drawer::Drawer;
pub use panels::{ChatPanel, FeedPanel, FriendsPanel, WallPanel};
pub use screen::Screen;
pub use state::{AppState, Mode};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

use crate::config::Config;
use crate::theme::Theme;

/// Command-line overrides for a single session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Theme to start with; saved on exit like a toggle would be
    pub theme: Option<Theme>,
    /// Screen to open instead of the configured start screen (not saved)
    pub screen: Option<Screen>,
}

impl LaunchOptions {
    /// Build the initial state from the loaded config
    pub fn initial_state(&self, mut config: Config) -> AppState {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        let mut state = AppState::new(config);
        if let Some(screen) = self.screen {
            state.navigate(screen);
        }
        state
    }
}

/// Run the TUI application
pub fn run() -> Result<()> {
    run_with(LaunchOptions::default())
}

/// Run the TUI application with command-line overrides
pub fn run_with(options: LaunchOptions) -> Result<()> {
    // Load config
    let config = Config::load()?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app state
    let mut state = options.initial_state(config);
    tracing::info!(
        theme = state.theme().slug(),
        start = state.screen().slug(),
        "starting"
    );

    // Main loop
    let result = run_app(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save config on exit (keeps the theme the user ended on)
    if let Err(e) = state.config.save() {
        tracing::warn!("Failed to save config: {e:#}");
    }
    tracing::info!("stopped");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    let tick_rate = Duration::from_millis(state.config.tick_rate_ms.max(1));

    loop {
        // Draw UI
        terminal.draw(|frame| ui::render(frame, state))?;

        // Handle events
        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            events::handle_key(state, key);
        }

        // Tick for animations
        state.tick();

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_follow_config() {
        let config = Config {
            theme: Theme::Light,
            start_screen: Screen::Chat,
            ..Config::default()
        };
        let state = LaunchOptions::default().initial_state(config);
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.screen(), Screen::Chat);
    }

    #[test]
    fn test_screen_override_is_not_persisted() {
        let options = LaunchOptions {
            theme: Some(Theme::Light),
            screen: Some(Screen::Profile),
        };
        let state = options.initial_state(Config::default());
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.config.theme, Theme::Light);
        assert_eq!(state.screen(), Screen::Profile);
        assert_eq!(state.config.start_screen, Screen::Auth);
    }
}
