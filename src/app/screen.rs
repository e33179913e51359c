//! Screen identifiers

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Every screen the router can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Screen {
    /// Sign in / sign up
    #[default]
    Auth,
    /// Post feed
    Feed,
    /// Friends directory
    Friends,
    /// Per-city chat rooms
    Chat,
    /// City directory and walls
    City,
    /// Own profile
    Profile,
    /// Catch map
    Map,
    /// Leaderboard
    Leaderboard,
    /// Global search
    Search,
}

impl Screen {
    /// Drawer entries, in drawer order
    pub const fn menu() -> &'static [Self] {
        &[
            Self::Feed,
            Self::Friends,
            Self::Chat,
            Self::City,
            Self::Profile,
            Self::Map,
            Self::Leaderboard,
            Self::Search,
        ]
    }

    /// Bottom navigation tabs
    pub const fn tabs() -> &'static [Self] {
        &[
            Self::Feed,
            Self::Friends,
            Self::Chat,
            Self::City,
            Self::Profile,
        ]
    }

    /// Menu label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Auth => "Вход",
            Self::Feed => "Лента",
            Self::Friends => "Друзья",
            Self::Chat => "Чаты",
            Self::City => "Города",
            Self::Profile => "Профиль",
            Self::Map => "Карта уловов",
            Self::Leaderboard => "Рейтинг",
            Self::Search => "Поиск",
        }
    }

    /// Header subtitle
    pub const fn subtitle(&self) -> &'static str {
        match self {
            Self::Auth => "Сообщество рыбаков",
            Self::Feed => "Лента",
            Self::Friends => "Друзья рыбаки",
            Self::Chat => "Чаты городов",
            Self::City => "Стены городов",
            Self::Profile => "Мой профиль",
            Self::Map => "Карта уловов",
            Self::Leaderboard => "Рейтинг рыбаков",
            Self::Search => "Поиск",
        }
    }

    /// Menu icon
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Auth => "🔑",
            Self::Feed => "🏠",
            Self::Friends => "👥",
            Self::Chat => "💬",
            Self::City => "🗺",
            Self::Profile => "👤",
            Self::Map => "📍",
            Self::Leaderboard => "🏆",
            Self::Search => "🔍",
        }
    }

    /// Config/CLI identifier
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Feed => "feed",
            Self::Friends => "friends",
            Self::Chat => "chat",
            Self::City => "city",
            Self::Profile => "profile",
            Self::Map => "map",
            Self::Leaderboard => "leaderboard",
            Self::Search => "search",
        }
    }

    /// Parse a config/CLI identifier
    pub fn from_slug(s: &str) -> Result<Self, ParseError> {
        let s = s.trim().to_lowercase();
        std::iter::once(Self::Auth)
            .chain(Self::menu().iter().copied())
            .find(|screen| screen.slug() == s)
            .ok_or(ParseError::UnknownScreen(s))
    }

    /// Screens without content yet render a placeholder
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Map | Self::Leaderboard | Self::Search)
    }
}

impl TryFrom<String> for Screen {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_slug(&s)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
