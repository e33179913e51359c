//! # РыбаКоп 🎣
//!
//! A terminal social client for fishing enthusiasts.
//!
//! ## Overview
//!
//! РыбаКоп shows a feed of catches, city walls, city chat rooms, a friends
//! grid and a profile card, all backed by built-in mock data. Anything you
//! post or send lives in memory until you quit.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          App                                │
//! │  Owns the theme and current screen, runs the event loop     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Config      │ │     Panels      │ │       UI        │
//! │                 │ │                 │ │                 │
//! │ • Load/Save     │ │ • Feed          │ │ • Render screens│
//! │ • Theme         │ │ • Walls, Chats  │ │ • Drawer, Help  │
//! │ • Start screen  │ │ • Friends, Auth │ │ • Handle input  │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │                   │
//!          └───────────────────┴───────────────────┘
//!                              │
//!                   ┌──────────┴──────────┐
//!                   ▼                     ▼
//!          ┌─────────────────┐   ┌─────────────────┐
//!          │      Seed       │   │     Models      │
//!          │                 │   │                 │
//!          │ • Mock users    │   │ • User, City    │
//!          │ • Cities, posts │   │ • Post, Message │
//!          │ • Chat threads  │   │ • Catch, Friend │
//!          └─────────────────┘   └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`app`]: TUI application state and event loop
//! - [`config`]: Configuration management
//! - [`error`]: Parse errors for identifiers and CLI arguments
//! - [`models`]: Data models (User, City, Post, Message, Catch)
//! - [`paths`]: Config directory helpers
//! - [`seed`]: Built-in mock data
//! - [`theme`]: Dark and light palettes
//!
//! ## Example
//!
//! ```no_run
//! use rybakop::app;
//!
//! fn main() -> anyhow::Result<()> {
//!     app::run()
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/rybakop/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::return_self_not_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod paths;
pub mod seed;
pub mod theme;

// Re-export main types for convenience
pub use app::{AppState, Screen};
pub use config::Config;
pub use error::ParseError;
pub use models::{Achievement, Catch, City, Friend, Message, MessageType, Post, User};
pub use seed::SeedData;
pub use theme::{Theme, ThemeColors};

/// ASCII logo for the application
pub const LOGO: &str = r"
   ___       __         __ __
  / _ \__ __/ /  ___ _ / //_/__  ___
 / , _/ // / _ \/ _ `// ,< / _ \/ _ \
/_/|_|\_, /_.__/\_,_//_/|_|\___/ .__/
     /___/                    /_/
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
