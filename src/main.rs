//! РыбаКоп - a terminal social client for fishing enthusiasts
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rybakop::app::LaunchOptions;
use rybakop::{ParseError, Screen, Theme};

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args).context("Run 'rybakop --help' for usage")?;

    match command {
        Command::Run(options) => rybakop::app::run_with(options),
        Command::Seed => print_seed(),
        Command::Config => print_config_path(),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(LaunchOptions),
    Seed,
    Config,
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command, ParseError> {
    match args.first().map(String::as_str) {
        Some("-h" | "--help" | "help") => Ok(Command::Help),
        Some("-v" | "--version" | "version") => Ok(Command::Version),
        Some("seed") => Ok(Command::Seed),
        Some("config") => Ok(Command::Config),
        _ => parse_launch_options(args).map(Command::Run),
    }
}

/// Parse `--theme <dark|light>` and `--screen <screen>` in any order
fn parse_launch_options(args: &[String]) -> Result<LaunchOptions, ParseError> {
    let mut options = LaunchOptions::default();
    let mut args = args.iter();

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| ParseError::MissingValue(flag.clone()))
        };
        match flag.as_str() {
            "-t" | "--theme" => options.theme = Some(Theme::from_slug(value()?)?),
            "-s" | "--screen" => options.screen = Some(Screen::from_slug(value()?)?),
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        }
    }

    Ok(options)
}

fn print_help() {
    let config_path = rybakop::Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"{}
🎣 РыбаКоп - сообщество рыбаков в терминале

USAGE:
    rybakop [OPTIONS]                  Launch TUI
    rybakop [COMMAND]

COMMANDS:
    seed                               Print the built-in mock data as JSON
    config                             Print the config file path

OPTIONS:
    -t, --theme <dark|light>           Start with this theme
    -s, --screen <screen>              Open this screen first
                                       (auth, feed, friends, chat, city,
                                        profile, map, leaderboard, search)
    -h, --help                         Show this help message
    -v, --version                      Show version information

KEYBINDINGS (TUI):
    Navigation
      m             Open the menu
      Tab           Next section
      1-5           Feed, Friends, Chats, Cities, Profile
      j/↓  k/↑      Move down / up

    Actions
      n             New post
      /             Search cities
      Enter         Open city / publish
      i             Write a chat message
      Esc           Back / cancel

    View
      t             Toggle dark / light theme
      ?             Help
      q             Quit

CONFIG:
    {}
"#,
        rybakop::LOGO,
        config_path
    );
}

fn print_version() {
    println!("rybakop {}", rybakop::VERSION);
}

fn print_seed() -> Result<()> {
    let data = rybakop::SeedData::load();
    let json = serde_json::to_string_pretty(&data).context("Failed to serialize mock data")?;
    println!("{json}");
    Ok(())
}

fn print_config_path() -> Result<()> {
    let path = rybakop::Config::default_path()?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_no_args_runs_tui() {
        assert_eq!(
            parse_args(&[]).unwrap(),
            Command::Run(LaunchOptions::default())
        );
    }

    #[test]
    fn test_launch_flags() {
        let command = parse_args(&args(&["--screen", "Chat", "-t", "light"])).unwrap();
        assert_eq!(
            command,
            Command::Run(LaunchOptions {
                theme: Some(Theme::Light),
                screen: Some(Screen::Chat),
            })
        );
    }

    #[test]
    fn test_bad_launch_flags() {
        assert_eq!(
            parse_args(&args(&["--theme", "dracula"])),
            Err(ParseError::UnknownTheme("dracula".to_string()))
        );
        assert_eq!(
            parse_args(&args(&["--screen", "settings"])),
            Err(ParseError::UnknownScreen("settings".to_string()))
        );
        assert_eq!(
            parse_args(&args(&["--screen"])),
            Err(ParseError::MissingValue("--screen".to_string()))
        );
    }

    #[test]
    fn test_usage_hint_appears_once() {
        let err = parse_args(&args(&["fish"]))
            .context("Run 'rybakop --help' for usage")
            .unwrap_err();
        let shown = format!("{err:#}");
        assert_eq!(shown.matches("rybakop --help").count(), 1);
        assert!(shown.contains("unknown command: fish"));
    }

    #[test]
    fn test_known_commands() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["-v"])).unwrap(), Command::Version);
        assert_eq!(parse_args(&args(&["seed"])).unwrap(), Command::Seed);
        assert_eq!(parse_args(&args(&["config"])).unwrap(), Command::Config);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_args(&args(&["fish"])),
            Err(ParseError::UnknownCommand("fish".to_string()))
        );
    }
}
