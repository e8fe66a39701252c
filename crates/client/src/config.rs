//! Console client configuration and loaders.

use std::env;
use std::str::FromStr;

/// Console-specific configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Log session name; generated from the clock when unset.
    pub session_id: Option<String>,
    /// Print hp bars whenever an actor's hp changes.
    pub show_hud: bool,
    /// Queue size between the stdin reader and the app loop.
    pub input_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            show_hud: true,
            input_buffer: 8,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SESSION_ID` - Log session name (default: `session_<unix secs>`)
    /// - `BATTLE_SHOW_HUD` - Print hp bars (default: true)
    /// - `BATTLE_INPUT_BUFFER` - Input queue size (default: 8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(session_id) = env::var("BATTLE_SESSION_ID")
            && !session_id.trim().is_empty()
        {
            config.session_id = Some(session_id.trim().to_string());
        }
        if let Some(show) = read_env_bool("BATTLE_SHOW_HUD") {
            config.show_hud = show;
        }
        if let Some(buffer) = read_env::<usize>("BATTLE_INPUT_BUFFER") {
            config.input_buffer = buffer.max(1);
        }

        config
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
