use std::{env, time::Duration};

use crate::use_cases::GameSettings;

// Runtime/server constants (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("ROUND_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3004)
}

pub fn host_bridge_url() -> String {
    env::var("HOST_BRIDGE_URL").unwrap_or_else(|_| "http://127.0.0.1:3005".to_string())
}

pub fn bridge_timeout() -> Duration {
    let millis = env::var("BRIDGE_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}

pub const HEARTBEAT_CHANNEL_CAPACITY: usize = 64;
pub const CHAT_PREFIX: char = '!';
// Host tick rate; the round timer loses one second per this many heartbeats.
pub const TICKS_PER_SECOND: u64 = 20;

// Gameplay settings, each overridable from the environment.
pub fn game_settings() -> GameSettings {
    let defaults = GameSettings::default();
    GameSettings {
        round_length_seconds: parsed("ROUND_LENGTH_SECONDS").unwrap_or(defaults.round_length_seconds),
        check_interval_ticks: parsed::<u64>("CHECK_INTERVAL_TICKS")
            .filter(|ticks| *ticks > 0)
            .unwrap_or(defaults.check_interval_ticks),
        ticks_per_second: TICKS_PER_SECOND,
        arenas_enabled: flag("ARENAS_ENABLED").unwrap_or(defaults.arenas_enabled),
        arena_spacing: parsed("ARENA_SPACING").unwrap_or(defaults.arena_spacing),
        forget_departed_players: flag("FORGET_DEPARTED_PLAYERS")
            .unwrap_or(defaults.forget_departed_players),
    }
}

fn parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.trim().parse().ok())
}

fn flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
