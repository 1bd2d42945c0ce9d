// Command text sent to the host world. The host parses these verbatim.

use crate::domain::score::BlockLocation;

// Global rules and the lobby build, issued once when the controller first ticks.
pub const WORLD_SETUP: [&str; 9] = [
    "structure load lobby -5 0 -5",
    "setworldspawn 0 3 0",
    "time set day",
    "gamerule doDaylightCycle false",
    "gamerule doMobLoot false",
    "gamerule doMobSpawning false",
    "gamerule doWeatherCycle false",
    "gamerule randomtickspeed 6",
    "gamerule sendCommandFeedback false",
];
pub const REMOVE_SCORE_OBJECTIVE: &str = "scoreboard objectives remove score";

pub const TEST_READY: &str = "testfor @a[tag=Ready]";

// Player-scoped admission sequence.
pub const ADVENTURE_MODE: &str = "gamemode adventure @s";
pub const WELCOME_SUBTITLE: &str = "title @s subtitle PhD level games";
pub const WELCOME_TITLE: &str = "title @s title Wool";
pub const CLEAR_SELF: &str = "clear @s";
pub const UNTAG_READY_SELF: &str = "tag @s remove Ready";
pub const LOBBY_TELEPORT_SELF: &str = "tp @s 0 3 0 facing 0 3 1";

pub const GIVE_SHEARS: &str = "give @a shears";
pub const ADD_SCORE_OBJECTIVE: &str = "scoreboard objectives add score dummy \"Score\"";
pub const RESET_SCORES: &str = "scoreboard players set @a score 0";
pub const SHOW_SCOREBOARD: &str = "scoreboard objectives setdisplay sidebar score descending";
pub const CLEAR_TITLES: &str = "title @a clear";
pub const GO_TITLE: &str = "title @a title GO!";

pub const CLEAR_ALL: &str = "clear @a";
pub const UNTAG_READY_ALL: &str = "tag @a remove Ready";
pub const RETURN_ALL_TO_LOBBY: &str = "tp @a 0 3 0";
pub const NO_SCORE_SUBTITLE: &str = "title @a subtitle Nobody scored. What gives?";
pub const GAME_OVER_TITLE: &str = "title @a title Game Over";

pub const CLEANUP_NOTICE: &str = "say Cleaning up game...";
pub const WIPE_PLAY_AREA: &str = "fill -15 0 -15 15 15 15 air";

// Arena copies sit on a row along x, one per roster slot.
const ARENA_Y: i32 = 0;
const ARENA_Z: i32 = 100;

pub fn start_announcement(player_count: usize) -> String {
    if player_count > 1 {
        format!("say Starting game for {player_count} players.")
    } else {
        "say Starting game for solo play.".to_string()
    }
}

pub fn arena_origin_x(arena_spacing: i32, slot: usize) -> i32 {
    arena_spacing.saturating_mul(i32::try_from(slot).unwrap_or(i32::MAX))
}

pub fn load_arena(origin_x: i32) -> String {
    format!("structure load arena {origin_x} {ARENA_Y} {ARENA_Z}")
}

pub fn arena_teleport(origin_x: i32) -> String {
    let (x, y, z) = (origin_x.saturating_add(8), ARENA_Y + 1, ARENA_Z + 1);
    format!("tp @s {x} {y} {z} facing {x} {y} {}", z + 1)
}

// Scoring chest inside the arena for the given slot.
pub fn scoring_container(arena_spacing: i32, slot: usize) -> BlockLocation {
    BlockLocation::new(arena_origin_x(arena_spacing, slot).saturating_add(13), 6, 131)
}

pub fn actionbar(countdown: &str) -> String {
    format!("title @a actionbar {countdown}")
}

pub fn set_player_score(score: i64) -> String {
    format!("scoreboard players set @s score {score}")
}

pub fn winner_subtitle(player_name: &str) -> String {
    format!("title @a subtitle {player_name} wins!")
}
