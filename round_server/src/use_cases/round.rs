// Command sequences for world setup, player admission, and round start/end.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::domain::commands;
use crate::domain::{PlayerHandle, WinningRecord};
use crate::use_cases::errors::TickError;
use crate::use_cases::gateway::CommandGateway;
use crate::use_cases::types::GameSettings;

/// Loads the lobby and pins global rules. Commands are issued together and all
/// awaited; the stale objective removal may fail when there is none.
pub async fn world_setup(gateway: &CommandGateway) -> Result<(), TickError> {
    let required = try_join_all(
        commands::WORLD_SETUP
            .into_iter()
            .map(|command| gateway.run(command)),
    );
    let (required, _) = tokio::join!(
        required,
        gateway.run_suppressed(commands::REMOVE_SCORE_OBJECTIVE)
    );
    required?;
    info!("world setup complete");
    Ok(())
}

/// One-time setup for a newly seen player. Clears any inventory and stale ready
/// tag before parking them at the lobby anchor.
pub async fn admit_player(gateway: &CommandGateway, player: &PlayerHandle) -> Result<(), TickError> {
    gateway.run_for(player, commands::ADVENTURE_MODE).await?;
    gateway.run_for(player, commands::WELCOME_SUBTITLE).await?;
    gateway.run_for(player, commands::WELCOME_TITLE).await?;
    gateway.run_for_suppressed(player, commands::CLEAR_SELF).await;
    gateway
        .run_for_suppressed(player, commands::UNTAG_READY_SELF)
        .await;
    gateway.run_for(player, commands::LOBBY_TELEPORT_SELF).await?;
    Ok(())
}

/// Equips players, resets the scoreboard, and sends everyone to their arena.
///
/// `players` is the snapshot taken for this tick; its order decides arena slots.
pub async fn round_start(
    gateway: &CommandGateway,
    players: &[PlayerHandle],
    settings: &GameSettings,
) -> Result<(), TickError> {
    gateway.run(commands::GIVE_SHEARS).await?;
    gateway
        .run(&commands::start_announcement(players.len()))
        .await?;

    // May already exist from a round that ended badly.
    gateway
        .run_suppressed(commands::ADD_SCORE_OBJECTIVE)
        .await;
    gateway.run(commands::RESET_SCORES).await?;
    gateway.run(commands::SHOW_SCOREBOARD).await?;

    if settings.arenas_enabled {
        for (slot, player) in players.iter().enumerate() {
            let origin_x = commands::arena_origin_x(settings.arena_spacing, slot);
            debug!(player_id = %player.id, slot, origin_x, "placing player in arena");
            gateway
                .run_for(player, &commands::load_arena(origin_x))
                .await?;
            gateway
                .run_for(player, &commands::arena_teleport(origin_x))
                .await?;
        }
    }

    gateway.run(commands::CLEAR_TITLES).await?;
    gateway.run(commands::GO_TITLE).await?;
    Ok(())
}

/// Sends everyone back to the lobby and announces the result.
pub async fn round_end(gateway: &CommandGateway, winner: &WinningRecord) -> Result<(), TickError> {
    gateway
        .run_suppressed(commands::REMOVE_SCORE_OBJECTIVE)
        .await;
    gateway.run_suppressed(commands::CLEAR_ALL).await;
    gateway.run_suppressed(commands::UNTAG_READY_ALL).await;
    gateway.run(commands::RETURN_ALL_TO_LOBBY).await?;
    gateway.run(commands::CLEAR_TITLES).await?;

    if winner.has_winner() {
        gateway
            .run(&commands::winner_subtitle(&winner.player_name))
            .await?;
    } else {
        gateway.run(commands::NO_SCORE_SUBTITLE).await?;
    }
    gateway.run(commands::GAME_OVER_TITLE).await?;
    Ok(())
}
