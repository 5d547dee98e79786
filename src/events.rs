use poise::serenity_prelude as serenity;
use tracing::{info, warn};

use crate::{error::SlimeError, spam_channel, Data};

pub async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, SlimeError>,
    data: &Data,
) -> Result<(), SlimeError> {
    if let serenity::FullEvent::GuildDelete { incomplete, .. } = event {
        // Unavailable means an outage, not that we were removed.
        if incomplete.unavailable {
            warn!(guild = %incomplete.id, "guild became unavailable");
            return Ok(());
        }

        let mut conn = data.pool.get().await?;
        let removed = spam_channel::forget_guild(&mut conn, incomplete.id.into()).await?;
        info!(guild = %incomplete.id, removed, "left guild, dropped its settings");
    }

    Ok(())
}
