use diesel::{prelude::*, upsert};
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use poise::serenity_prelude::GuildId;

use crate::{
    error::SlimeError,
    models::{narrow, Guild, SpamChannel},
    schema::{admin_bot_spam_channel, guilds},
};

/// Makes sure `guild` has a row in `guilds`.
pub async fn register_guild(conn: &mut AsyncPgConnection, guild: Guild) -> Result<(), SlimeError> {
    diesel::insert_into(guilds::table)
        .values(guild)
        .on_conflict_do_nothing()
        .execute(conn)
        .await?;
    Ok(())
}

/// Points the guild's spam channel at `mapping.channel_id`, creating the
/// guild and the mapping as needed.
pub async fn set_spam_channel(
    conn: &mut AsyncPgConnection,
    mapping: SpamChannel,
) -> Result<(), SlimeError> {
    register_guild(conn, mapping.guild()).await?;

    diesel::insert_into(admin_bot_spam_channel::table)
        .values(mapping)
        .on_conflict(admin_bot_spam_channel::guild_id)
        .do_update()
        .set(
            admin_bot_spam_channel::channel_id
                .eq(upsert::excluded(admin_bot_spam_channel::channel_id)),
        )
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn spam_channel(
    conn: &mut AsyncPgConnection,
    guild: GuildId,
) -> Result<Option<SpamChannel>, SlimeError> {
    // Such a guild can never have been stored.
    let Ok(guild_id) = narrow(guild.get()) else {
        return Ok(None);
    };

    Ok(admin_bot_spam_channel::table
        .find(guild_id)
        .select(SpamChannel::as_select())
        .first(conn)
        .await
        .optional()?)
}

/// Deletes the guild row. Its spam channel mapping goes with it.
pub async fn forget_guild(conn: &mut AsyncPgConnection, guild: Guild) -> Result<usize, SlimeError> {
    Ok(diesel::delete(guilds::table.find(guild.guild_id))
        .execute(conn)
        .await?)
}
