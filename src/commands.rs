use poise::serenity_prelude::{CreateMessage, GuildChannel, Mentionable};
use tracing::{error, info};

use crate::{error::SlimeError, models::SpamChannel, spam_channel, Context};

/// Sets the channel where bot spam (e.g. status updates) should happen. Default: current channel
#[poise::command(
    slash_command,
    category = "admin",
    guild_only = true,
    default_member_permissions = "ADMINISTRATOR",
    ephemeral = true
)]
pub async fn admin_bot_spam_channel(
    ctx: Context<'_>,
    #[description = "the channel to send bot spam to"] channel: Option<GuildChannel>,
) -> Result<(), SlimeError> {
    let channel = match channel {
        Some(channel) => channel,
        None => ctx.guild_channel().await.ok_or(SlimeError::NotInGuild)?,
    };
    let guild_id = ctx.guild_id().ok_or(SlimeError::NotInGuild)?;
    let mapping = SpamChannel::new(guild_id, channel.id)?;

    let mut conn = ctx.data().pool.get().await?;
    spam_channel::set_spam_channel(&mut conn, mapping).await?;
    info!(guild = %guild_id, channel = %channel.id, "bot spam channel set");

    ctx.say(format!("Bot spam channel successfully set to {}", channel))
        .await?;

    channel
        .send_message(
            ctx,
            CreateMessage::new().content(format!(
                "This channel is now my bot spam channel, as per {}'s orders!",
                ctx.author()
            )),
        )
        .await
        .inspect_err(|e| error!("{}", e))?;

    Ok(())
}

/// Shows the channel where bot spam currently goes
#[poise::command(slash_command, category = "admin", guild_only = true, ephemeral = true)]
pub async fn bot_spam_channel(ctx: Context<'_>) -> Result<(), SlimeError> {
    let guild_id = ctx.guild_id().ok_or(SlimeError::NotInGuild)?;

    let mut conn = ctx.data().pool.get().await?;
    let content = match spam_channel::spam_channel(&mut conn, guild_id).await? {
        Some(mapping) => format!("Bot spam goes to {}", mapping.channel().mention()),
        None => String::from(
            "No bot spam channel is set. An admin can pick one with /admin_bot_spam_channel",
        ),
    };

    ctx.say(content).await?;
    Ok(())
}

#[poise::command(slash_command)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Specific command to show help about"] command: Option<String>,
) -> Result<(), SlimeError> {
    let config = poise::builtins::HelpConfiguration {
        extra_text_at_bottom: "\
Type /help command for more info on a command.
You can edit your message to the bot and the bot will edit its response.",
        ..Default::default()
    };

    poise::builtins::help(ctx, command.as_deref(), config).await?;
    Ok(())
}
