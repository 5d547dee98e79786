use diesel::prelude::*;
use poise::serenity_prelude::{ChannelId, GuildId};

use crate::{error::SlimeError, schema};

#[derive(Queryable, Selectable, Insertable, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[diesel(table_name = schema::guilds)]
pub struct Guild {
    pub guild_id: i64,
}

impl From<GuildId> for Guild {
    fn from(value: GuildId) -> Self {
        Self {
            guild_id: value.get() as i64,
        }
    }
}

impl From<Guild> for GuildId {
    fn from(value: Guild) -> Self {
        GuildId::from(value.guild_id as u64)
    }
}

/// One row of `admin_bot_spam_channel`. The table stores both ids as `INT`,
/// so snowflakes are narrowed on the way in.
#[derive(Queryable, Selectable, Insertable, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[diesel(table_name = schema::admin_bot_spam_channel)]
pub struct SpamChannel {
    pub channel_id: i32,
    pub guild_id: i32,
}

pub(crate) fn narrow(id: u64) -> Result<i32, SlimeError> {
    i32::try_from(id).map_err(|_| SlimeError::IdOutOfRange { id })
}

impl SpamChannel {
    pub fn new(guild: GuildId, channel: ChannelId) -> Result<Self, SlimeError> {
        Ok(Self {
            channel_id: narrow(channel.get())?,
            guild_id: narrow(guild.get())?,
        })
    }

    /// The `guilds` row this mapping references.
    pub fn guild(&self) -> Guild {
        Guild {
            guild_id: self.guild_id.into(),
        }
    }

    pub fn channel(&self) -> ChannelId {
        ChannelId::from(self.channel_id as u64)
    }
}
