use anyhow::{anyhow, Context as _};
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection,
};
use poise::serenity_prelude::*;
use shuttle_secrets::SecretStore;
use tracing::info;

mod commands;
mod error;
mod events;
mod migrations;
mod models;
mod schema;
mod spam_channel;
#[cfg(test)]
mod testing;

use error::SlimeError;

#[derive(Clone)]
struct Data {
    pool: Pool<AsyncPgConnection>,
}

type Context<'a> = poise::Context<'a, Data, SlimeError>;

#[shuttle_runtime::main]
async fn serenity(
    #[shuttle_secrets::Secrets] secret_store: SecretStore,
    #[shuttle_shared_db::Postgres] db_uri: String,
) -> shuttle_serenity::ShuttleSerenity {
    // Get the discord token set in `Secrets.toml`
    let token = if let Some(token) = secret_store.get("DISCORD_TOKEN") {
        token
    } else {
        return Err(anyhow!("'DISCORD_TOKEN' was not found").into());
    };

    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_uri);
    let pool = Pool::builder(config)
        .build()
        .context("could not build the database pool")?;

    {
        let mut conn = pool.get().await.context("could not connect to shared DB")?;
        migrations::run_pending_migrations(&mut conn)
            .await
            .context("could not run migrations")?;
    }

    // Guild create/delete events are all the bot listens to
    let intents = GatewayIntents::GUILDS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::admin_bot_spam_channel(),
                commands::bot_spam_channel(),
                commands::help(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!(user = %ready.user.name, guilds = ready.guilds.len(), "connected to Discord");
                Ok(Data { pool })
            })
        })
        .build();

    let client = Client::builder(&token, intents)
        .framework(framework)
        .await
        .context("could not create the Discord client")?;

    Ok(client.into())
}
