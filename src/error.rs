use diesel::result::Error as DieselError;
use diesel_async::pooled_connection::deadpool::PoolError;
use serenity::Error as SerenityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlimeError {
    #[error("an error occurred within Serenity: {0}")]
    Serenity(#[from] SerenityError),
    #[error("could not get a connection from the pool: {0}")]
    DatabasePool(#[from] PoolError),
    #[error("an error occurred from a diesel query: {0}")]
    Diesel(#[from] DieselError),
    #[error("could not run migrations: {0}")]
    Migration(#[source] DieselError),
    #[error("id {id} does not fit in the spam channel table")]
    IdOutOfRange { id: u64 },
    #[error("this command only works inside a guild")]
    NotInGuild,
}
