use std::sync::atomic::{AtomicUsize, Ordering};

use diesel::{result::Error as DieselError, sql_query};
use diesel_async::{
    scoped_futures::ScopedFutureExt, AsyncConnection, AsyncPgConnection, RunQueryDsl,
    SimpleAsyncConnection,
};

use crate::migrations::MIGRATIONS;

static SCRATCH_SCHEMAS: AtomicUsize = AtomicUsize::new(0);

/// One embedded migration, stepped through by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub version: String,
    pub name: String,
    pub up: &'static str,
    pub down: Option<&'static str>,
}

impl Revision {
    pub fn is_reversible(&self) -> bool {
        self.down.is_some()
    }

    pub async fn apply(&self, conn: &mut AsyncPgConnection) -> Result<(), DieselError> {
        conn.batch_execute(self.up).await
    }

    pub async fn revert(&self, conn: &mut AsyncPgConnection) -> Result<(), DieselError> {
        let down = self
            .down
            .unwrap_or_else(|| panic!("{} has no down.sql", self.name));
        conn.batch_execute(down).await
    }
}

/// The migrations the bot runs at startup, oldest first.
pub fn revisions() -> Vec<Revision> {
    MIGRATIONS
        .migrations
        .iter()
        .map(|migration| {
            let dir = migration.name.to_string();
            let (version, name) = dir.split_once('_').unwrap_or((dir.as_str(), ""));
            Revision {
                version: version.to_owned(),
                name: name.to_owned(),
                up: migration.up,
                down: migration.down,
            }
        })
        .collect()
}

/// Connects to `DATABASE_URL` inside a test transaction with an empty schema
/// first on the search path. Nothing a test does outlives the connection.
pub async fn scratch_connection() -> AsyncPgConnection {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL should name a Postgres database");
    let mut conn = AsyncPgConnection::establish(&url)
        .await
        .expect("could not connect to the test database");
    conn.begin_test_transaction()
        .await
        .expect("could not begin the test transaction");

    let schema = format!(
        "slime_test_{}_{}",
        std::process::id(),
        SCRATCH_SCHEMAS.fetch_add(1, Ordering::Relaxed)
    );
    conn.batch_execute(&format!(
        "CREATE SCHEMA {schema}; SET LOCAL search_path TO {schema};"
    ))
    .await
    .expect("could not create a scratch schema");

    conn
}

/// A scratch connection with the first `count` revisions applied.
pub async fn connection_at(count: usize) -> AsyncPgConnection {
    let mut conn = scratch_connection().await;
    for revision in &revisions()[..count] {
        revision
            .apply(&mut conn)
            .await
            .expect("migrations should apply to an empty schema");
    }
    conn
}

/// A scratch connection with every revision applied.
pub async fn migrated_connection() -> AsyncPgConnection {
    connection_at(revisions().len()).await
}

/// Runs `sql` inside a savepoint so a failure leaves the test transaction usable.
pub async fn try_execute(conn: &mut AsyncPgConnection, sql: &'static str) -> Result<usize, DieselError> {
    conn.transaction::<_, DieselError, _>(move |conn| sql_query(sql).execute(conn).scope_boxed())
        .await
}
