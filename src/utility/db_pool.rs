use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use eyre::Report;
use std::time::Duration;
use tracing::info;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// SQLite enforces foreign keys per connection, so every checkout gets the
/// pragmas before it is handed out.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_db_pool(database_url: &str) -> Result<DbPool, Report> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(10)
        .connection_timeout(Duration::from_secs(8))
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;

    info!("SQLite connection pool created (max_size: 10)");

    Ok(pool)
}
