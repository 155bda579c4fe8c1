mod command;

pub use command::*;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl State {
    pub fn new(read_db: sqlx::SqlitePool, write_db: sqlx::SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    /// Same pool for reads and writes, used by the CLI and tests.
    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}
