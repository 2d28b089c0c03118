use diesel::SqliteConnection;

use crate::db::pool::DbPool;

pub trait DbExecutor: Send + Sync + 'static {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T>;
}

pub struct DieselSqliteExecutor {
    pool: DbPool,
}

impl DieselSqliteExecutor {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl DbExecutor for DieselSqliteExecutor {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut conn = self.pool.get()?;
        f(&mut conn)
    }
}
