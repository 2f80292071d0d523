use sqlx::PgPool;

/// Connection pool shared by the Postgres repositories.
pub type Db = PgPool;

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");
