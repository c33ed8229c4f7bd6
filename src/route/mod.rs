use sqlx::SqlitePool;

pub mod print;
pub mod usage;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
