use api::request::PrintUpsert;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::{config, model::Print, result::Result};

pub async fn connect(cfg: &config::Db) -> anyhow::Result<SqlitePool> {
    info!("connecting to database: {}", cfg.url);
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect(&cfg.url)
        .await?;
    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS prints (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            cover TEXT,
            status TEXT NOT NULL,
            start_time TEXT,
            end_time TEXT,
            total_weight REAL,
            filament_1_material TEXT,
            filament_1_colour TEXT,
            filament_1_weight REAL,
            filament_2_material TEXT,
            filament_2_colour TEXT,
            filament_2_weight REAL,
            filament_3_material TEXT,
            filament_3_colour TEXT,
            filament_3_weight REAL,
            filament_4_material TEXT,
            filament_4_colour TEXT,
            filament_4_weight REAL,
            claimed_by TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_claimed_by ON prints (claimed_by)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_created_at ON prints (created_at DESC)")
        .execute(pool)
        .await?;
    Ok(())
}

impl Print {
    /// Insert or refresh a row by id. A claimed row is left untouched: the
    /// conflict update is gated on `claimed_by IS NULL`, in the same single
    /// statement, so re-ingestion can never clobber a claim.
    pub async fn db_upsert(pool: &SqlitePool, print: &PrintUpsert) -> Result<()> {
        let now = Utc::now();
        sqlx::query(
            r#"INSERT INTO prints (
                id, title, cover, status, start_time, end_time, total_weight,
                filament_1_material, filament_1_colour, filament_1_weight,
                filament_2_material, filament_2_colour, filament_2_weight,
                filament_3_material, filament_3_colour, filament_3_weight,
                filament_4_material, filament_4_colour, filament_4_weight,
                claimed_by, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                title = excluded.title,
                cover = excluded.cover,
                status = excluded.status,
                start_time = excluded.start_time,
                end_time = excluded.end_time,
                total_weight = excluded.total_weight,
                filament_1_material = excluded.filament_1_material,
                filament_1_colour = excluded.filament_1_colour,
                filament_1_weight = excluded.filament_1_weight,
                filament_2_material = excluded.filament_2_material,
                filament_2_colour = excluded.filament_2_colour,
                filament_2_weight = excluded.filament_2_weight,
                filament_3_material = excluded.filament_3_material,
                filament_3_colour = excluded.filament_3_colour,
                filament_3_weight = excluded.filament_3_weight,
                filament_4_material = excluded.filament_4_material,
                filament_4_colour = excluded.filament_4_colour,
                filament_4_weight = excluded.filament_4_weight,
                claimed_by = excluded.claimed_by,
                updated_at = excluded.updated_at
            WHERE prints.claimed_by IS NULL"#,
        )
        .bind(print.id.clone())
        .bind(print.title.clone())
        .bind(print.cover.clone())
        .bind(print.status.clone())
        .bind(print.start_time)
        .bind(print.end_time)
        .bind(print.total_weight)
        .bind(print.filament_1_material.clone())
        .bind(print.filament_1_colour.clone())
        .bind(print.filament_1_weight)
        .bind(print.filament_2_material.clone())
        .bind(print.filament_2_colour.clone())
        .bind(print.filament_2_weight)
        .bind(print.filament_3_material.clone())
        .bind(print.filament_3_colour.clone())
        .bind(print.filament_3_weight)
        .bind(print.filament_4_material.clone())
        .bind(print.filament_4_colour.clone())
        .bind(print.filament_4_weight)
        .bind(print.claimed_by.clone())
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn db_find(pool: &SqlitePool, claimed: Option<bool>) -> Result<Vec<Print>> {
        let sql = match claimed {
            Some(true) => {
                "select * from prints where claimed_by is not null order by created_at desc, rowid desc"
            }
            Some(false) => {
                "select * from prints where claimed_by is null order by created_at desc, rowid desc"
            }
            None => "select * from prints order by created_at desc, rowid desc",
        };
        let prints: Vec<Print> = sqlx::query_as(sql).fetch_all(pool).await?;
        Ok(prints)
    }

    /// Atomic check-and-set: only an unclaimed row is updated, so of any
    /// number of concurrent claims exactly one sees a returned row.
    pub async fn db_claim(pool: &SqlitePool, id: &str, user: &str) -> Result<Option<Print>> {
        let print: Option<Print> = sqlx::query_as(
            r#"UPDATE prints SET claimed_by = ?, updated_at = ?
            WHERE id = ? AND claimed_by IS NULL
            RETURNING *"#,
        )
        .bind(user)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(print)
    }

    /// Unconditional release. Anyone may release any claim.
    pub async fn db_unclaim(pool: &SqlitePool, id: &str) -> Result<Option<Print>> {
        let print: Option<Print> = sqlx::query_as(
            r#"UPDATE prints SET claimed_by = NULL, updated_at = ?
            WHERE id = ?
            RETURNING *"#,
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(print)
    }
}
