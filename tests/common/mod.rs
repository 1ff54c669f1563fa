use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use hrms_backend::clock::Clock;
use hrms_backend::db;

/// Clock pinned to one instant so lifecycle timestamps are deterministic.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn clock_at(datetime: &str) -> FixedClock {
    FixedClock(NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d %H:%M:%S").unwrap())
}

/// Fresh in-memory store with the schema applied. A single connection keeps
/// every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

pub async fn seed_employee(pool: &SqlitePool, name: &str, email: &str) -> i64 {
    sqlx::query("INSERT INTO employees (name, email, department, position) VALUES (?, ?, 'Engineering', 'Developer')")
        .bind(name)
        .bind(email)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}
