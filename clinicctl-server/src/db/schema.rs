//! Table definitions and SQL statements
//!
//! Tables are created if absent on startup. Existing tables are never
//! altered.

use sqlx::SqlitePool;
use tracing::info;

use super::repos::DbError;

pub const CREATE_EXPENSES: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        description TEXT NOT NULL,
        amount REAL NOT NULL,
        date TEXT NOT NULL
    )
"#;

pub const CREATE_EXPENSES_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_expenses_description ON expenses(description)";

pub const CREATE_ACCOUNTABILITY: &str = r#"
    CREATE TABLE IF NOT EXISTS accountability (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        staff_name TEXT NOT NULL,
        duty TEXT NOT NULL,
        date TEXT NOT NULL
    )
"#;

pub const CREATE_ACCOUNTABILITY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_accountability_staff_name ON accountability(staff_name)";

pub const INSERT_EXPENSE: &str =
    "INSERT INTO expenses (description, amount, date) VALUES (?, ?, ?)";
pub const SELECT_EXPENSES: &str = "SELECT id, description, amount, date FROM expenses";
pub const SELECT_EXPENSE_BY_ID: &str =
    "SELECT id, description, amount, date FROM expenses WHERE id = ?";

pub const INSERT_ACCOUNTABILITY: &str =
    "INSERT INTO accountability (staff_name, duty, date) VALUES (?, ?, ?)";
pub const SELECT_ACCOUNTABILITY: &str = "SELECT id, staff_name, duty, date FROM accountability";
pub const SELECT_ACCOUNTABILITY_BY_ID: &str =
    "SELECT id, staff_name, duty, date FROM accountability WHERE id = ?";

/// Ensure both tables and their indexes exist.
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    for statement in [
        CREATE_EXPENSES,
        CREATE_EXPENSES_INDEX,
        CREATE_ACCOUNTABILITY,
        CREATE_ACCOUNTABILITY_INDEX,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn creates_both_tables() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run(&pool).await.unwrap();

        assert_eq!(table_names(&pool).await, vec!["accountability", "expenses"]);
    }

    #[tokio::test]
    async fn running_twice_keeps_existing_rows() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run(&pool).await.unwrap();

        sqlx::query(INSERT_EXPENSE)
            .bind("Gloves")
            .bind(25.5)
            .bind("2024-01-15")
            .execute(&pool)
            .await
            .unwrap();

        run(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM expenses")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
