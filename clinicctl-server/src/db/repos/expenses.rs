//! Expense table mapping

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Row, Sqlite};

use super::records::Table;
use crate::db::schema;
use crate::models::Expense;

impl<'r> FromRow<'r, SqliteRow> for Expense {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            description: row.try_get("description")?,
            amount: row.try_get("amount")?,
            date: row.try_get("date")?,
        })
    }
}

impl Table for Expense {
    const TABLE: &'static str = "expenses";
    const INSERT: &'static str = schema::INSERT_EXPENSE;
    const SELECT_ALL: &'static str = schema::SELECT_EXPENSES;
    const SELECT_BY_ID: &'static str = schema::SELECT_EXPENSE_BY_ID;

    fn bind_new<'q>(
        new: Self::New,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(new.description).bind(new.amount).bind(new.date)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::db::{create_pool, schema, DbError, RecordRepo};
    use crate::models::{Expense, NewExpense};

    fn gloves() -> NewExpense {
        NewExpense {
            description: "Gloves".into(),
            amount: 25.5,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn list_empty_table() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        schema::run(&pool).await.unwrap();

        let expenses = RecordRepo::<Expense>::new(&pool).list().await.unwrap();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        schema::run(&pool).await.unwrap();
        let repo = RecordRepo::<Expense>::new(&pool);

        let created = repo.create(gloves()).await.unwrap();
        assert_eq!(
            created,
            Expense {
                id: 1,
                description: "Gloves".into(),
                amount: 25.5,
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            }
        );

        assert_eq!(repo.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn ids_increase() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        schema::run(&pool).await.unwrap();
        let repo = RecordRepo::<Expense>::new(&pool);

        let first = repo.create(gloves()).await.unwrap();
        let second = repo.create(gloves()).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn missing_table_is_a_database_error() {
        let pool = create_pool("sqlite::memory:").await.unwrap();

        let err = RecordRepo::<Expense>::new(&pool)
            .create(gloves())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
    }

    #[tokio::test]
    async fn vanished_row_after_insert_is_not_a_lookup_miss() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        schema::run(&pool).await.unwrap();
        sqlx::query(
            "CREATE TRIGGER drop_new_expense AFTER INSERT ON expenses \
             BEGIN DELETE FROM expenses WHERE id = NEW.id; END",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = RecordRepo::<Expense>::new(&pool)
            .create(gloves())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }
}
