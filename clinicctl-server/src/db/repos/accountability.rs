//! Accountability table mapping

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Row, Sqlite};

use super::records::Table;
use crate::db::schema;
use crate::models::Accountability;

impl<'r> FromRow<'r, SqliteRow> for Accountability {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            staff_name: row.try_get("staff_name")?,
            duty: row.try_get("duty")?,
            date: row.try_get("date")?,
        })
    }
}

impl Table for Accountability {
    const TABLE: &'static str = "accountability";
    const INSERT: &'static str = schema::INSERT_ACCOUNTABILITY;
    const SELECT_ALL: &'static str = schema::SELECT_ACCOUNTABILITY;
    const SELECT_BY_ID: &'static str = schema::SELECT_ACCOUNTABILITY_BY_ID;

    fn bind_new<'q>(
        new: Self::New,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query.bind(new.staff_name).bind(new.duty).bind(new.date)
    }
}
