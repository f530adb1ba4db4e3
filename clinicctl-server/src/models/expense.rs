//! Expense entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::params::{parse_amount, parse_date, required};
use super::{Record, ValidationError};

/// A persisted expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Expense fields before the database assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Raw `POST /expenses/` parameters
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseParams {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub date_: Option<String>,
}

impl Record for Expense {
    type New = NewExpense;
    type Params = ExpenseParams;

    const KIND: &'static str = "expense";

    fn parse(params: ExpenseParams) -> Result<NewExpense, ValidationError> {
        let description = required(params.description, "description")?;
        let amount = parse_amount(&required(params.amount, "amount")?, "amount")?;
        let date = parse_date(&required(params.date_, "date_")?, "date_")?;

        Ok(NewExpense {
            description,
            amount,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(description: &str, amount: &str, date: &str) -> ExpenseParams {
        ExpenseParams {
            description: Some(description.into()),
            amount: Some(amount.into()),
            date_: Some(date.into()),
        }
    }

    #[test]
    fn parses_valid_params() {
        let new = Expense::parse(params("Gloves", "25.50", "2024-01-15")).unwrap();
        assert_eq!(
            new,
            NewExpense {
                description: "Gloves".into(),
                amount: 25.5,
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            }
        );
    }

    #[test]
    fn empty_description_is_accepted() {
        let new = Expense::parse(params("", "1", "2024-01-15")).unwrap();
        assert_eq!(new.description, "");
    }

    #[test]
    fn reports_first_missing_field() {
        let err = Expense::parse(ExpenseParams {
            description: Some("Gloves".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "amount" });
    }

    #[test]
    fn rejects_bad_amount() {
        let err = Expense::parse(params("Gloves", "lots", "2024-01-15")).unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn rejects_bad_date() {
        let err = Expense::parse(params("Gloves", "1", "not-a-date")).unwrap_err();
        assert_eq!(err.field(), "date_");
    }

    #[test]
    fn serializes_with_iso_date() {
        let expense = Expense {
            id: 1,
            description: "Gloves".into(),
            amount: 25.5,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&expense).unwrap(),
            json!({"id": 1, "description": "Gloves", "amount": 25.5, "date": "2024-01-15"})
        );
    }
}
