//! Staff accountability entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::params::{parse_date, required};
use super::{Record, ValidationError};

/// A persisted accountability entry: who was on which duty, and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accountability {
    pub id: i64,
    pub staff_name: String,
    pub duty: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccountability {
    pub staff_name: String,
    pub duty: String,
    pub date: NaiveDate,
}

/// Raw `POST /accountability/` parameters
#[derive(Debug, Default, Deserialize)]
pub struct AccountabilityParams {
    pub staff_name: Option<String>,
    pub duty: Option<String>,
    pub date_: Option<String>,
}

impl Record for Accountability {
    type New = NewAccountability;
    type Params = AccountabilityParams;

    const KIND: &'static str = "accountability";

    fn parse(params: AccountabilityParams) -> Result<NewAccountability, ValidationError> {
        Ok(NewAccountability {
            staff_name: required(params.staff_name, "staff_name")?,
            duty: required(params.duty, "duty")?,
            date: parse_date(&required(params.date_, "date_")?, "date_")?,
        })
    }
}
