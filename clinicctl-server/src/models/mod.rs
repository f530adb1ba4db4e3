//! Domain models
//!
//! Plain record shapes plus the explicit parsing step that turns raw
//! request parameters into a new record. Nothing here touches SQL.

pub mod accountability;
pub mod expense;
pub mod params;
pub mod validation;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use accountability::{Accountability, AccountabilityParams, NewAccountability};
pub use expense::{Expense, ExpenseParams, NewExpense};
pub use validation::ValidationError;

/// A dated record kind exposed by the API.
pub trait Record: Serialize + Send + Sync + Unpin + 'static {
    /// Field values of a record that has not been assigned an id yet
    type New: Send + 'static;

    /// Raw request parameters, one optional string per non-id field
    type Params: DeserializeOwned + Send + 'static;

    /// Singular name used in logs and errors
    const KIND: &'static str;

    /// Coerce raw parameters into a new record.
    fn parse(params: Self::Params) -> Result<Self::New, ValidationError>;
}
