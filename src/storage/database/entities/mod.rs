/// Batch entity module
pub mod batch;
/// Division entity module
pub mod division;
/// Student entity module
pub mod student;

pub use batch::Entity as Batch;
pub use division::Entity as Division;
pub use student::Entity as Student;

use crate::utils::error::{Result, RosterError};

/// Narrow an unsigned domain count to the `INTEGER` column that stores it
pub(crate) fn to_column_int(value: u32, column: &str) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| RosterError::validation(format!("{} {} is out of range", column, value)))
}
