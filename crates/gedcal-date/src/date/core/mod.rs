//! Date value model.
//!
//! A [`Date`] keeps the exact text it was parsed from next to a
//! [`DateValue`], the sum type of everything the grammar can express. Each
//! calendar position inside a value is a [`DatePoint`].

mod month;
mod point;
mod value;

pub use month::{MonthTable, month_table};
pub use point::{DatePoint, Precision};
pub use value::{Date, DateValue, Qualifier};
