//! Equality filtering over stored records
//!
//! Exact match only: a value matches when both its type and its contents
//! are equal. No coercion between `"1"` and `1`.

use crate::schema::{Record, Value};

/// Evaluates column equality against records
pub struct RecordFilter;

impl RecordFilter {
    /// Checks whether `record[column] == expected`.
    ///
    /// A record without `column` never matches.
    pub fn matches(record: &Record, column: &str, expected: &Value) -> bool {
        match record.get(column) {
            Some(actual) => actual == expected,
            None => false,
        }
    }

    /// Returns matching records in their original order
    pub fn select<'a, I>(records: I, column: &str, expected: &Value) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter(|rec| Self::matches(rec, column, expected))
            .collect()
    }
}
