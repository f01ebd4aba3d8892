//! Record validator
//!
//! Validation semantics:
//! - Columns are checked in declaration order; the first failure is reported
//! - A column with no entry in the record is skipped
//! - Value types must match exactly, with no coercion
//! - String length (in bytes) is bounded when `max_string_length > 0`
//! - Int values must not exceed `max_int_value`; there is no lower bound
//! - Keys that match no column are not checked
//!
//! The validator never mutates the record.

use super::errors::{SchemaError, SchemaResult};
use super::types::{duplicate_column, Column, ColumnType, Record, Value};

/// Checks records against a column list.
pub struct RecordValidator<'a> {
    columns: &'a [Column],
}

impl<'a> RecordValidator<'a> {
    /// Creates a validator over the given columns.
    pub fn new(columns: &'a [Column]) -> Self {
        Self { columns }
    }

    /// Validates a column list itself (not a record).
    ///
    /// # Errors
    ///
    /// Returns `DuplicateColumn` naming the first repeated column.
    pub fn validate_columns(columns: &[Column]) -> SchemaResult<()> {
        match duplicate_column(columns) {
            Some(name) => Err(SchemaError::DuplicateColumn {
                column: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Validates a record against every declared column.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, walking columns in order:
    /// - `ColumnTypeMismatch` if a value has the wrong variant
    /// - `ColumnLengthExceeded` if a string is too long
    /// - `ColumnValueExceeded` if an int is above the bound
    pub fn validate_record(&self, record: &Record) -> SchemaResult<()> {
        for column in self.columns {
            if let Some(value) = record.get(&column.name) {
                validate_value(column, value)?;
            }
        }
        Ok(())
    }
}

/// Validates a single value against its column.
fn validate_value(column: &Column, value: &Value) -> SchemaResult<()> {
    match (column.data_type, value) {
        (ColumnType::String, Value::String(s)) => {
            if column.max_string_length > 0 && s.len() > column.max_string_length {
                return Err(SchemaError::ColumnLengthExceeded {
                    column: column.name.clone(),
                    limit: column.max_string_length,
                });
            }
            Ok(())
        }
        (ColumnType::Int, Value::Int(i)) => {
            if *i > column.max_int_value {
                return Err(SchemaError::ColumnValueExceeded {
                    column: column.name.clone(),
                    limit: column.max_int_value,
                });
            }
            Ok(())
        }
        (expected, actual) => Err(SchemaError::ColumnTypeMismatch {
            column: column.name.clone(),
            expected,
            actual: actual.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> Vec<Column> {
        vec![Column::int("id", 20), Column::string("value", 5)]
    }

    #[test]
    fn test_valid_record_passes() {
        let columns = sample_columns();
        let validator = RecordValidator::new(&columns);

        let rec = Record::new().with("id", 1).with("value", "abc");
        assert!(validator.validate_record(&rec).is_ok());
    }

    #[test]
    fn test_missing_columns_are_skipped() {
        let columns = sample_columns();
        let validator = RecordValidator::new(&columns);

        assert!(validator.validate_record(&Record::new()).is_ok());
        assert!(validator
            .validate_record(&Record::new().with("value", "a"))
            .is_ok());
    }

    #[test]
    fn test_extra_keys_accepted() {
        let columns = sample_columns();
        let validator = RecordValidator::new(&columns);

        let rec = Record::new().with("id", 3).with("note", 99);
        assert!(validator.validate_record(&rec).is_ok());
    }

    #[test]
    fn test_int_bound_is_inclusive() {
        let columns = sample_columns();
        let validator = RecordValidator::new(&columns);

        assert!(validator.validate_record(&Record::new().with("id", 20)).is_ok());
        assert_eq!(
            validator.validate_record(&Record::new().with("id", 21)),
            Err(SchemaError::ColumnValueExceeded {
                column: "id".into(),
                limit: 20
            })
        );
    }

    #[test]
    fn test_no_lower_bound() {
        let columns = sample_columns();
        let validator = RecordValidator::new(&columns);

        let rec = Record::new().with("id", i64::MIN);
        assert!(validator.validate_record(&rec).is_ok());
    }

    #[test]
    fn test_string_length_bound() {
        let columns = sample_columns();
        let validator = RecordValidator::new(&columns);

        assert!(validator
            .validate_record(&Record::new().with("value", "abcde"))
            .is_ok());
        assert_eq!(
            validator.validate_record(&Record::new().with("value", "abcdef")),
            Err(SchemaError::ColumnLengthExceeded {
                column: "value".into(),
                limit: 5
            })
        );
    }

    #[test]
    fn test_string_length_counts_bytes() {
        let columns = vec![Column::string("name", 4)];
        let validator = RecordValidator::new(&columns);

        // three chars, six bytes
        let rec = Record::new().with("name", "äöü");
        assert!(validator.validate_record(&rec).is_err());
    }

    #[test]
    fn test_zero_length_means_unlimited() {
        let columns = vec![Column::string("body", 0)];
        let validator = RecordValidator::new(&columns);

        let rec = Record::new().with("body", "x".repeat(10_000));
        assert!(validator.validate_record(&rec).is_ok());
    }

    #[test]
    fn test_type_mismatch_both_directions() {
        let columns = sample_columns();
        let validator = RecordValidator::new(&columns);

        let err = validator
            .validate_record(&Record::new().with("id", "x"))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::ColumnTypeMismatch {
                column: "id".into(),
                expected: ColumnType::Int,
                actual: ColumnType::String,
            }
        );

        let err = validator
            .validate_record(&Record::new().with("value", 5))
            .unwrap_err();
        assert_eq!(err.column(), "value");
        assert_eq!(err.code(), "TABLEDB_COLUMN_TYPE_MISMATCH");
    }

    #[test]
    fn test_first_failing_column_reported() {
        let columns = sample_columns();
        let validator = RecordValidator::new(&columns);

        let rec = Record::new().with("id", 99).with("value", 1);
        let err = validator.validate_record(&rec).unwrap_err();
        assert_eq!(err.column(), "id");
    }

    #[test]
    fn test_validate_columns_rejects_duplicates() {
        assert!(RecordValidator::validate_columns(&sample_columns()).is_ok());

        let cols = vec![Column::int("id", 1), Column::int("id", 2)];
        assert_eq!(
            RecordValidator::validate_columns(&cols),
            Err(SchemaError::DuplicateColumn { column: "id".into() })
        );
    }
}
