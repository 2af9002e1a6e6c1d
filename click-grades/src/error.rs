use displaydoc::Display;
use thiserror::Error;

use crate::data::Column;

#[derive(Error, Debug, Display, PartialEq)]
pub enum Error {
    /// Unknown click model `{0}`, expected one of `binary`, `ctr` or `heuristic`.
    InvalidModelKind(String),
    /// The dataset has no `{0}` column.
    MissingColumn(Column),
    /// The dataset has no `grade` column, grades must be assigned before resampling.
    MissingGradeColumn,
    /// The column `{column}` has {len} values but the dataset has {nr_records} records.
    ColumnLength {
        column: String,
        len: usize,
        nr_records: usize,
    },
    /// The column `{0}` is defined more than once.
    DuplicateColumn(String),
    /// The name `{0}` is reserved and can't be used for a passthrough column.
    ReservedColumn(String),
}
