//! Conversion between csv files and [`Dataset`]s.
//!
//! The `clicks`, `num_impressions` and `grade` columns are parsed, all other
//! columns are kept verbatim. Written files list the passthrough columns first,
//! followed by the counters and the grade.
use std::{
    collections::HashSet,
    io::{Read, Write},
    path::Path,
    str::FromStr,
};

use anyhow::{Context, Error};
use displaydoc::Display;
use log::debug;
use thiserror::Error;

use click_grades::{Column, Dataset};

#[derive(Error, Debug, Display, PartialEq)]
pub enum TableError {
    /// The column `{0}` appears more than once in the header.
    DuplicateColumn(String),
    /// Invalid value `{value}` in column `{column}` of record {record}.
    InvalidValue {
        column: String,
        record: usize,
        value: String,
    },
}

/// Loads a dataset from a csv file with a header row.
pub(crate) fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, Error> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("Opening {} failed.", path.display()))?;
    read_dataset(reader)
}

/// Saves a dataset as csv file with a header row.
pub(crate) fn save_dataset(dataset: &Dataset, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let writer = csv::Writer::from_path(path)
        .with_context(|| format!("Creating {} failed.", path.display()))?;
    write_dataset(dataset, writer)
}

fn read_dataset(mut reader: csv::Reader<impl Read>) -> Result<Dataset, Error> {
    let header = reader.headers()?.clone();

    let mut columns = vec![Vec::new(); header.len()];
    for record in reader.records() {
        let record = record?;
        for (column, value) in columns.iter_mut().zip(record.iter()) {
            column.push(value.to_owned());
        }
    }
    let nr_records = columns.first().map_or(0, Vec::len);
    debug!(
        "Read {} records with {} columns.",
        nr_records,
        header.len()
    );

    let mut seen = HashSet::new();
    let mut dataset = Dataset::new(nr_records);
    for (name, values) in header.iter().zip(columns) {
        if !seen.insert(name) {
            return Err(TableError::DuplicateColumn(name.to_owned()).into());
        }
        dataset = match Column::from_name(name) {
            Some(Column::Clicks) => dataset.with_clicks(parse_column::<u32>(name, &values)?)?,
            Some(Column::NumImpressions) => {
                dataset.with_num_impressions(parse_column::<u32>(name, &values)?)?
            }
            Some(Column::Grade) => dataset.with_grades(parse_column::<f32>(name, &values)?)?,
            None => dataset.with_passthrough(name, values)?,
        };
    }

    Ok(dataset)
}

fn parse_column<T>(column: &str, values: &[String]) -> Result<Vec<T>, TableError>
where
    T: FromStr,
{
    values
        .iter()
        .enumerate()
        .map(|(record, value)| {
            value
                .trim()
                .parse()
                .map_err(|_| TableError::InvalidValue {
                    column: column.to_owned(),
                    record,
                    value: value.clone(),
                })
        })
        .collect()
}

fn write_dataset(dataset: &Dataset, mut writer: csv::Writer<impl Write>) -> Result<(), Error> {
    let counters = [Column::Clicks, Column::NumImpressions, Column::Grade]
        .iter()
        .copied()
        .filter(|&column| dataset.has_column(column))
        .collect::<Vec<_>>();
    let header = dataset
        .passthrough_names()
        .chain(counters.iter().map(|column| column.name()));
    writer.write_record(header)?;

    for record in dataset.records() {
        let mut row = record
            .passthrough
            .iter()
            .map(|value| (*value).to_owned())
            .collect::<Vec<_>>();
        row.extend(record.clicks.map(|clicks| clicks.to_string()));
        row.extend(
            record
                .num_impressions
                .map(|num_impressions| num_impressions.to_string()),
        );
        row.extend(record.grade.map(|grade| grade.to_string()));
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}
