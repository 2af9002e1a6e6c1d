use ndarray::{Array1, ArrayView1, Axis};

use crate::{data::Column, error::Error};

/// A column which has no meaning to the click models.
#[derive(Clone, Debug, PartialEq)]
struct PassthroughColumn {
    name: String,
    values: Array1<String>,
}

/// A column-oriented table of query-document interactions.
///
/// Every present column has exactly [`Dataset::nr_records()`] values. The
/// counters and the grade are typed columns, everything else is kept verbatim
/// as passthrough columns in the order they were added.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    nr_records: usize,
    clicks: Option<Array1<u32>>,
    num_impressions: Option<Array1<u32>>,
    grades: Option<Array1<f32>>,
    passthrough: Vec<PassthroughColumn>,
}

/// A view of a single row of a [`Dataset`].
#[derive(Debug, PartialEq)]
pub struct InteractionRecord<'a> {
    pub clicks: Option<u32>,
    pub num_impressions: Option<u32>,
    pub grade: Option<f32>,
    /// The passthrough values in column order.
    pub passthrough: Vec<&'a str>,
}

impl Dataset {
    /// Creates a dataset with `nr_records` rows and no columns.
    pub fn new(nr_records: usize) -> Self {
        Self {
            nr_records,
            clicks: None,
            num_impressions: None,
            grades: None,
            passthrough: Vec::new(),
        }
    }

    /// Creates a dataset from the two counter columns.
    pub fn from_counts(clicks: Vec<u32>, num_impressions: Vec<u32>) -> Result<Self, Error> {
        Self::new(clicks.len())
            .with_clicks(clicks)?
            .with_num_impressions(num_impressions)
    }

    pub fn with_clicks(mut self, clicks: impl Into<Array1<u32>>) -> Result<Self, Error> {
        let clicks = clicks.into();
        self.check_len(Column::Clicks.name(), clicks.len())?;
        self.clicks = Some(clicks);
        Ok(self)
    }

    pub fn with_num_impressions(
        mut self,
        num_impressions: impl Into<Array1<u32>>,
    ) -> Result<Self, Error> {
        let num_impressions = num_impressions.into();
        self.check_len(Column::NumImpressions.name(), num_impressions.len())?;
        self.num_impressions = Some(num_impressions);
        Ok(self)
    }

    /// Sets the grade column, replacing an existing one.
    pub fn with_grades(mut self, grades: impl Into<Array1<f32>>) -> Result<Self, Error> {
        let grades = grades.into();
        self.check_len(Column::Grade.name(), grades.len())?;
        self.grades = Some(grades);
        Ok(self)
    }

    /// Appends a passthrough column.
    ///
    /// # Errors
    ///
    /// - If `name` is one of the reserved [`Column`] names.
    /// - If a passthrough column with the same name already exists.
    /// - If the number of values differs from the number of records.
    pub fn with_passthrough(
        mut self,
        name: impl Into<String>,
        values: impl Into<Array1<String>>,
    ) -> Result<Self, Error> {
        let name = name.into();
        let values = values.into();
        if Column::from_name(&name).is_some() {
            return Err(Error::ReservedColumn(name));
        }
        if self.passthrough.iter().any(|column| column.name == name) {
            return Err(Error::DuplicateColumn(name));
        }
        self.check_len(&name, values.len())?;
        self.passthrough.push(PassthroughColumn { name, values });
        Ok(self)
    }

    /// Removes the grade column.
    pub fn without_grades(mut self) -> Self {
        self.grades = None;
        self
    }

    fn check_len(&self, column: &str, len: usize) -> Result<(), Error> {
        if len == self.nr_records {
            Ok(())
        } else {
            Err(Error::ColumnLength {
                column: column.to_string(),
                len,
                nr_records: self.nr_records,
            })
        }
    }

    pub fn nr_records(&self) -> usize {
        self.nr_records
    }

    pub fn is_empty(&self) -> bool {
        self.nr_records == 0
    }

    /// Checks if the dataset has the given column.
    pub fn has_column(&self, column: Column) -> bool {
        match column {
            Column::Clicks => self.clicks.is_some(),
            Column::NumImpressions => self.num_impressions.is_some(),
            Column::Grade => self.grades.is_some(),
        }
    }

    pub fn clicks(&self) -> Result<ArrayView1<u32>, Error> {
        self.clicks
            .as_ref()
            .map(Array1::view)
            .ok_or(Error::MissingColumn(Column::Clicks))
    }

    pub fn num_impressions(&self) -> Result<ArrayView1<u32>, Error> {
        self.num_impressions
            .as_ref()
            .map(Array1::view)
            .ok_or(Error::MissingColumn(Column::NumImpressions))
    }

    pub fn grades(&self) -> Result<ArrayView1<f32>, Error> {
        self.grades
            .as_ref()
            .map(Array1::view)
            .ok_or(Error::MissingGradeColumn)
    }

    /// The names of the passthrough columns in column order.
    pub fn passthrough_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.passthrough.iter().map(|column| column.name.as_str())
    }

    /// Returns the values of the passthrough column with the given name.
    pub fn passthrough(&self, name: &str) -> Option<ArrayView1<String>> {
        self.passthrough
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.values.view())
    }

    /// Returns a new dataset with the records at the given indices.
    ///
    /// Indices may repeat and can be in any order, all columns stay aligned.
    ///
    /// # Panics
    ///
    /// If an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            nr_records: indices.len(),
            clicks: self
                .clicks
                .as_ref()
                .map(|clicks| clicks.select(Axis(0), indices)),
            num_impressions: self
                .num_impressions
                .as_ref()
                .map(|num_impressions| num_impressions.select(Axis(0), indices)),
            grades: self
                .grades
                .as_ref()
                .map(|grades| grades.select(Axis(0), indices)),
            passthrough: self
                .passthrough
                .iter()
                .map(|column| PassthroughColumn {
                    name: column.name.clone(),
                    values: column.values.select(Axis(0), indices),
                })
                .collect(),
        }
    }

    /// Iterates over the rows of this dataset.
    pub fn records(&self) -> impl Iterator<Item = InteractionRecord<'_>> + '_ {
        (0..self.nr_records).map(move |idx| InteractionRecord {
            clicks: self.clicks.as_ref().map(|clicks| clicks[idx]),
            num_impressions: self
                .num_impressions
                .as_ref()
                .map(|num_impressions| num_impressions[idx]),
            grade: self.grades.as_ref().map(|grades| grades[idx]),
            passthrough: self
                .passthrough
                .iter()
                .map(|column| column.values[idx].as_str())
                .collect(),
        })
    }
}
