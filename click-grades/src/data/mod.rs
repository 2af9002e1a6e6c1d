pub(crate) mod dataset;

use derive_more::Display;

/// The columns with a meaning to the click models.
///
/// All other columns of a dataset are passed through unchanged.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Column {
    #[display(fmt = "clicks")]
    Clicks,
    #[display(fmt = "num_impressions")]
    NumImpressions,
    #[display(fmt = "grade")]
    Grade,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Clicks, Column::NumImpressions, Column::Grade];

    /// The name of the column as it appears in a table header.
    pub fn name(self) -> &'static str {
        match self {
            Column::Clicks => "clicks",
            Column::NumImpressions => "num_impressions",
            Column::Grade => "grade",
        }
    }

    /// Returns the column with the given header name, if it is a reserved one.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|column| column.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_match_display() {
        for column in Column::ALL {
            assert_eq!(column.to_string(), column.name());
            assert_eq!(Column::from_name(column.name()), Some(column));
        }
        assert_eq!(Column::from_name("doc_id"), None);
    }
}
