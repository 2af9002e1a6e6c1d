use std::{cmp::Ordering, path::PathBuf};

use anyhow::{Context, Error};
use itertools::Itertools;
use log::debug;
use structopt::StructOpt;

use click_grades::Column;

use crate::{
    exit_code::{NON_FATAL_ERROR, NO_ERROR},
    table::load_dataset,
};

/// Inspect the grade distribution of a graded csv file.
#[derive(StructOpt, Debug)]
pub struct InspectCmd {
    /// The csv file with the graded interactions.
    #[structopt(short, long)]
    input: PathBuf,
}

impl InspectCmd {
    pub fn run(self) -> Result<i32, Error> {
        debug!("Loading graded interactions from {}.", self.input.display());
        let dataset = load_dataset(&self.input)?;
        if !dataset.has_column(Column::Grade) {
            eprintln!("{} has no `grade` column.", self.input.display());
            return Ok(NON_FATAL_ERROR);
        }
        let grades = dataset.grades().context("Reading grades failed.")?;

        println!("Records: {}", dataset.nr_records());
        let histogram = grade_histogram(grades.iter().copied());
        if let (Some((min, _)), Some((max, _))) = (histogram.first(), histogram.last()) {
            println!("Grades: {}..={}", min, max);
        }
        for (grade, count) in histogram {
            println!("{:>8}: {}", grade, count);
        }

        Ok(NO_ERROR)
    }
}

/// Counts the records per distinct grade, sorted by ascending grade.
fn grade_histogram(grades: impl IntoIterator<Item = f32>) -> Vec<(f32, usize)> {
    let groups = grades
        .into_iter()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .group_by(|grade| *grade);
    let histogram = groups
        .into_iter()
        .map(|(grade, group)| (grade, group.count()))
        .collect();
    histogram
}
