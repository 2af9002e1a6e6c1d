use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Error};
use log::info;
use structopt::StructOpt;

use click_grades::{apply_click_model, ClickModelKind, Configuration, ResampleOutcome};

use crate::{
    exit_code::{NON_FATAL_ERROR, NO_ERROR},
    table::{load_dataset, save_dataset},
    utils::spin_while,
};

/// Grade the interactions of a csv file and downsample them.
#[derive(StructOpt, Debug)]
pub struct GradeCmd {
    /// The csv file with the interactions.
    #[structopt(short, long)]
    input: PathBuf,

    /// The csv file the graded interactions are written to.
    #[structopt(short, long)]
    output: PathBuf,

    /// A json file with the configuration, command line options take precedence.
    #[structopt(long)]
    config: Option<PathBuf>,

    /// The click model (either "binary", "ctr" or "heuristic").
    #[structopt(long)]
    click_model: Option<ClickModelKind>,

    /// Keeps all graded records.
    #[structopt(long)]
    no_downsample: bool,

    /// Seed of the generator used for grading and downsampling.
    #[structopt(long)]
    seed: Option<u64>,
}

impl GradeCmd {
    pub fn run(self) -> Result<i32, Error> {
        let GradeCmd {
            input,
            output,
            config,
            click_model,
            no_downsample,
            seed,
        } = self;

        let mut config = config.map_or_else(|| Ok(Configuration::default()), load_config)?;
        if let Some(click_model) = click_model {
            config.click_model_type = click_model;
        }
        if no_downsample {
            config.downsample = false;
        }
        if let Some(seed) = seed {
            config.seed = seed;
        }

        let dataset = spin_while("Loading interactions", || load_dataset(&input))?;
        let graded = spin_while("Grading interactions", || {
            apply_click_model(&dataset.without_grades(), &config)
        })
        .context("Grading failed.")?;
        save_dataset(&graded.dataset, &output)?;
        info!(
            "Wrote {} graded records to {}.",
            graded.dataset.nr_records(),
            output.display()
        );

        if let Some(ResampleOutcome::KeptOriginal(reason)) = graded.resample_outcome {
            eprintln!("Downsampling was skipped: {}", reason);
            Ok(NON_FATAL_ERROR)
        } else {
            Ok(NO_ERROR)
        }
    }
}

fn load_config(path: PathBuf) -> Result<Configuration, Error> {
    let file = File::open(&path).with_context(|| format!("Opening {} failed.", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Parsing configuration {} failed.", path.display()))
}
