//! Relevance grades from user interactions.
//!
//! A click model turns the interaction counters of query-document pairs into
//! grades in `[0, 1]` which can be used as training labels of a ranking model.
//! The graded records can be downsampled to correct the skew of their grades.

mod click_model;
mod config;
mod data;
mod error;
mod grade;
mod pipeline;
mod resample;
mod utils;

pub use crate::{
    click_model::{ClickModelKind, HeuristicRule, ResamplingStrategy},
    config::Configuration,
    data::{
        dataset::{Dataset, InteractionRecord},
        Column,
    },
    error::Error,
    grade::{assign_grades, GradeAssigner},
    pipeline::{apply_click_model, Graded},
    resample::{resample, InfeasibleSampling, ResampleOutcome, Resampled},
};
