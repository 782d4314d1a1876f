//! Ordinary least squares line fitting for paired samples.
//!
//! The pipeline is a chain of pure stages:
//! [`engine::fit`] -> [`engine::evaluate`] -> [`report::build`], wrapped
//! together by [`analysis::run`]. Sample sets come from
//! [`generator::synthetic`] or [`generator::loader`].

pub mod analysis;
pub mod config;
pub mod data;
pub mod engine;
pub mod generator;
pub mod report;
pub mod store;
pub mod ui;

mod event;

pub use analysis::{Analysis, run};
pub use data::{Sample, SampleSet};
pub use engine::{FitResult, GoodnessOfFit, RegressionError};
pub use report::{FitQuality, Report};
