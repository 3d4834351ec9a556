//! Presentation layer of house-insights: command-line parsing, log setup,
//! memoized growth figures and terminal rendering on top of the `analytics` crate.

pub mod cli;
pub mod logging;
pub mod presenter;

pub use presenter::{GrowthRow, MetricPresenter, NOT_AVAILABLE};
