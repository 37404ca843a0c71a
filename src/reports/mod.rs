//! Reports module for Moodspend
//!
//! View models built from the expense list and the active filter.

pub mod dashboard;

pub use dashboard::{ChartData, Dashboard};
