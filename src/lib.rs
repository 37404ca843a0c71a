//! Moodspend - expense tracking with a mood on every purchase
//!
//! This library provides the core functionality for the `moodspend` CLI:
//! a JSON-backed expense store, a pure query/aggregation engine and the
//! import/export and report layers built on top of it.
//!
//! # Architecture
//!
//! - `config`: paths and user settings
//! - `error`: custom error types
//! - `models`: expenses, money, moods and ids
//! - `storage`: JSON file storage for the expense list
//! - `query`: filtering, grouping, totals and insights
//! - `services`: form submission, deletion, reset and JSON import
//! - `export`: CSV, JSON and YAML export
//! - `reports`: the dashboard view model
//! - `display`: terminal formatting
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use moodspend::config::{paths::MoodspendPaths, settings::Settings};
//! use moodspend::query::{derive_insights, ExpenseFilter};
//! use moodspend::services::ExpenseService;
//! use moodspend::storage::Storage;
//!
//! let paths = MoodspendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let records = ExpenseService::new(&storage, &settings).list(&ExpenseFilter::new())?;
//! let insights = derive_insights(&records);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{MoodspendError, MoodspendResult};
