//! Configuration module for moodspend
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MoodspendPaths;
pub use settings::{AmountPolicy, CorruptDataPolicy, Settings};
