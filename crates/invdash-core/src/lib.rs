//! Core library for the invoice dashboard.
//!
//! This crate provides:
//! - CSV loading of the invoice database into an immutable [`Dataset`]
//! - Summary statistics, search and per-field metrics
//! - Monthly and payment-terms breakdowns for reports
//! - A [`Dashboard`] that owns the single load and caches derived values

pub mod analytics;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod loader;
pub mod models;

pub use analytics::{search, summarize, FieldParser, LenientFloat, LenientInt};
pub use dashboard::Dashboard;
pub use error::{AggregateError, DashError, InputError, Result};
pub use loader::{load, load_bytes, CsvLoader, DatasetLoader, LoadPolicy};
pub use models::config::DashConfig;
pub use models::{Dataset, Record, Report, SummaryStats};
