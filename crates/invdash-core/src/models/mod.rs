//! Data models for invoice records and derived statistics.

pub mod config;
pub mod embedded;
pub mod record;
pub mod summary;

pub use record::{fields, Dataset, Record};
pub use summary::{
    CompanyCount, DateRange, MonthlyTotals, Report, SummaryStats, TermCount,
};
