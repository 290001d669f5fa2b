//! Embedded invoice dataset baked into the build.

/// Invoice database shipped with the dashboard.
pub static INVOICE_CSV: &str = include_str!("../../data/invoice_database.csv");

