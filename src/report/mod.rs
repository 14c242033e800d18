//! Totals and per-category breakdowns over every stored transaction.
//!
//! The report always covers the whole store and ignores the list filter.

mod aggregation;
mod view;

pub use aggregation::{CategoryTotal, Report, Totals, build_report};
pub use view::{get_report, report_view};
