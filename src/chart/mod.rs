//! Aggregation and chart rendering for the expenses page.

mod aggregation;
mod view;

pub use aggregation::{by_category, by_month, total};

pub(crate) use aggregation::month_label;
pub(crate) use view::{ChartPanel, build_charts, charts_script, charts_view};
