//! Report building for the transport roster engine.
//!
//! This module contains the aggregation core ([`build_report`]) and the
//! two views derived from its output: the human-readable text rendering
//! and the flat spreadsheet export.

mod aggregate;
mod export;
mod render;

pub use aggregate::build_report;
pub use export::{export_rows, write_csv, ExportRow, TOTAL_ROW_LABEL};
pub use render::render_text;
