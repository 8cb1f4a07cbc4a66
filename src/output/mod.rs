//! Output formatting.
//!
//! - [`report`] - the three-section stdout report

mod report;

// Re-export public functions
pub use report::render_report;
