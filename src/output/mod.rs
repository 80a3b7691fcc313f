//! Report presentation

pub mod formatter;
pub mod report;
