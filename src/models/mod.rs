//! Data models for Google Test reports
//!
//! This module contains the document structures the formatter renders.

mod test_report;

pub use test_report::{Failures, StructureError, TestCase, TestReport, TestStatus, TestSuite};
