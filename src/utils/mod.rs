/// Utility modules for the mock data check
///
/// This module contains helpers for reading the inspected file and formatting
/// the verdict.

pub mod file_utils;
pub mod output_formatter;
