/// Core module for the mock data check
///
/// This module contains the inspector and the patterns it looks for.

pub mod inspector;
pub mod patterns;
