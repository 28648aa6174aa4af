//! Utility modules

pub mod error;
pub mod paths;
