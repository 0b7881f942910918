//! Core reader logic

pub mod config;
pub mod metrics;
pub mod report;
