//! roi-calc: Estimate savings and ROI from data-management overhead.

pub mod calculator;
pub mod config;
pub mod currency;
pub mod error;
pub mod inputs;
pub mod report;
pub mod tui;
pub mod types;
