// src/lib.rs

//! Headless-Chrome scraper for LinkedIn Easy Apply jobs.
//!
//! Searches a fixed table of locations and renders everything found
//! into one self-contained, filterable HTML report.

pub mod config;
pub mod jobs;
pub mod report;
pub mod search;
pub mod session;
