//! Test Module
//!
//! Shared test suite for the FanChat assistant brain.
//!
//! ## Test Categories
//! - `brain_tests`: data aggregation and response rendering per intent
//! - `store_tests`: feed parsing, defaults, and query views
//! - `integration_tests`: end-to-end facade scenarios against the sample feed

pub mod brain_tests;
