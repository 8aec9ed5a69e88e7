//! Haven - private financial-safety toolkit
//!
//! This library provides the calculators and the small amount of persisted
//! state behind the `haven` command: a 50/30/20 budget splitter, a
//! freedom-fund estimator, a loan amortizer, a secret stash ledger and a
//! phone safety checklist.
//!
//! # Architecture
//!
//! - `config`: Paths, user settings and the calculation policy
//! - `error`: Error types, including [`Rejection`] for refused input
//! - `models`: Core data models
//! - `storage`: Key-value store and per-entity repositories
//! - `services`: Calculators and stateful services
//! - `audit`: Activity log
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use haven_cli::config::BudgetRatios;
//! use haven_cli::services::split;
//!
//! let split = split(450.0, &BudgetRatios::default()).unwrap();
//! assert_eq!(split.needs, 225.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{HavenError, HavenResult, Rejection};
