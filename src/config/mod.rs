//! Configuration module for Haven
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The calculation policy (budget ratios, cost model)

pub mod paths;
pub mod policy;
pub mod settings;

pub use paths::HavenPaths;
pub use policy::{BudgetRatios, FreedomPolicy, Policy};
pub use settings::Settings;
