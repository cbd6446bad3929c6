//! Core domain models for versync
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency set snapshots built by the three source readers
//! - Exclusion policy and package name normalization

mod dependency_set;
mod policy;

pub use dependency_set::DependencySet;
pub use policy::{is_excluded, normalize_name, EXCLUDED_PACKAGES, TEST_RUNNER};
