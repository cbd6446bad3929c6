//! Readers for the three independent version sources
//!
//! Each reader turns one source into a [`DependencySet`](crate::domain::DependencySet):
//! - `ci_yaml`: CI environment descriptors (sentinel-comment line format)
//! - `pyproject`: the manifest's optional-dependency groups
//! - `compat`: the in-code compatibility table

pub mod ci_yaml;
pub mod compat;
pub mod pyproject;

pub use ci_yaml::CiVersions;
pub use compat::CompatTable;
