//! versync - Minimum-version sync checker library
//!
//! This library provides the core functionality for verifying that the
//! minimum supported versions of optional dependencies agree across three
//! independent sources:
//! - CI environment descriptors (YAML with sentinel comments)
//! - pyproject.toml optional-dependency groups
//! - the in-code compatibility table

pub mod checker;
pub mod cli;
pub mod diff;
pub mod domain;
pub mod error;
pub mod output;
pub mod source;
