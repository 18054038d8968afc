//! Shared fixtures for integration tests.

pub mod domain_fixtures;
pub mod reflect_helpers;
