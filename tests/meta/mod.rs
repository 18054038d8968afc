//! Metamodel tests
//!
//! - Member ordering laws over built specifications
//! - Metamodel lookup and process-wide installation

mod tests_metamodel;
mod tests_ordering;
