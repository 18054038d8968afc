//! Reflector tests
//!
//! End-to-end reflection of the demo domain:
//! - Parallel and sequential runs publish the same metamodel
//! - Cyclic references resolve through the metamodel
//! - Complementary methods never become actions
//! - Unknown types abort reflection; mismatches become diagnostics

mod tests_cycles;
mod tests_determinism;
mod tests_errors;
mod tests_members;
#[cfg(feature = "serde")]
mod tests_persistence;
