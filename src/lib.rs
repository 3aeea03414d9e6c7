// Library exports for integration tests and reusable components

pub mod brreg;
pub mod config;
pub mod search;
pub mod ui;

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;
