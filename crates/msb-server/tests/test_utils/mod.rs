//! Test utilities for msb-server
//!
//! Provides a mock implementation of the commerce gateway port and test
//! fixtures for handler testing.

pub mod mock_services;
pub mod test_fixtures;
