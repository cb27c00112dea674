//! Transport Tests
//!
//! Integration tests for the HTTP transport using Rocket test utilities.
