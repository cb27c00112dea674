//! Tool Registry and Router Tests
