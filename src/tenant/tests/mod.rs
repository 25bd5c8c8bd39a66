//! Unit tests for the tenant module.
