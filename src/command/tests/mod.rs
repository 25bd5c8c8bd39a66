//! Unit tests for the command module.

mod registry_tests;
