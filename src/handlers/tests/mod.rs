//! Unit tests for the built-in handlers.

mod adapter_tests;
mod support;
