//! Unit tests for the cooldown module.

mod format_tests;
