//! Unit tests for the messaging gateway module.
