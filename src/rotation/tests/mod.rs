//! Unit tests for the rotation store.
