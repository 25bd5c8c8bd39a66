//! Unit tests for the dispatch module.

mod support;
