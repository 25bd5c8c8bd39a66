//! Unit tests for the audio module.
