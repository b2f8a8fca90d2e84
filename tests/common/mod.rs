//! Common test utilities for jsonbrowser CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_output_contains!`
//! - Fixtures: Reusable JSON documents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;
pub mod home;

pub use env::*;
pub use fixtures::*;
