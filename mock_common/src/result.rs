//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `MockDataError`, so functions can simply return `Result<T>`.
use crate::error::MockDataError;

/// Workspace-wide `Result` alias with `MockDataError` as the default error.
pub type Result<T, E = MockDataError> = std::result::Result<T, E>;
