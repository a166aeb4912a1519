//! Common types and utilities for the opcheck convention checker.
//!
//! This crate provides foundational types used across all opcheck crates:
//! - Source positions (`Position`, `LineMap`)
//! - Convention verdict types (`Declaration`, `Diagnostic`, `ErrorCode`)
//! - Parser limits and thresholds

// Position/line lookup for source locations
pub mod position;
pub use position::{LineMap, Location, Position};

// Accepted declarations and convention diagnostics
pub mod diagnostics;
pub use diagnostics::{Declaration, Diagnostic, ErrorCode};

// Centralized limits and thresholds
pub mod limits;

/// Name of the constant every checked function must declare first.
pub const OP_CONSTANT: &str = "op";

/// Functions with this qualified name are exempt from the convention.
pub const ENTRY_FUNCTION: &str = "main";
