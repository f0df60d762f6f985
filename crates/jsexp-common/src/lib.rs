//! Common types and utilities for the jsexp crates.
//!
//! This crate provides the leaf types used across the workspace:
//! - Source positions (`Position`), 1-based line/column pairs carried by nodes
//! - Centralized limits for recursive tree walks

// Position - line/column source locations
pub mod position;
pub use position::Position;

// Centralized limits and thresholds
pub mod limits;
