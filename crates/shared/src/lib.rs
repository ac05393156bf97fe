//! Shared utilities and common types for the Confera registration backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Currency rounding and net/gross conversion
//! - Common validation logic

pub mod money;
pub mod validation;
