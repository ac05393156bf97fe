//! Domain layer for the Confera registration backend.
//!
//! This crate contains:
//! - Domain models (PricingConfig, FieldDefinition, HotelOption)
//! - Business logic services (tier resolution, fee computation,
//!   submission validation, list ordering)
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::DomainError;
