//! Domain models for the registration platform.

pub mod field;
pub mod hotel;
pub mod pricing;

pub use field::{FieldDefinition, FieldError, FieldRules, FieldType};
pub use hotel::HotelOption;
pub use pricing::{
    CustomFeeType, CustomPricingField, EarlyBirdTier, FeeCategory, PricingConfig, ScheduledTier,
    StudentPrices, Tier,
};
