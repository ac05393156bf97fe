//! Domain services for the registration platform.
//!
//! Services contain business logic that operates on domain models. All
//! of them are pure, synchronous computations over immutable snapshots;
//! they can run once per incoming registration request without any
//! coordination.

pub mod fee_computation;
pub mod ordering;
pub mod schema_builder;
pub mod tier_resolution;

pub use fee_computation::{
    compute_accompanying_person_pricing, compute_pricing, custom_line_items_total,
    PricingBreakdown,
};
pub use ordering::{move_item, move_ordered, renumber, HasOrder};
pub use schema_builder::{
    build_validator, FieldValidator, NormalizedSubmission, FIELD_KEY_PREFIX,
};
pub use tier_resolution::{effective_regular_start, resolve_tier, TierResolution};
