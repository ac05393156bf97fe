//! Pricing configuration domain models.
//!
//! A `PricingConfig` is owned by a conference, mutated only by an
//! administrator on configuration save, and treated as an immutable
//! snapshot during resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;
use crate::services::ordering::HasOrder;

/// The time-bounded pricing bracket active for a registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    EarlyBird,
    Regular,
    Late,
}

impl Tier {
    /// Converts to the stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::EarlyBird => "early_bird",
            Tier::Regular => "regular",
            Tier::Late => "late",
        }
    }

    /// Parses from the stable string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "early_bird" => Some(Tier::EarlyBird),
            "regular" => Some(Tier::Regular),
            "late" => Some(Tier::Late),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The registrant category a fee is looked up for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum FeeCategory {
    Standard,
    Student,
    /// An admin-defined fee type, addressed by its id.
    Custom(Uuid),
}

/// The early-bird window: a price valid until an explicit deadline.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarlyBirdTier {
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub amount: f64,
    /// No deadline means early-bird pricing is never active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

/// A tier window that opens at an explicit start date.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTier {
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

/// Fixed per-tier student prices. These are authored amounts, not
/// discounts applied to the standard price.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentPrices {
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub early_bird: f64,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub regular: f64,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub late: f64,
}

/// An admin-defined registrant category (e.g. "VIP") with its own
/// per-tier price triple, parallel to standard/student.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomFeeType {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub early_bird: f64,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub regular: f64,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub late: f64,
    /// Position in the admin-authored list, kept consistent by the
    /// ordering service.
    #[serde(default)]
    pub order: i32,
}

/// A flat add-on line item. Not tier-dependent and not taxed by the fee
/// engine; the amount passes through as authored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomPricingField {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// Complete pricing configuration for a conference.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// ISO-like 3-letter currency code.
    #[validate(custom(function = "shared::validation::validate_currency_code"))]
    pub currency: String,
    /// `None` means "inherit the organization default" supplied by the
    /// caller at computation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "shared::validation::validate_vat_percentage"))]
    pub vat_percentage: Option<f64>,
    /// Whether authored amounts are tax-inclusive (gross) or
    /// tax-exclusive (net).
    pub prices_include_vat: bool,
    #[validate(nested)]
    pub early_bird: EarlyBirdTier,
    #[validate(nested)]
    pub regular: ScheduledTier,
    #[validate(nested)]
    pub late: ScheduledTier,
    #[validate(nested)]
    pub student: StudentPrices,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub accompanying_person_price: f64,
    #[serde(default)]
    #[validate(nested)]
    pub custom_fee_types: Vec<CustomFeeType>,
    #[serde(default)]
    #[validate(nested)]
    pub custom_pricing_fields: Vec<CustomPricingField>,
}

impl PricingConfig {
    /// Looks up a custom fee type by id.
    pub fn custom_fee_type(&self, id: Uuid) -> Option<&CustomFeeType> {
        self.custom_fee_types.iter().find(|fee| fee.id == id)
    }

    /// Checks structural invariants that the `Validate` derive cannot
    /// express, returning `InvalidConfiguration` on the first violation.
    ///
    /// Intended to run on configuration save, before the snapshot ever
    /// reaches resolution.
    pub fn validate_structure(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidConfiguration(e.to_string()))?;

        let mut seen = std::collections::HashSet::new();
        for fee in &self.custom_fee_types {
            if !seen.insert(fee.id) {
                return Err(DomainError::InvalidConfiguration(format!(
                    "Duplicate custom fee type id: {}",
                    fee.id
                )));
            }
        }
        Ok(())
    }
}

impl HasOrder for CustomFeeType {
    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

impl HasOrder for CustomPricingField {
    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> PricingConfig {
        PricingConfig {
            currency: "EUR".to_string(),
            vat_percentage: Some(25.0),
            prices_include_vat: false,
            early_bird: EarlyBirdTier {
                amount: 300.0,
                deadline: None,
            },
            regular: ScheduledTier {
                amount: 400.0,
                start_date: None,
            },
            late: ScheduledTier {
                amount: 500.0,
                start_date: None,
            },
            student: StudentPrices {
                early_bird: 150.0,
                regular: 200.0,
                late: 250.0,
            },
            accompanying_person_price: 80.0,
            custom_fee_types: vec![],
            custom_pricing_fields: vec![],
        }
    }

    #[test]
    fn test_tier_round_trip() {
        for tier in [Tier::EarlyBird, Tier::Regular, Tier::Late] {
            assert_eq!(Tier::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(Tier::from_str("super_late"), None);
    }

    #[test]
    fn test_config_serialization_uses_camel_case() {
        let json = serde_json::to_string(&sample_config()).unwrap();
        assert!(json.contains("\"vatPercentage\":25.0"));
        assert!(json.contains("\"pricesIncludeVat\":false"));
        assert!(json.contains("\"accompanyingPersonPrice\":80.0"));
    }

    #[test]
    fn test_validate_structure_accepts_valid_config() {
        assert!(sample_config().validate_structure().is_ok());
    }

    #[test]
    fn test_validate_structure_rejects_negative_amount() {
        let mut config = sample_config();
        config.student.late = -1.0;
        assert!(matches!(
            config.validate_structure(),
            Err(DomainError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_structure_rejects_out_of_range_vat() {
        let mut config = sample_config();
        config.vat_percentage = Some(120.0);
        assert!(config.validate_structure().is_err());
    }

    #[test]
    fn test_validate_structure_rejects_duplicate_fee_type_ids() {
        let mut config = sample_config();
        let id = Uuid::new_v4();
        for name in ["VIP", "Press"] {
            config.custom_fee_types.push(CustomFeeType {
                id,
                name: name.to_string(),
                description: None,
                early_bird: 100.0,
                regular: 120.0,
                late: 140.0,
                order: 0,
            });
        }
        assert!(matches!(
            config.validate_structure(),
            Err(DomainError::InvalidConfiguration(message)) if message.contains("Duplicate")
        ));
    }

    #[test]
    fn test_custom_fee_type_lookup() {
        let mut config = sample_config();
        let id = Uuid::new_v4();
        config.custom_fee_types.push(CustomFeeType {
            id,
            name: "VIP".to_string(),
            description: Some("Includes gala dinner".to_string()),
            early_bird: 600.0,
            regular: 700.0,
            late: 800.0,
            order: 0,
        });
        assert_eq!(config.custom_fee_type(id).map(|f| f.name.as_str()), Some("VIP"));
        assert!(config.custom_fee_type(Uuid::new_v4()).is_none());
    }
}
