//! Hotel accommodation options offered alongside registration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;
use crate::services::ordering::HasOrder;

/// A bookable hotel option, maintained by an administrator as an
/// ordered list.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelOption {
    pub id: Uuid,
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    pub price_per_night: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_until: Option<NaiveDate>,
    /// Room cap. `None` means unlimited; when set it must be positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rooms: Option<u32>,
    /// Position in the admin-authored list, kept consistent by the
    /// ordering service.
    #[serde(default)]
    pub order: i32,
}

impl HotelOption {
    /// Checks invariants the `Validate` derive cannot express.
    pub fn validate_structure(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidConfiguration(e.to_string()))?;

        if let (Some(from), Some(until)) = (self.available_from, self.available_until) {
            if until < from {
                return Err(DomainError::InvalidConfiguration(format!(
                    "Hotel option '{}': availableUntil {} is before availableFrom {}",
                    self.name, until, from
                )));
            }
        }
        if self.max_rooms == Some(0) {
            return Err(DomainError::InvalidConfiguration(format!(
                "Hotel option '{}': maxRooms must be positive when set",
                self.name
            )));
        }
        Ok(())
    }

    /// Whether the option can be booked for a given night.
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.available_from {
            if date < from {
                return false;
            }
        }
        if let Some(until) = self.available_until {
            if date > until {
                return false;
            }
        }
        true
    }
}

impl HasOrder for HotelOption {
    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}
