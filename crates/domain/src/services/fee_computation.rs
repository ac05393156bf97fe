//! Registration fee and VAT computation.
//!
//! Given a resolved tier, a registrant category and a pricing
//! configuration snapshot, produces the amount to charge together with
//! its net/gross breakdown. A fee lookup for a category the
//! configuration does not define is an error, never a zero amount.

use serde::{Deserialize, Serialize};
use shared::money::{gross_from_net, net_from_gross, round_currency};

use crate::error::DomainError;
use crate::models::pricing::{FeeCategory, PricingConfig, Tier};

/// A computed fee with its tax breakdown.
///
/// `amount` is the registrant-facing figure (gross, rounded); the
/// admin-facing breakdown shows both `gross_amount` and `net_amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub amount: f64,
    pub currency: String,
    /// The effective VAT percentage applied, if any was configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_percentage: Option<f64>,
    pub gross_amount: f64,
    pub net_amount: f64,
}

impl PricingBreakdown {
    /// Registrant-facing rendering, e.g. `"450.00 EUR"`.
    pub fn display_amount(&self) -> String {
        format!("{:.2} {}", self.amount, self.currency)
    }
}

fn base_amount(
    tier: Tier,
    category: &FeeCategory,
    config: &PricingConfig,
) -> Result<f64, DomainError> {
    match category {
        FeeCategory::Standard => Ok(match tier {
            Tier::EarlyBird => config.early_bird.amount,
            Tier::Regular => config.regular.amount,
            Tier::Late => config.late.amount,
        }),
        FeeCategory::Student => Ok(match tier {
            Tier::EarlyBird => config.student.early_bird,
            Tier::Regular => config.student.regular,
            Tier::Late => config.student.late,
        }),
        FeeCategory::Custom(id) => {
            let fee = config
                .custom_fee_type(*id)
                .ok_or(DomainError::UnknownCategory {
                    category: id.to_string(),
                })?;
            Ok(match tier {
                Tier::EarlyBird => fee.early_bird,
                Tier::Regular => fee.regular,
                Tier::Late => fee.late,
            })
        }
    }
}

fn breakdown_for(base: f64, config: &PricingConfig, vat_fallback: Option<f64>) -> PricingBreakdown {
    let vat = config.vat_percentage.or(vat_fallback).unwrap_or(0.0);

    let (gross, net) = if config.prices_include_vat {
        (base, net_from_gross(base, vat))
    } else {
        (gross_from_net(base, vat), base)
    };

    let gross = round_currency(gross);
    PricingBreakdown {
        amount: gross,
        currency: config.currency.clone(),
        vat_percentage: config.vat_percentage.or(vat_fallback),
        gross_amount: gross,
        net_amount: round_currency(net),
    }
}

/// Computes the fee for one registrant.
///
/// The base amount is keyed by `(category, tier)`; the effective VAT is
/// the config's own percentage, falling back to `vat_fallback` (the
/// organization default) and finally to zero.
pub fn compute_pricing(
    tier: Tier,
    category: &FeeCategory,
    config: &PricingConfig,
    vat_fallback: Option<f64>,
) -> Result<PricingBreakdown, DomainError> {
    let base = base_amount(tier, category, config)?;
    let breakdown = breakdown_for(base, config, vat_fallback);
    tracing::debug!(
        tier = %tier,
        amount = breakdown.amount,
        currency = %breakdown.currency,
        "Computed registration fee"
    );
    Ok(breakdown)
}

/// Computes the flat accompanying-person fee.
///
/// Not tiered; follows the same net/gross treatment as the main fee.
pub fn compute_accompanying_person_pricing(
    config: &PricingConfig,
    vat_fallback: Option<f64>,
) -> PricingBreakdown {
    breakdown_for(config.accompanying_person_price, config, vat_fallback)
}

/// Sums the flat custom line items.
///
/// These amounts pass through untaxed; tax treatment, if any, was
/// already the admin's responsibility when authoring them.
pub fn custom_line_items_total(config: &PricingConfig) -> f64 {
    round_currency(
        config
            .custom_pricing_fields
            .iter()
            .map(|field| field.value)
            .sum(),
    )
}
