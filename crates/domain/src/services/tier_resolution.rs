//! Pricing tier resolution.
//!
//! Maps a point in time onto exactly one of the three pricing tiers of a
//! conference. Resolution is deterministic and total: for any instant
//! and any configuration snapshot a tier is returned.
//!
//! Late pricing only activates on an explicit late start date. A
//! configuration without one never enters the late tier automatically,
//! which is the safer default for registrant-facing prices.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::pricing::{PricingConfig, Tier};

/// The outcome of resolving the active tier at a given instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierResolution {
    /// The tier a registration started now is charged under.
    pub tier: Tier,
    /// When the current price stops applying, if a boundary is known.
    /// Display surfaces render this as "price increases after ...".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// The tier that takes over at `deadline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<Tier>,
}

/// Resolves the pricing tier active at `now`.
///
/// The early-bird window runs up to and including its deadline; without
/// a deadline, early bird is never active. After it, the late tier
/// applies from its explicit start date onward, and the regular tier
/// covers everything in between. A future `regular.start_date` never
/// causes a fall-through to late: regular is the default window.
pub fn resolve_tier(
    now: DateTime<Utc>,
    config: &PricingConfig,
    conference_start: Option<DateTime<Utc>>,
) -> TierResolution {
    if let Some(deadline) = config.early_bird.deadline {
        if now <= deadline {
            let resolution = TierResolution {
                tier: Tier::EarlyBird,
                deadline: Some(deadline),
                next_tier: Some(Tier::Regular),
            };
            tracing::debug!(tier = %resolution.tier, deadline = %deadline, "Resolved pricing tier");
            return resolution;
        }
    }

    let late_start = config.late.start_date;
    let resolution = match late_start {
        Some(start) if now >= start => TierResolution {
            tier: Tier::Late,
            deadline: None,
            next_tier: None,
        },
        _ => TierResolution {
            tier: Tier::Regular,
            // A known future late start is the next price boundary.
            deadline: late_start,
            next_tier: late_start.map(|_| Tier::Late),
        },
    };
    tracing::debug!(
        tier = %resolution.tier,
        regular_start = ?effective_regular_start(config, conference_start),
        "Resolved pricing tier"
    );
    resolution
}

/// The instant regular pricing is considered to begin, for display
/// purposes ("regular pricing from ...").
///
/// Falls back from the explicit start date to the day after the
/// early-bird deadline, then to the conference start. `None` means
/// regular pricing has no known lower boundary and simply always
/// applies once early bird is over.
pub fn effective_regular_start(
    config: &PricingConfig,
    conference_start: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    config
        .regular
        .start_date
        .or_else(|| config.early_bird.deadline.map(|d| d + Duration::days(1)))
        .or(conference_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pricing::{EarlyBirdTier, ScheduledTier, StudentPrices};
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn config_with_deadline(deadline: Option<DateTime<Utc>>) -> PricingConfig {
        PricingConfig {
            currency: "EUR".to_string(),
            vat_percentage: None,
            prices_include_vat: false,
            early_bird: EarlyBirdTier {
                amount: 300.0,
                deadline,
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
    fn test_before_deadline_is_early_bird() {
        let deadline = at(2026, 3, 1);
        let config = config_with_deadline(Some(deadline));

        let resolution = resolve_tier(at(2026, 2, 15), &config, None);
        assert_eq!(resolution.tier, Tier::EarlyBird);
        assert_eq!(resolution.deadline, Some(deadline));
        assert_eq!(resolution.next_tier, Some(Tier::Regular));
    }

    #[test]
    fn test_deadline_is_inclusive() {
        let deadline = at(2026, 3, 1);
        let config = config_with_deadline(Some(deadline));
        assert_eq!(resolve_tier(deadline, &config, None).tier, Tier::EarlyBird);
    }

    #[test]
    fn test_after_deadline_is_regular() {
        let config = config_with_deadline(Some(at(2026, 3, 1)));

        let resolution = resolve_tier(at(2026, 3, 2), &config, None);
        assert_eq!(resolution.tier, Tier::Regular);
        assert_eq!(resolution.next_tier, None);
    }

    #[test]
    fn test_no_deadline_means_early_bird_never_active() {
        let config = config_with_deadline(None);
        assert_eq!(resolve_tier(at(2020, 1, 1), &config, None).tier, Tier::Regular);
    }

    #[test]
    fn test_late_requires_explicit_start_date() {
        // Without a late start date, late is never entered, no matter
        // how far past every other boundary the clock is.
        let config = config_with_deadline(Some(at(2026, 3, 1)));
        assert_eq!(resolve_tier(at(2030, 1, 1), &config, None).tier, Tier::Regular);
    }

    #[test]
    fn test_late_from_explicit_start_date() {
        let mut config = config_with_deadline(Some(at(2026, 3, 1)));
        config.late.start_date = Some(at(2026, 5, 1));

        let resolution = resolve_tier(at(2026, 5, 1), &config, None);
        assert_eq!(resolution.tier, Tier::Late);
        assert_eq!(resolution.deadline, None);
        assert_eq!(resolution.next_tier, None);
    }

    #[test]
    fn test_regular_reports_upcoming_late_boundary() {
        let mut config = config_with_deadline(Some(at(2026, 3, 1)));
        config.late.start_date = Some(at(2026, 5, 1));

        let resolution = resolve_tier(at(2026, 4, 1), &config, None);
        assert_eq!(resolution.tier, Tier::Regular);
        assert_eq!(resolution.deadline, Some(at(2026, 5, 1)));
        assert_eq!(resolution.next_tier, Some(Tier::Late));
    }

    #[test]
    fn test_future_regular_start_does_not_fall_through_to_late() {
        let mut config = config_with_deadline(Some(at(2026, 3, 1)));
        config.regular.start_date = Some(at(2026, 4, 1));
        config.late.start_date = Some(at(2026, 6, 1));

        // Past the deadline, before the regular start date: still
        // regular via its default window, never late.
        assert_eq!(resolve_tier(at(2026, 3, 15), &config, None).tier, Tier::Regular);
    }

    #[test]
    fn test_early_bird_wins_over_late_start() {
        // Tiers are totally ordered in time: an instant inside the
        // early-bird window resolves early bird even if a (misordered)
        // late start date is already behind.
        let mut config = config_with_deadline(Some(at(2026, 3, 1)));
        config.late.start_date = Some(at(2026, 1, 1));
        assert_eq!(resolve_tier(at(2026, 2, 1), &config, None).tier, Tier::EarlyBird);
    }

    #[test]
    fn test_effective_regular_start_fallback_chain() {
        let mut config = config_with_deadline(Some(at(2026, 3, 1)));
        assert_eq!(
            effective_regular_start(&config, None),
            Some(at(2026, 3, 1) + Duration::days(1))
        );

        config.regular.start_date = Some(at(2026, 4, 1));
        assert_eq!(effective_regular_start(&config, None), Some(at(2026, 4, 1)));

        config.regular.start_date = None;
        config.early_bird.deadline = None;
        assert_eq!(
            effective_regular_start(&config, Some(at(2026, 6, 15))),
            Some(at(2026, 6, 15))
        );
        assert_eq!(effective_regular_start(&config, None), None);
    }
}
