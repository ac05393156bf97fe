//! Currency rounding and net/gross amount conversion.

/// Rounds an amount to 2 decimal places using round-half-up.
///
/// This is the rounding applied to every registrant-facing amount before
/// it is displayed or charged.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Derives the tax-exclusive (net) amount from a tax-inclusive (gross) one.
///
/// `vat_percentage` is a percentage in `[0, 100]`.
pub fn net_from_gross(gross: f64, vat_percentage: f64) -> f64 {
    gross / (1.0 + vat_percentage / 100.0)
}

/// Derives the tax-inclusive (gross) amount from a tax-exclusive (net) one.
///
/// `vat_percentage` is a percentage in `[0, 100]`.
pub fn gross_from_net(net: f64, vat_percentage: f64) -> f64 {
    net * (1.0 + vat_percentage / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency_half_up() {
        // 0.125 is exactly representable, so this really exercises the
        // half-up tie break.
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(0.124), 0.12);
        assert_eq!(round_currency(399.999), 400.0);
        assert_eq!(round_currency(0.0), 0.0);
    }

    #[test]
    fn test_gross_from_net() {
        assert_eq!(round_currency(gross_from_net(400.0, 25.0)), 500.0);
        assert_eq!(round_currency(gross_from_net(100.0, 0.0)), 100.0);
    }

    #[test]
    fn test_net_from_gross() {
        assert_eq!(round_currency(net_from_gross(400.0, 25.0)), 320.0);
        assert_eq!(round_currency(net_from_gross(121.0, 21.0)), 100.0);
    }

    #[test]
    fn test_net_gross_round_trip() {
        // Converting net -> gross -> net at a fixed VAT recovers the
        // original amount within one cent.
        for &amount in &[0.0, 9.99, 123.45, 400.0, 1999.99] {
            for &vat in &[0.0, 7.7, 19.0, 21.0, 25.0] {
                let gross = gross_from_net(amount, vat);
                let back = net_from_gross(gross, vat);
                assert!(
                    (back - amount).abs() < 0.01,
                    "net {amount} at vat {vat} round-tripped to {back}"
                );
            }
        }
    }
}
