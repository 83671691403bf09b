use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of price slots in one trading window (six days, two slots each)
pub const SLOTS: usize = 12;

/// Price value - whole units, never negative
pub type Price = u32;

/// Multiplier applied to the base price - uses Decimal so catalog constants stay exact
pub type Multiplier = Decimal;

/// One value per slot of the trading window
pub type SlotSeries<T> = [T; SLOTS];

/// Price realised by a multiplier: `round(base * multiplier)`, half away from zero.
///
/// Negative products clamp to zero. Returns `None` when the product does not
/// fit in a `Price`.
pub fn price_at(base: Price, multiplier: Multiplier) -> Option<Price> {
    let price = (Decimal::from(base) * multiplier)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    if price.is_sign_negative() {
        return Some(0);
    }
    price.to_u32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_at_rounds_half_away_from_zero() {
        // 90 * 0.85 = 76.5
        assert_eq!(price_at(90, dec!(0.85)), Some(77));
        // 110 * 0.85 = 93.5
        assert_eq!(price_at(110, dec!(0.85)), Some(94));
        assert_eq!(price_at(90, dec!(1.4)), Some(126));
    }

    #[test]
    fn test_price_at_clamps_negative() {
        assert_eq!(price_at(100, dec!(-0.2)), Some(0));
        assert_eq!(price_at(0, dec!(6.0)), Some(0));
    }

    #[test]
    fn test_price_at_overflow_is_none() {
        assert_eq!(price_at(800_000_000, dec!(6.0)), None);
        assert_eq!(price_at(Price::MAX, dec!(1.0)), Some(Price::MAX));
        assert_eq!(price_at(Price::MAX, dec!(1.01)), None);
    }
}
