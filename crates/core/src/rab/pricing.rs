//! Planned-cost computation: the quantity formula.

use rust_decimal::Decimal;

/// Computes a line item's planned total cost.
///
/// The planned cost is the arithmetic product of the three factor amounts
/// and the unit price. Any factor equal to zero yields a zero total: a
/// zero-quantity line item is a legitimate placeholder, not an error.
/// Negative inputs are rejected at the creation boundary and never reach
/// this function.
#[must_use]
pub fn total_price(
    quantity: Decimal,
    volume: Decimal,
    period: Decimal,
    unit_price: Decimal,
) -> Decimal {
    quantity * volume * period * unit_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_of_factors() {
        // 2 pax x 1 set x 3 day x 100_000 = 600_000
        assert_eq!(
            total_price(dec!(2), dec!(1), dec!(3), dec!(100_000)),
            dec!(600_000)
        );
    }

    #[test]
    fn test_fractional_factors() {
        assert_eq!(
            total_price(dec!(2.5), dec!(4), dec!(1), dec!(10)),
            dec!(100)
        );
    }

    /// Strategy for non-negative factor amounts with two decimal places.
    fn factor_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..100_000).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The result always equals the arithmetic product of the inputs.
        #[test]
        fn prop_equals_arithmetic_product(
            q in factor_strategy(),
            v in factor_strategy(),
            p in factor_strategy(),
            u in factor_strategy(),
        ) {
            prop_assert_eq!(total_price(q, v, p, u), q * v * p * u);
        }

        /// The formula is commutative over its inputs.
        #[test]
        fn prop_commutative(
            q in factor_strategy(),
            v in factor_strategy(),
            p in factor_strategy(),
            u in factor_strategy(),
        ) {
            let reference = total_price(q, v, p, u);
            prop_assert_eq!(total_price(p, q, u, v), reference);
            prop_assert_eq!(total_price(u, p, v, q), reference);
        }

        /// Any zero factor annihilates the total.
        #[test]
        fn prop_zero_factor_yields_zero(
            v in factor_strategy(),
            p in factor_strategy(),
            u in factor_strategy(),
        ) {
            prop_assert_eq!(total_price(Decimal::ZERO, v, p, u), Decimal::ZERO);
            prop_assert_eq!(total_price(v, Decimal::ZERO, p, u), Decimal::ZERO);
            prop_assert_eq!(total_price(v, p, Decimal::ZERO, u), Decimal::ZERO);
            prop_assert_eq!(total_price(v, p, u, Decimal::ZERO), Decimal::ZERO);
        }
    }
}
