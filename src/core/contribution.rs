/// Floor is applied first, so the ceiling wins when the bounds are inverted.
pub fn bounded_monthly_investment(
    amount: f64,
    invest_percent: f64,
    min_amount: f64,
    max_amount: f64,
) -> f64 {
    let raw = amount * invest_percent / 100.0;
    raw.max(min_amount).min(max_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn applies_ceiling_when_share_is_too_large() {
        assert_approx(bounded_monthly_investment(10_000.0, 20.0, 500.0, 2_000.0), 2_000.0);
    }

    #[test]
    fn applies_floor_when_share_is_too_small() {
        assert_approx(bounded_monthly_investment(1_000.0, 20.0, 500.0, 2_000.0), 500.0);
    }

    #[test]
    fn keeps_share_inside_bounds() {
        assert_approx(bounded_monthly_investment(5_000.0, 20.0, 500.0, 2_000.0), 1_000.0);
    }

    #[test]
    fn inverted_bounds_resolve_to_ceiling() {
        assert_approx(bounded_monthly_investment(1_000.0, 20.0, 900.0, 300.0), 300.0);
        assert_approx(bounded_monthly_investment(10_000.0, 20.0, 900.0, 300.0), 300.0);
    }

    #[test]
    fn percent_outside_unit_range_is_accepted() {
        assert_approx(bounded_monthly_investment(1_000.0, 150.0, 0.0, 10_000.0), 1_500.0);
        assert_approx(bounded_monthly_investment(1_000.0, -10.0, 0.0, 10_000.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_result_stays_within_ordered_bounds(
            amount in 0u32..50_000,
            percent in 0u32..101,
            min in 0u32..3_000,
            span in 0u32..5_000
        ) {
            let min = min as f64;
            let max = min + span as f64;
            let invested = bounded_monthly_investment(amount as f64, percent as f64, min, max);
            prop_assert!(invested >= min && invested <= max);
        }
    }
}
