use chart_domain::core::{loose_nice_numbers, nice_number};
use proptest::prelude::*;

fn mantissa(value: f64) -> f64 {
    value / 10.0_f64.powf(value.log10().floor())
}

fn is_nice_mantissa(q: f64) -> bool {
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .any(|candidate| (q - candidate).abs() <= 1e-9)
}

proptest! {
    #[test]
    fn nice_number_ceiling_never_undershoots(x in 1e-6f64..1e6) {
        let nice = nice_number(x, true);
        prop_assert!(nice >= x * (1.0 - 1e-12));
        prop_assert!(nice <= x * 10.0 * (1.0 + 1e-12));
        prop_assert!(is_nice_mantissa(mantissa(nice)));
    }

    #[test]
    fn nice_number_round_stays_within_nearest_bucket(x in 1e-6f64..1e6) {
        let nice = nice_number(x, false);
        prop_assert!(is_nice_mantissa(mantissa(nice)));
        let ratio = nice / x;
        prop_assert!(ratio > 0.66 && ratio <= 5.0 / 3.0 + 1e-9, "ratio {ratio} for {x}");
    }

    #[test]
    fn loose_nice_numbers_contains_input_on_whole_steps(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        ticks_count in 2usize..12
    ) {
        let max = min + span;
        let ticks = loose_nice_numbers(min, max, ticks_count);
        let tolerance = 1e-9 * (min.abs().max(max.abs()) + ticks.step);

        prop_assert!(ticks.step > 0.0);
        prop_assert!(is_nice_mantissa(mantissa(ticks.step)));
        prop_assert!(ticks.min <= min + tolerance);
        prop_assert!(ticks.max >= max - tolerance);
        prop_assert!(ticks.ticks_count >= 2);

        let steps = (ticks.max - ticks.min) / ticks.step;
        prop_assert!((steps - steps.round()).abs() <= 1e-3);
        prop_assert_eq!(ticks.ticks_count, steps.round() as usize + 1);
    }

    #[test]
    fn loose_nice_numbers_on_exact_step_multiples(
        first in -500i64..500,
        steps in 1i64..50,
        exponent in -3i32..4
    ) {
        let unit = 10.0_f64.powi(exponent);
        let min = first as f64 * unit;
        let max = (first + steps) as f64 * unit;
        let ticks = loose_nice_numbers(min, max, 5);
        let tolerance = 1e-9 * (min.abs().max(max.abs()) + ticks.step);

        prop_assert!(ticks.min <= min + tolerance);
        prop_assert!(ticks.max >= max - tolerance);
        let expected = ((ticks.max - ticks.min) / ticks.step).round() as usize + 1;
        prop_assert_eq!(ticks.ticks_count, expected);
    }
}
