//! "Nice numbers" for axis labelling (Heckbert, Graphics Gems I).
//!
//! A nice number has the form `{1, 2, 5, 10} * 10^n`. Ranges are rounded
//! outward with the ceiling variant, tick spacing with the rounding one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// Upper bound on the requested tick count accepted by [`try_loose_nice_numbers`].
pub const MAX_TICKS_COUNT: usize = 1 << 16;

/// Tick layout produced by [`loose_nice_numbers`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NiceTicks {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub ticks_count: usize,
}

impl NiceTicks {
    /// Evenly spaced tick values from `min` to `max` inclusive.
    #[must_use]
    pub fn values(self) -> SmallVec<[f64; 16]> {
        (0..self.ticks_count)
            .map(|index| self.min + self.step * index as f64)
            .collect()
    }
}

/// Rounds `x` to a nice number.
///
/// With `ceiling` the result is the smallest nice number not below `x`
/// (up to float rounding); otherwise the nearest one. `x` must be positive.
#[must_use]
pub fn nice_number(x: f64, ceiling: bool) -> f64 {
    debug_assert!(x > 0.0, "nice_number requires a positive input, got {x}");

    let z = 10.0_f64.powf(x.log10().floor());
    let q = x / z;

    let q = if ceiling {
        if q <= 1.0 {
            1.0
        } else if q <= 2.0 {
            2.0
        } else if q <= 5.0 {
            5.0
        } else {
            10.0
        }
    } else if q < 1.5 {
        1.0
    } else if q < 3.0 {
        2.0
    } else if q < 7.0 {
        5.0
    } else {
        10.0
    };

    q * z
}

/// Expands `[min, max]` to whole multiples of a nice step.
///
/// `ticks_count` is the requested number of ticks; the returned layout
/// carries the count that actually fits the rounded range. Requires
/// `ticks_count >= 2` and `max > min`.
#[must_use]
pub fn loose_nice_numbers(min: f64, max: f64, ticks_count: usize) -> NiceTicks {
    debug_assert!(ticks_count >= 2, "at least two ticks are required");
    debug_assert!(max > min, "max must be greater than min");

    let range = nice_number(max - min, true);
    let step = nice_number(range / (ticks_count as f64 - 1.0), false);
    let first = (min / step).floor();
    let last = (max / step).ceil();

    // Float-to-int casts saturate; keep the increment from wrapping too.
    let steps = (last - first).round() as usize;

    NiceTicks {
        min: first * step,
        max: last * step,
        step,
        ticks_count: steps.saturating_add(1),
    }
}

/// Checked variant of [`loose_nice_numbers`] for untrusted input.
pub fn try_loose_nice_numbers(min: f64, max: f64, ticks_count: usize) -> ChartResult<NiceTicks> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(
            "tick range bounds must be finite".to_owned(),
        ));
    }
    if max <= min {
        return Err(ChartError::InvalidData(format!(
            "tick range must satisfy min < max, got {min}..{max}"
        )));
    }
    if !(max - min).is_finite() {
        return Err(ChartError::InvalidData(format!(
            "tick range span overflows, got {min}..{max}"
        )));
    }
    if !(2..=MAX_TICKS_COUNT).contains(&ticks_count) {
        return Err(ChartError::InvalidData(format!(
            "tick count must be in 2..={MAX_TICKS_COUNT}, got {ticks_count}"
        )));
    }

    let ticks = loose_nice_numbers(min, max, ticks_count);
    if !ticks.step.is_finite()
        || ticks.step <= 0.0
        || !ticks.min.is_finite()
        || !ticks.max.is_finite()
    {
        return Err(ChartError::InvalidData(format!(
            "tick range {min}..{max} has no finite nice layout"
        )));
    }
    Ok(ticks)
}

/// Clamps bounds headed for a logarithmic axis to positive values.
///
/// When `min <= 0` it becomes `1.0`, and `max` is raised to `min + 1.0`
/// if it no longer lies above `min`. Positive input passes unchanged.
#[must_use]
pub fn adjust_log_domain_ranges(min: f64, max: f64) -> (f64, f64) {
    if min > 0.0 {
        return (min, max);
    }

    let adjusted_min = 1.0;
    let adjusted_max = if max <= adjusted_min {
        adjusted_min + 1.0
    } else {
        max
    };
    warn!(
        min,
        max,
        adjusted_min,
        adjusted_max,
        "non-positive log domain bound replaced with failsafe range"
    );
    (adjusted_min, adjusted_max)
}
