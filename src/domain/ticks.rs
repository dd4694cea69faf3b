use tracing::debug;

use crate::core::{NiceTicks, loose_nice_numbers};

use super::{AxisOrientation, RangeDomain};

impl RangeDomain {
    #[must_use]
    pub fn ticks_count(&self) -> usize {
        self.ticks_count
    }

    /// Sets the requested tick count used by [`Self::nice_ticks`]; clamped to at least 2.
    pub fn set_ticks_count(&mut self, ticks_count: usize) {
        self.ticks_count = ticks_count.max(2);
    }

    /// Nice tick layout covering the current bounds of one axis.
    ///
    /// Returns `None` when that axis has no positive span.
    #[must_use]
    pub fn nice_ticks(&self, orientation: AxisOrientation) -> Option<NiceTicks> {
        let (min, max) = match orientation {
            AxisOrientation::Horizontal => self.range.x_bounds(),
            AxisOrientation::Vertical => self.range.y_bounds(),
        };
        if !min.is_finite() || !max.is_finite() || max <= min {
            return None;
        }
        Some(loose_nice_numbers(min, max, self.ticks_count))
    }

    /// Expands one axis to its nice tick range and adopts the fitted tick count.
    pub fn apply_nice_numbers(&mut self, orientation: AxisOrientation) -> Option<NiceTicks> {
        let ticks = self.nice_ticks(orientation)?;
        debug!(
            ?orientation,
            min = ticks.min,
            max = ticks.max,
            ticks_count = ticks.ticks_count,
            "apply nice numbers"
        );
        self.ticks_count = ticks.ticks_count;
        self.apply_axis_range(orientation, ticks.min, ticks.max);
        Some(ticks)
    }
}
