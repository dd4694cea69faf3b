use tracing::{debug, trace};

use crate::core::{PlotSize, fuzzy_compare};

use super::RangeDomain;

impl RangeDomain {
    /// Replaces the plot size, notifying only on an exact change.
    pub fn set_size(&mut self, size: PlotSize) {
        if self.size == size {
            return;
        }

        trace!(width = size.width, height = size.height, "set plot size");
        self.size = size;
        if self.signals_blocked {
            self.resize_pending = true;
        } else {
            self.emit_resized();
        }
    }

    /// Stores all four bounds and notifies each half that changed.
    ///
    /// Bounds are not validated; `min <= max` is the caller's contract.
    pub fn set_range(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) {
        let x_changed =
            !fuzzy_compare(self.range.min_x, min_x) || !fuzzy_compare(self.range.max_x, max_x);
        let y_changed =
            !fuzzy_compare(self.range.min_y, min_y) || !fuzzy_compare(self.range.max_y, max_y);

        if x_changed {
            trace!(min_x, max_x, "set horizontal range");
            self.range = self.range.with_x(min_x, max_x);
            if !self.signals_blocked {
                self.emit_horizontal_range();
            }
        }

        if y_changed {
            trace!(min_y, max_y, "set vertical range");
            self.range = self.range.with_y(min_y, max_y);
            if !self.signals_blocked {
                self.emit_vertical_range();
            }
        }
    }

    pub fn set_range_x(&mut self, min: f64, max: f64) {
        self.set_range(min, max, self.range.min_y, self.range.max_y);
    }

    pub fn set_range_y(&mut self, min: f64, max: f64) {
        self.set_range(self.range.min_x, self.range.max_x, min, max);
    }

    pub fn set_min_x(&mut self, min: f64) {
        self.set_range(min, self.range.max_x, self.range.min_y, self.range.max_y);
    }

    pub fn set_max_x(&mut self, max: f64) {
        self.set_range(self.range.min_x, max, self.range.min_y, self.range.max_y);
    }

    pub fn set_min_y(&mut self, min: f64) {
        self.set_range(self.range.min_x, self.range.max_x, min, self.range.max_y);
    }

    pub fn set_max_y(&mut self, max: f64) {
        self.set_range(self.range.min_x, self.range.max_x, self.range.min_y, max);
    }

    /// Suspends or resumes notifications.
    ///
    /// Resuming always re-emits both ranges once, plus a resize if the size
    /// changed while blocked.
    pub fn block_range_signals(&mut self, block: bool) {
        if self.signals_blocked == block {
            return;
        }

        self.signals_blocked = block;
        if block {
            return;
        }

        debug!(range = %self.range, "resume range notifications");
        self.emit_horizontal_range();
        self.emit_vertical_range();
        if std::mem::take(&mut self.resize_pending) {
            self.emit_resized();
        }
    }

    /// A domain with a zero span or an empty plot cannot be mapped.
    ///
    /// Spans are compared relatively, so only an exact zero counts; tiny
    /// but non-zero spans still map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        fuzzy_compare(self.span_x(), 0.0)
            || fuzzy_compare(self.span_y(), 0.0)
            || self.size.is_empty()
    }
}
