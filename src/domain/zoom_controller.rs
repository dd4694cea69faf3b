use tracing::debug;

use crate::core::PlotRect;

use super::RangeDomain;

impl RangeDomain {
    /// Remembers the current range as the zoom-reset target.
    ///
    /// Only the first call takes effect until [`Self::zoom_reset`] runs, so
    /// nested zooms keep the original pre-zoom range.
    pub fn store_zoom_reset(&mut self) {
        if self.zoom_reset_range.is_some() {
            return;
        }
        debug!(range = %self.range, "store zoom reset");
        self.zoom_reset_range = Some(self.range);
    }

    /// Restores the stored range, if any, with normal notifications.
    pub fn zoom_reset(&mut self) {
        let Some(stored) = self.zoom_reset_range else {
            return;
        };
        debug!(range = %stored, "zoom reset");
        self.set_range(stored.min_x, stored.max_x, stored.min_y, stored.max_y);
        self.zoom_reset_range = None;
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom_reset_range.is_some()
    }

    /// Narrows the range to the data under `rect` (plot pixels).
    ///
    /// Stores the zoom-reset range first. Ignored on an empty domain.
    pub fn zoom_in(&mut self, rect: PlotRect) {
        if self.is_empty() {
            debug!("ignore zoom in on empty domain");
            return;
        }
        self.store_zoom_reset();

        let current = self.range;
        let dx = current.span_x() / self.size.width;
        let dy = current.span_y() / self.size.height;

        let mut min_x = current.min_x + dx * rect.left();
        let mut max_x = current.min_x + dx * rect.right();
        let mut min_y = current.max_y - dy * rect.bottom();
        let mut max_y = current.max_y - dy * rect.top();

        if max_x - min_x == current.span_x() {
            (min_x, max_x) = current.x_bounds();
        }
        if max_y - min_y == current.span_y() {
            (min_y, max_y) = current.y_bounds();
        }

        self.set_range(min_x, max_x, min_y, max_y);
    }

    /// Widens the range so the current view fits into `rect` (plot pixels).
    ///
    /// Stores the zoom-reset range first. Ignored on an empty domain or
    /// an empty `rect`.
    pub fn zoom_out(&mut self, rect: PlotRect) {
        if self.is_empty() || rect.is_empty() {
            debug!("ignore zoom out on empty domain or rect");
            return;
        }
        self.store_zoom_reset();

        let current = self.range;
        let dx = current.span_x() / rect.width;
        let dy = current.span_y() / rect.height;

        let min_x = current.max_x - dx * rect.right();
        let max_x = min_x + dx * self.size.width;
        let max_y = current.min_y + dy * rect.bottom();
        let min_y = max_y - dy * self.size.height;

        self.set_range(min_x, max_x, min_y, max_y);
    }

    /// Pans by a pixel offset; positive `dy` moves the view up in data space.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        if self.is_empty() {
            return;
        }

        let current = self.range;
        let (mut min_x, mut max_x) = current.x_bounds();
        let (mut min_y, mut max_y) = current.y_bounds();

        if dx != 0.0 {
            let shift = dx * current.span_x() / self.size.width;
            min_x += shift;
            max_x += shift;
        }
        if dy != 0.0 {
            let shift = dy * current.span_y() / self.size.height;
            min_y += shift;
            max_y += shift;
        }

        self.set_range(min_x, max_x, min_y, max_y);
    }
}
