use crate::core::{DataPoint, PixelPoint};
use crate::error::{ChartError, ChartResult};

use super::RangeDomain;

impl RangeDomain {
    /// Maps a plot pixel to data space.
    ///
    /// Pixel Y grows downward, data Y upward. The domain must not be empty
    /// (see [`RangeDomain::is_empty`]); a null span yields non-finite output.
    #[must_use]
    pub fn pixel_to_data(&self, point: PixelPoint) -> DataPoint {
        let (delta_x, delta_y) = self.pixels_per_unit();
        let x = point.x / delta_x + self.range.min_x;
        let y = (point.y - self.size.height) / (-delta_y) + self.range.min_y;
        DataPoint::new(x, y)
    }

    /// Maps a data point to plot pixels; the inverse of [`Self::pixel_to_data`].
    #[must_use]
    pub fn data_to_pixel(&self, point: DataPoint) -> PixelPoint {
        let (delta_x, delta_y) = self.pixels_per_unit();
        let x = (point.x - self.range.min_x) * delta_x;
        let y = (point.y - self.range.min_y) * -delta_y + self.size.height;
        PixelPoint::new(x, y)
    }

    /// Maps a batch of data points, or returns `None` on an empty domain.
    #[must_use]
    pub fn data_to_pixels(&self, points: &[DataPoint]) -> Option<Vec<PixelPoint>> {
        if self.is_empty() {
            return None;
        }
        Some(points.iter().map(|point| self.data_to_pixel(*point)).collect())
    }

    pub fn try_pixel_to_data(&self, point: PixelPoint) -> ChartResult<DataPoint> {
        self.ensure_mappable()?;
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        Ok(self.pixel_to_data(point))
    }

    pub fn try_data_to_pixel(&self, point: DataPoint) -> ChartResult<PixelPoint> {
        self.ensure_mappable()?;
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ChartError::InvalidData(
                "data point must be finite".to_owned(),
            ));
        }
        Ok(self.data_to_pixel(point))
    }

    fn ensure_mappable(&self) -> ChartResult<()> {
        if self.size.is_empty() {
            return Err(ChartError::InvalidPlotSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if self.is_empty() {
            return Err(ChartError::InvalidData(
                "domain span must be non-zero".to_owned(),
            ));
        }
        Ok(())
    }

    fn pixels_per_unit(&self) -> (f64, f64) {
        (
            self.size.width / (self.range.max_x - self.range.min_x),
            self.size.height / (self.range.max_y - self.range.min_y),
        )
    }
}
