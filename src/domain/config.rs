use serde::{Deserialize, Serialize};

use crate::core::{DomainRange, PlotSize};
use crate::error::{ChartError, ChartResult};

use super::{DEFAULT_TICKS_COUNT, RangeDomain};

/// Serializable bootstrap settings for a [`RangeDomain`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeDomainConfig {
    pub size: PlotSize,
    pub range: DomainRange,
    #[serde(default = "default_ticks_count")]
    pub ticks_count: usize,
}

impl RangeDomainConfig {
    #[must_use]
    pub fn new(size: PlotSize, range: DomainRange) -> Self {
        Self {
            size,
            range,
            ticks_count: DEFAULT_TICKS_COUNT,
        }
    }

    #[must_use]
    pub fn with_range_x(mut self, min: f64, max: f64) -> Self {
        self.range = self.range.with_x(min, max);
        self
    }

    #[must_use]
    pub fn with_range_y(mut self, min: f64, max: f64) -> Self {
        self.range = self.range.with_y(min, max);
        self
    }

    #[must_use]
    pub fn with_ticks_count(mut self, ticks_count: usize) -> Self {
        self.ticks_count = ticks_count;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.size.validated()?;
        self.range.validate()?;
        if self.ticks_count < 2 {
            return Err(ChartError::InvalidData(format!(
                "ticks count must be >= 2, got {}",
                self.ticks_count
            )));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for RangeDomainConfig {
    fn default() -> Self {
        Self::new(
            PlotSize::new(1.0, 1.0),
            DomainRange::from_bounds(0.0, 1.0, 0.0, 1.0),
        )
    }
}

fn default_ticks_count() -> usize {
    DEFAULT_TICKS_COUNT
}

impl RangeDomain {
    /// Builds a domain from validated config. No notifications are emitted.
    pub fn from_config(config: RangeDomainConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let mut domain = Self::new();
        domain.size = config.size;
        domain.range = config.range;
        domain.ticks_count = config.ticks_count;
        Ok(domain)
    }
}
