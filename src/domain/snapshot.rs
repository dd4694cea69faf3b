use serde::{Deserialize, Serialize};

use crate::core::{DomainRange, PlotSize};
use crate::error::{ChartError, ChartResult};

use super::RangeDomain;

/// Point-in-time view of a domain's state, without listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainSnapshot {
    pub range: DomainRange,
    pub size: PlotSize,
    pub ticks_count: usize,
    pub signals_blocked: bool,
    pub zoom_reset_range: Option<DomainRange>,
}

impl DomainSnapshot {
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom_reset_range.is_some()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

impl RangeDomain {
    #[must_use]
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            range: self.range,
            size: self.size,
            ticks_count: self.ticks_count,
            signals_blocked: self.signals_blocked,
            zoom_reset_range: self.zoom_reset_range,
        }
    }

    /// Serializes the current snapshot to pretty JSON.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
