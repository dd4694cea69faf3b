//! Range domain shared by a chart and its axes.
//!
//! `RangeDomain` holds the visible data rectangle and the plot size, maps
//! points between data and pixel space and fans range changes out to
//! subscribed observers and attached axes.

use std::fmt;

use indexmap::IndexMap;

use crate::core::{DomainRange, PlotSize};

mod axis;
mod config;
mod events;
mod mapping;
mod range_controller;
mod snapshot;
mod ticks;
mod zoom_controller;

pub use axis::{AxisId, AxisOrientation, DomainAxis};
pub use config::RangeDomainConfig;
pub use events::{DomainEvent, DomainObserver, ObserverId};
pub use snapshot::DomainSnapshot;

use axis::AttachedAxis;

pub(crate) const DEFAULT_TICKS_COUNT: usize = 5;

/// Data range and plot geometry for one chart/axis pairing.
pub struct RangeDomain {
    range: DomainRange,
    size: PlotSize,
    ticks_count: usize,
    signals_blocked: bool,
    resize_pending: bool,
    zoom_reset_range: Option<DomainRange>,
    observers: IndexMap<ObserverId, Box<dyn DomainObserver>>,
    axes: IndexMap<AxisId, AttachedAxis>,
    next_handle: u64,
}

impl RangeDomain {
    /// Creates a domain with all bounds at zero and an empty plot size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            range: DomainRange::default(),
            size: PlotSize::default(),
            ticks_count: DEFAULT_TICKS_COUNT,
            signals_blocked: false,
            resize_pending: false,
            zoom_reset_range: None,
            observers: IndexMap::new(),
            axes: IndexMap::new(),
            next_handle: 0,
        }
    }

    #[must_use]
    pub fn range(&self) -> DomainRange {
        self.range
    }

    #[must_use]
    pub fn size(&self) -> PlotSize {
        self.size
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.range.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.range.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.range.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.range.max_y
    }

    #[must_use]
    pub fn span_x(&self) -> f64 {
        self.range.span_x()
    }

    #[must_use]
    pub fn span_y(&self) -> f64 {
        self.range.span_y()
    }

    #[must_use]
    pub fn signals_blocked(&self) -> bool {
        self.signals_blocked
    }

    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl Default for RangeDomain {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RangeDomain {
    /// Compares bounds only; plot size and listeners are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range
    }
}

impl fmt::Debug for RangeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeDomain")
            .field("range", &self.range)
            .field("size", &self.size)
            .field("ticks_count", &self.ticks_count)
            .field("signals_blocked", &self.signals_blocked)
            .field("zoom_reset_range", &self.zoom_reset_range)
            .field("observers", &self.observers.len())
            .field("axes", &self.axes.len())
            .finish()
    }
}

impl fmt::Display for RangeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RangeDomain({}) {}x{}",
            self.range, self.size.width, self.size.height
        )
    }
}
