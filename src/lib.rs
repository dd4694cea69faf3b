//! chart-domain: data/pixel range domain for 2-D charts.
//!
//! The crate owns the coordinate bookkeeping a chart widget needs between
//! its axes and its plot area: linear data/pixel mapping, nice tick ranges
//! and zoom reset. Rendering and input handling stay with the host.

pub mod core;
pub mod domain;
pub mod error;
pub mod telemetry;

pub use domain::{
    AxisId, AxisOrientation, DomainAxis, DomainEvent, RangeDomain, RangeDomainConfig,
};
pub use error::{ChartError, ChartResult};
