pub mod fuzzy;
pub mod nice;
pub mod range;
pub mod types;

pub use fuzzy::{fuzzy_compare, fuzzy_is_null};
pub use nice::{
    MAX_TICKS_COUNT, NiceTicks, adjust_log_domain_ranges, loose_nice_numbers, nice_number,
    try_loose_nice_numbers,
};
pub use range::DomainRange;
pub use types::{DataPoint, PixelPoint, PlotRect, PlotSize};
