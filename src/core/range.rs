use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::fuzzy::fuzzy_is_null;
use crate::error::{ChartError, ChartResult};

/// Data-space rectangle spanned by the X and Y bounds.
///
/// Equality is tolerance based; see the `PartialEq` impl.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DomainRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DomainRange {
    /// Creates a range after checking that every bound is finite and ordered.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> ChartResult<Self> {
        let range = Self::from_bounds(min_x, max_x, min_y, max_y);
        range.validate()?;
        Ok(range)
    }

    /// Creates a range without validation.
    #[must_use]
    pub const fn from_bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_x.is_finite()
            || !self.max_x.is_finite()
            || !self.min_y.is_finite()
            || !self.max_y.is_finite()
        {
            return Err(ChartError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if self.max_x < self.min_x || self.max_y < self.min_y {
            return Err(ChartError::InvalidData(format!(
                "domain bounds must satisfy min <= max (x: {}..{}, y: {}..{})",
                self.min_x, self.max_x, self.min_y, self.max_y
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn span_x(self) -> f64 {
        debug_assert!(self.max_x >= self.min_x, "max_x must not be below min_x");
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn span_y(self) -> f64 {
        debug_assert!(self.max_y >= self.min_y, "max_y must not be below min_y");
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn x_bounds(self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    #[must_use]
    pub fn y_bounds(self) -> (f64, f64) {
        (self.min_y, self.max_y)
    }

    #[must_use]
    pub fn with_x(self, min_x: f64, max_x: f64) -> Self {
        Self {
            min_x,
            max_x,
            ..self
        }
    }

    #[must_use]
    pub fn with_y(self, min_y: f64, max_y: f64) -> Self {
        Self {
            min_y,
            max_y,
            ..self
        }
    }
}

impl PartialEq for DomainRange {
    /// Bounds match pairwise within an absolute tolerance of `1e-12`.
    fn eq(&self, other: &Self) -> bool {
        fuzzy_is_null(self.max_x - other.max_x)
            && fuzzy_is_null(self.max_y - other.max_y)
            && fuzzy_is_null(self.min_x - other.min_x)
            && fuzzy_is_null(self.min_y - other.min_y)
    }
}

impl fmt::Display for DomainRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
