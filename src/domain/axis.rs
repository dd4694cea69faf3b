use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RangeDomain;

/// Which half of the domain an axis tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Axis collaborator linked to a domain.
///
/// The domain pushes its range for the axis' orientation through
/// `handle_range_changed`. Range edits originating on the axis travel the
/// other way through [`RangeDomain::handle_axis_range_changed`].
pub trait DomainAxis {
    fn orientation(&self) -> AxisOrientation;
    fn handle_range_changed(&mut self, min: f64, max: f64);
}

impl<T> DomainAxis for Rc<RefCell<T>>
where
    T: DomainAxis + ?Sized,
{
    fn orientation(&self) -> AxisOrientation {
        self.borrow().orientation()
    }

    fn handle_range_changed(&mut self, min: f64, max: f64) {
        self.borrow_mut().handle_range_changed(min, max);
    }
}

/// Handle returned by [`RangeDomain::attach_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxisId(u64);

pub(super) struct AttachedAxis {
    orientation: AxisOrientation,
    axis: Box<dyn DomainAxis>,
}

impl RangeDomain {
    /// Links an axis in both directions, keyed by its declared orientation.
    ///
    /// The orientation is read once here; later changes on the axis are not
    /// observed.
    pub fn attach_axis(&mut self, axis: impl DomainAxis + 'static) -> AxisId {
        let orientation = axis.orientation();
        let id = AxisId(self.next_handle());
        self.axes.insert(
            id,
            AttachedAxis {
                orientation,
                axis: Box::new(axis),
            },
        );
        debug!(?id, ?orientation, "attach axis");
        id
    }

    /// Unlinks an axis and hands it back, or `None` for an unknown id.
    pub fn detach_axis(&mut self, id: AxisId) -> Option<Box<dyn DomainAxis>> {
        let attached = self.axes.shift_remove(&id)?;
        debug!(?id, orientation = ?attached.orientation, "detach axis");
        Some(attached.axis)
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn axis_orientation(&self, id: AxisId) -> Option<AxisOrientation> {
        self.axes.get(&id).map(|attached| attached.orientation)
    }

    /// Applies a range edit reported by an attached axis.
    ///
    /// Returns `false` when `id` is not attached; the edit is then ignored.
    pub fn handle_axis_range_changed(&mut self, id: AxisId, min: f64, max: f64) -> bool {
        let Some(orientation) = self.axis_orientation(id) else {
            return false;
        };
        self.apply_axis_range(orientation, min, max);
        true
    }

    /// Sets the half of the domain that belongs to `orientation`.
    pub fn apply_axis_range(&mut self, orientation: AxisOrientation, min: f64, max: f64) {
        match orientation {
            AxisOrientation::Horizontal => self.set_range_x(min, max),
            AxisOrientation::Vertical => self.set_range_y(min, max),
        }
    }

    pub(super) fn forward_to_axes(&mut self, orientation: AxisOrientation, min: f64, max: f64) {
        for attached in self.axes.values_mut() {
            if attached.orientation == orientation {
                attached.axis.handle_range_changed(min, max);
            }
        }
    }
}
