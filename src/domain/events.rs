use serde::{Deserialize, Serialize};

use crate::core::PlotSize;

use super::RangeDomain;

/// Notification emitted by a [`RangeDomain`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DomainEvent {
    HorizontalRangeChanged { min: f64, max: f64 },
    VerticalRangeChanged { min: f64, max: f64 },
    Resized { size: PlotSize },
}

/// Receiver for domain notifications.
///
/// Closures taking a [`DomainEvent`] implement this trait directly.
pub trait DomainObserver {
    fn on_event(&mut self, event: DomainEvent);
}

impl<F> DomainObserver for F
where
    F: FnMut(DomainEvent),
{
    fn on_event(&mut self, event: DomainEvent) {
        self(event);
    }
}

/// Handle returned by [`RangeDomain::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl RangeDomain {
    /// Registers an observer; events are delivered in subscription order.
    pub fn subscribe(&mut self, observer: impl DomainObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_handle());
        self.observers.insert(id, Box::new(observer));
        id
    }

    /// Removes an observer. Returns `true` when it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(super) fn emit_horizontal_range(&mut self) {
        let (min, max) = self.range.x_bounds();
        self.forward_to_axes(super::AxisOrientation::Horizontal, min, max);
        self.emit(DomainEvent::HorizontalRangeChanged { min, max });
    }

    pub(super) fn emit_vertical_range(&mut self) {
        let (min, max) = self.range.y_bounds();
        self.forward_to_axes(super::AxisOrientation::Vertical, min, max);
        self.emit(DomainEvent::VerticalRangeChanged { min, max });
    }

    pub(super) fn emit_resized(&mut self) {
        let size = self.size;
        self.emit(DomainEvent::Resized { size });
    }

    fn emit(&mut self, event: DomainEvent) {
        for observer in self.observers.values_mut() {
            observer.on_event(event);
        }
    }
}
