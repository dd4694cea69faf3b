use std::cell::RefCell;
use std::rc::Rc;

use chart_domain::core::{DomainRange, PlotRect, PlotSize};
use chart_domain::{DomainEvent, RangeDomain};

fn plot_domain() -> RangeDomain {
    let mut domain = RangeDomain::new();
    domain.set_size(PlotSize::new(100.0, 100.0));
    domain.set_range(0.0, 100.0, 0.0, 100.0);
    domain
}

#[test]
fn store_zoom_reset_keeps_first_snapshot() {
    let mut domain = plot_domain();

    domain.store_zoom_reset();
    assert!(domain.is_zoomed());
    domain.set_range(10.0, 20.0, 10.0, 20.0);
    domain.store_zoom_reset();
    domain.set_range(12.0, 14.0, 12.0, 14.0);

    domain.zoom_reset();
    assert!(!domain.is_zoomed());
    assert_eq!(
        domain.range(),
        DomainRange::from_bounds(0.0, 100.0, 0.0, 100.0)
    );

    domain.set_range(1.0, 2.0, 1.0, 2.0);
    domain.zoom_reset();
    assert_eq!(domain.range(), DomainRange::from_bounds(1.0, 2.0, 1.0, 2.0));
}

#[test]
fn zoom_reset_without_snapshot_is_noop() {
    let mut domain = plot_domain();
    let events = Rc::new(RefCell::new(Vec::<DomainEvent>::new()));
    let sink = events.clone();
    domain.subscribe(move |event: DomainEvent| sink.borrow_mut().push(event));

    domain.zoom_reset();
    assert!(events.borrow().is_empty());
    assert_eq!(
        domain.range(),
        DomainRange::from_bounds(0.0, 100.0, 0.0, 100.0)
    );
}

#[test]
fn zoom_reset_notifies_through_set_range() {
    let mut domain = plot_domain();
    domain.store_zoom_reset();
    domain.set_range_y(40.0, 60.0);

    let events = Rc::new(RefCell::new(Vec::<DomainEvent>::new()));
    let sink = events.clone();
    domain.subscribe(move |event: DomainEvent| sink.borrow_mut().push(event));

    domain.zoom_reset();
    assert_eq!(
        events.borrow().as_slice(),
        &[DomainEvent::VerticalRangeChanged {
            min: 0.0,
            max: 100.0
        }]
    );
}

#[test]
fn zoom_in_selects_pixel_rect() {
    let mut domain = plot_domain();

    domain.zoom_in(PlotRect::new(25.0, 10.0, 50.0, 20.0));

    assert!(domain.is_zoomed());
    assert_eq!(domain.range().x_bounds(), (25.0, 75.0));
    assert_eq!(domain.range().y_bounds(), (70.0, 90.0));

    domain.zoom_reset();
    assert_eq!(domain.range().x_bounds(), (0.0, 100.0));
    assert_eq!(domain.range().y_bounds(), (0.0, 100.0));
}

#[test]
fn zoom_out_fits_current_view_into_rect() {
    let mut domain = plot_domain();

    domain.zoom_out(PlotRect::new(25.0, 25.0, 50.0, 50.0));

    assert!(domain.is_zoomed());
    assert_eq!(domain.range().x_bounds(), (-50.0, 150.0));
    assert_eq!(domain.range().y_bounds(), (-50.0, 150.0));
}

#[test]
fn zoom_in_then_out_with_same_rect_restores_range() {
    let mut domain = plot_domain();
    let rect = PlotRect::new(20.0, 40.0, 50.0, 25.0);

    domain.zoom_in(rect);
    domain.zoom_out(rect);

    assert_eq!(
        domain.range(),
        DomainRange::from_bounds(0.0, 100.0, 0.0, 100.0)
    );
}

#[test]
fn zoom_is_ignored_on_empty_domain() {
    let mut domain = RangeDomain::new();
    domain.set_range(0.0, 1.0, 0.0, 1.0);

    domain.zoom_in(PlotRect::new(0.0, 0.0, 1.0, 1.0));
    domain.zoom_out(PlotRect::new(0.0, 0.0, 1.0, 1.0));
    domain.move_by(5.0, 5.0);

    assert!(!domain.is_zoomed());
    assert_eq!(domain.range(), DomainRange::from_bounds(0.0, 1.0, 0.0, 1.0));
}

#[test]
fn move_by_pans_in_data_units() {
    let mut domain = RangeDomain::new();
    domain.set_size(PlotSize::new(200.0, 50.0));
    domain.set_range(0.0, 100.0, 0.0, 10.0);

    domain.move_by(20.0, 5.0);
    assert_eq!(domain.range().x_bounds(), (10.0, 110.0));
    assert_eq!(domain.range().y_bounds(), (1.0, 11.0));

    domain.move_by(0.0, -5.0);
    assert_eq!(domain.range().x_bounds(), (10.0, 110.0));
    assert_eq!(domain.range().y_bounds(), (0.0, 10.0));
    assert!(!domain.is_zoomed());
}
