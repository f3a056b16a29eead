use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chart_brush::api::{BrushConfig, BrushController};
use chart_brush::core::{BrushGeometry, BrushWindow, DomainValue};
use chart_brush::extensions::{BrushContext, BrushDragKind, BrushEvent, BrushListener};
use chart_brush::interaction::{
    BrushInteractionMode, GlobalPointerListeners, TouchInput, TravellerId, TravellerPositions,
};

struct Recorder {
    events: Rc<RefCell<Vec<BrushEvent>>>,
}

impl BrushListener for Recorder {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: BrushEvent, _context: BrushContext) {
        self.events.borrow_mut().push(event);
    }
}

#[derive(Default)]
struct CountingHost {
    attached: Cell<usize>,
    detached: Cell<usize>,
}

impl GlobalPointerListeners for CountingHost {
    fn attach(&self) {
        self.attached.set(self.attached.get() + 1);
    }

    fn detach(&self) {
        self.detached.set(self.detached.get() + 1);
    }
}

struct Harness {
    brush: BrushController,
    events: Rc<RefCell<Vec<BrushEvent>>>,
    host: Rc<CountingHost>,
}

impl Harness {
    /// Eleven records on a 0..=100 px track, one every 10 px.
    fn new(config: BrushConfig) -> Self {
        let host = Rc::new(CountingHost::default());
        let geometry = BrushGeometry::new(0.0, 0.0, 105.0, 40.0).with_traveller_width(5.0);
        let mut brush = BrushController::new(geometry, config)
            .expect("brush init")
            .with_pointer_listeners(host.clone());
        brush.set_data((0..=10).map(|value| DomainValue::number(f64::from(value))).collect());

        let events = Rc::new(RefCell::new(Vec::new()));
        brush
            .register_listener(Box::new(Recorder {
                events: events.clone(),
            }))
            .expect("register recorder");
        Self {
            brush,
            events,
            host,
        }
    }

    fn changes(&self) -> Vec<BrushWindow> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BrushEvent::Changed(window) => Some(*window),
                _ => None,
            })
            .collect()
    }

    fn drag_ends(&self) -> Vec<BrushWindow> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BrushEvent::DragEnded(window) => Some(*window),
                _ => None,
            })
            .collect()
    }
}

#[test]
fn start_handle_crossing_one_gap_boundary_fires_one_change_and_one_drag_end() {
    let mut harness = Harness::new(BrushConfig::default().with_gap(2));
    assert_eq!(harness.brush.window(), Some(BrushWindow::new(0, 10)));

    assert!(harness.brush.traveller_pointer_down(TravellerId::Start, 200.0));
    assert!(!harness.brush.pointer_move(205.0));
    assert!(!harness.brush.pointer_move(215.0));
    assert!(harness.brush.pointer_move(222.0));
    assert!(!harness.brush.pointer_move(228.0));
    assert!(harness.brush.pointer_up());

    assert_eq!(harness.changes(), vec![BrushWindow::new(2, 10)]);
    assert_eq!(harness.drag_ends(), vec![BrushWindow::new(2, 10)]);
    assert_eq!(
        harness.brush.traveller_positions(),
        Some(TravellerPositions {
            start_x: 28.0,
            end_x: 100.0
        })
    );
    assert_eq!(harness.brush.mode(), BrushInteractionMode::Idle);
}

#[test]
fn drag_session_event_order() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.traveller_pointer_down(TravellerId::End, 100.0);
    harness.brush.pointer_move(80.0);
    harness.brush.pointer_up();

    assert_eq!(
        *harness.events.borrow(),
        vec![
            BrushEvent::DragStarted(BrushDragKind::Traveller(TravellerId::End)),
            BrushEvent::TextVisibilityChanged { visible: true },
            BrushEvent::Changed(BrushWindow::new(0, 8)),
            BrushEvent::DragEnded(BrushWindow::new(0, 8)),
            BrushEvent::TextVisibilityChanged { visible: false },
        ]
    );
}

#[test]
fn traveller_is_clamped_to_the_track() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.traveller_pointer_down(TravellerId::Start, 50.0);
    harness.brush.pointer_move(-500.0);
    assert_eq!(harness.brush.traveller_positions().map(|p| p.start_x), Some(0.0));
    harness.brush.pointer_up();

    harness.brush.traveller_pointer_down(TravellerId::End, 0.0);
    harness.brush.pointer_move(900.0);
    assert_eq!(harness.brush.traveller_positions().map(|p| p.end_x), Some(100.0));
    assert!(harness.changes().is_empty());
}

#[test]
fn slide_emits_whenever_the_window_moves() {
    let mut harness = Harness::new(BrushConfig::default().with_gap(3));
    assert!(harness.brush.set_controlled_window(BrushWindow::new(2, 5)));
    assert_eq!(
        harness.brush.traveller_positions(),
        Some(TravellerPositions {
            start_x: 20.0,
            end_x: 50.0
        })
    );

    assert!(harness.brush.slide_pointer_down(0.0));
    assert!(harness.brush.pointer_move(10.0));
    assert!(!harness.brush.pointer_move(13.0));
    assert!(harness.brush.pointer_move(1_000.0));
    harness.brush.pointer_up();

    assert_eq!(
        harness.changes(),
        vec![BrushWindow::new(3, 6), BrushWindow::new(6, 10)]
    );
    assert_eq!(
        harness.brush.traveller_positions(),
        Some(TravellerPositions {
            start_x: 70.0,
            end_x: 100.0
        })
    );
}

#[test]
fn dragging_a_handle_past_the_other_reverses_the_window() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.set_controlled_window(BrushWindow::new(2, 5));

    harness.brush.traveller_pointer_down(TravellerId::Start, 0.0);
    assert!(harness.brush.pointer_move(50.0));
    harness.brush.pointer_up();

    let positions = harness.brush.traveller_positions().expect("travellers");
    assert_eq!((positions.start_x, positions.end_x), (70.0, 50.0));
    assert_eq!(harness.changes(), vec![BrushWindow::new(5, 7)]);

    let extent = harness.brush.slide_extent().expect("slide");
    assert_eq!((extent.x, extent.width), (55.0, 15.0));
}

#[test]
fn leave_timeout_ends_the_drag_unless_movement_resumes() {
    let mut harness = Harness::new(BrushConfig::default().with_leave_timeout_ms(500));
    harness.brush.traveller_pointer_down(TravellerId::End, 100.0);

    harness.brush.pointer_leave(1_000);
    assert_eq!(harness.brush.leave_deadline_ms(), Some(1_500));
    harness.brush.pointer_move(90.0);
    assert_eq!(harness.brush.leave_deadline_ms(), None);
    assert!(!harness.brush.advance_clock(1_600));
    assert!(harness.brush.is_dragging());

    harness.brush.pointer_leave(2_000);
    assert!(!harness.brush.advance_clock(2_499));
    assert!(harness.brush.advance_clock(2_500));
    assert!(!harness.brush.is_dragging());
    assert_eq!(harness.drag_ends(), vec![BrushWindow::new(0, 9)]);
    assert_eq!(harness.host.detached.get(), 1);
}

#[test]
fn pointer_enter_cancels_pending_timeout() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.slide_pointer_down(50.0);
    harness.brush.pointer_leave(0);
    harness.brush.pointer_enter();
    assert!(!harness.brush.advance_clock(10_000));
    assert!(harness.brush.is_dragging());
}

#[test]
fn leaving_while_idle_arms_nothing() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.pointer_leave(0);
    assert_eq!(harness.brush.leave_deadline_ms(), None);
}

#[test]
fn global_listeners_are_scoped_to_the_drag_session() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.traveller_pointer_down(TravellerId::Start, 0.0);
    assert_eq!(harness.host.attached.get(), 1);
    assert!(!harness.brush.slide_pointer_down(10.0));
    assert_eq!(harness.host.attached.get(), 1);
    harness.brush.pointer_up();
    assert_eq!(harness.host.detached.get(), 1);
    assert!(!harness.brush.pointer_up());
    assert_eq!(harness.host.detached.get(), 1);
}

#[test]
fn unmount_mid_drag_detaches_and_silences_everything() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.slide_pointer_down(10.0);
    harness.brush.pointer_leave(0);
    harness.brush.unmount();

    assert_eq!(harness.host.detached.get(), 1);
    assert!(!harness.brush.is_mounted());
    assert!(!harness.brush.advance_clock(60_000));
    assert!(!harness.brush.traveller_pointer_down(TravellerId::Start, 0.0));
    assert!(harness.drag_ends().is_empty());
}

#[test]
fn dropping_the_controller_mid_drag_detaches() {
    let harness = Harness::new(BrushConfig::default());
    let host = harness.host.clone();
    let mut brush = harness.brush;
    brush.slide_pointer_down(10.0);
    drop(brush);
    assert_eq!(host.attached.get(), 1);
    assert_eq!(host.detached.get(), 1);
}

#[test]
fn controlled_window_is_deferred_until_drag_ends() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.traveller_pointer_down(TravellerId::End, 100.0);
    harness.brush.pointer_move(90.0);

    assert!(!harness.brush.set_controlled_window(BrushWindow::new(1, 4)));
    assert_eq!(harness.brush.pending_controlled_window(), Some(BrushWindow::new(1, 4)));
    assert_eq!(harness.brush.window(), Some(BrushWindow::new(0, 9)));

    harness.brush.pointer_move(80.0);
    assert_eq!(harness.brush.traveller_positions().map(|p| p.end_x), Some(80.0));

    harness.brush.pointer_up();
    assert_eq!(harness.brush.window(), Some(BrushWindow::new(1, 4)));
    assert_eq!(harness.drag_ends(), vec![BrushWindow::new(1, 4)]);
    assert_eq!(
        harness.brush.traveller_positions(),
        Some(TravellerPositions {
            start_x: 10.0,
            end_x: 40.0
        })
    );
    assert_eq!(harness.brush.pending_controlled_window(), None);
}

#[test]
fn controlled_window_applies_silently_and_ignores_repeats() {
    let mut harness = Harness::new(BrushConfig::default());
    assert!(harness.brush.set_controlled_window(BrushWindow::new(3, 20)));
    assert_eq!(harness.brush.window(), Some(BrushWindow::new(3, 10)));
    assert!(!harness.brush.set_controlled_window(BrushWindow::new(3, 10)));
    assert!(harness.changes().is_empty());
}

#[test]
fn data_change_mid_drag_cancels_without_drag_end() {
    let mut harness = Harness::new(BrushConfig::default());
    harness.brush.traveller_pointer_down(TravellerId::Start, 0.0);
    harness
        .brush
        .set_data((0..4).map(|value| DomainValue::number(f64::from(value))).collect());

    assert!(!harness.brush.is_dragging());
    assert_eq!(harness.host.detached.get(), 1);
    assert!(harness.drag_ends().is_empty());
    assert_eq!(harness.brush.window(), Some(BrushWindow::new(0, 3)));
    assert_eq!(
        harness.brush.coordinate_table().map(|table| table.as_slice().to_vec()),
        Some(vec![0.0, 100.0 / 3.0, 200.0 / 3.0, 100.0])
    );
}

#[test]
fn degenerate_inputs_reject_drag_starts() {
    let geometry = BrushGeometry::new(0.0, 0.0, 4.0, 40.0).with_traveller_width(5.0);
    let mut brush = BrushController::new(geometry, BrushConfig::default()).expect("brush init");
    assert!(!brush.slide_pointer_down(0.0));

    brush.set_data(vec![DomainValue::number(1.0), DomainValue::number(2.0)]);
    assert_eq!(brush.window(), Some(BrushWindow::new(0, 1)));
    assert!(brush.traveller_positions().is_none());
    assert!(!brush.traveller_pointer_down(TravellerId::End, 0.0));

    brush.set_geometry(BrushGeometry::new(0.0, 0.0, 105.0, 40.0));
    assert!(brush.traveller_pointer_down(TravellerId::End, 0.0));

    let mut empty =
        BrushController::new(BrushGeometry::new(0.0, 0.0, 105.0, 40.0), BrushConfig::default())
            .expect("brush init");
    assert!(empty.window().is_none());
    assert!(!empty.slide_pointer_down(0.0));
    assert!(!empty.pointer_move(10.0));
}

#[test]
fn touch_input_uses_the_first_changed_touch() {
    let mut harness = Harness::new(BrushConfig::default());
    assert!(!harness.brush.slide_touch_start(&TouchInput::default()));
    assert!(harness.brush.traveller_touch_start(TravellerId::End, &TouchInput::single(100.0)));
    assert!(harness.brush.touch_move(&TouchInput::single(70.0)));
    assert!(!harness.brush.touch_move(&TouchInput::default()));
    assert!(harness.brush.touch_end());
    assert_eq!(harness.drag_ends(), vec![BrushWindow::new(0, 7)]);
}

#[test]
fn non_finite_pointer_input_is_ignored() {
    let mut harness = Harness::new(BrushConfig::default());
    assert!(!harness.brush.slide_pointer_down(f64::NAN));
    harness.brush.slide_pointer_down(0.0);
    assert!(!harness.brush.pointer_move(f64::INFINITY));
    assert_eq!(
        harness.brush.traveller_positions(),
        Some(TravellerPositions {
            start_x: 0.0,
            end_x: 100.0
        })
    );
}
