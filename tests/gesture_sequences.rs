use plot_gestures::{
    GestureConfig, GestureDispatcher, GestureEvent, PanZoomRecognizer, Range, RecognizerState,
    ScreenPoint, ScreenRect, ScreenVector, Touch, TouchEventArgs, TouchHandler, Viewport,
    ViewportManipulator,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pt(x: f64, y: f64) -> ScreenPoint {
    ScreenPoint::new(x, y)
}

#[test]
fn full_release_emits_one_completion() {
    init_tracing();
    let mut recognizer = PanZoomRecognizer::new();
    let mut events = Vec::new();

    events.extend(recognizer.touches_began(&[
        Touch::began(1, pt(0.0, 0.0)),
        Touch::began(2, pt(100.0, 0.0)),
    ]));
    events.extend(recognizer.touches_moved(&Touch::moved(1, pt(0.0, 0.0), pt(10.0, 0.0))));
    events.extend(recognizer.touches_ended(&[
        Touch::ended(1, pt(10.0, 0.0)),
        Touch::ended(2, pt(100.0, 0.0)),
    ]));

    let completions: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, GestureEvent::Completed(_)))
        .collect();
    assert_eq!(
        completions,
        vec![&GestureEvent::Completed(TouchEventArgs::at(pt(10.0, 0.0)))]
    );
    assert!(completions[0].args().is_identity());
    assert_eq!(recognizer.active_touch_count(), 0);
    assert_eq!(recognizer.state(), RecognizerState::Ended);
}

#[test]
fn staggered_release_completes_on_last_finger() {
    let mut recognizer = PanZoomRecognizer::new();
    recognizer.touches_began(&[
        Touch::began(1, pt(0.0, 0.0)),
        Touch::began(2, pt(100.0, 0.0)),
    ]);

    assert_eq!(recognizer.touches_ended(&Touch::ended(2, pt(100.0, 0.0))), None);
    let delta = recognizer.touches_moved(&Touch::moved(1, pt(0.0, 0.0), pt(0.0, 8.0)));
    assert_eq!(
        delta,
        Some(GestureEvent::Delta(TouchEventArgs::with_deltas(
            pt(0.0, 8.0),
            ScreenVector::new(0.0, 8.0),
            ScreenVector::ONE,
        )))
    );
    assert_eq!(
        recognizer.touches_ended(&Touch::ended(1, pt(0.0, 8.0))),
        Some(GestureEvent::Completed(TouchEventArgs::at(pt(0.0, 8.0))))
    );
}

#[test]
fn reacquisition_starts_clean() {
    let mut recognizer = PanZoomRecognizer::new();
    recognizer.touches_began(&Touch::began(1, pt(0.0, 0.0)));
    recognizer.touches_moved(&Touch::moved(1, pt(0.0, 0.0), pt(40.0, 40.0)));
    recognizer.touches_ended(&Touch::ended(1, pt(40.0, 40.0)));

    let event = recognizer.touches_began(&Touch::began(5, pt(7.0, 9.0)));
    assert_eq!(
        event,
        Some(GestureEvent::Started(TouchEventArgs::at(pt(7.0, 9.0))))
    );
    assert_eq!(recognizer.state(), RecognizerState::Began);
    assert_eq!(recognizer.active_touch_count(), 1);
}

#[test]
fn single_touch_never_scales() {
    let mut recognizer = PanZoomRecognizer::with_config(
        GestureConfig::default()
            .with_zoom_threshold(0.0)
            .with_allow_pinch_past_zero(false),
    )
    .expect("valid config");
    recognizer.touches_began(&Touch::began(1, pt(0.0, 0.0)));

    let mut previous = pt(0.0, 0.0);
    for step in 1..20 {
        let next = pt(step as f64 * 3.0, (step as f64).sin() * 50.0);
        let event = recognizer.touches_moved(&Touch::moved(1, previous, next));
        let Some(GestureEvent::Delta(args)) = event else {
            panic!("expected delta, got {event:?}");
        };
        assert_eq!(args.delta_scale, ScreenVector::ONE);
        previous = next;
    }
}

#[test]
fn aspect_locked_pinch_scales_axes_equally() {
    let mut recognizer =
        PanZoomRecognizer::with_config(GestureConfig::plot_view()).expect("valid config");
    recognizer.touches_began(&[
        Touch::began(1, pt(100.0, 100.0)),
        Touch::began(2, pt(200.0, 160.0)),
    ]);

    let mut first = pt(100.0, 100.0);
    let mut second = pt(200.0, 160.0);
    for step in 1..10 {
        let offset = step as f64;
        let next_first = pt(first.x - offset, first.y + offset * 0.5);
        let next_second = pt(second.x + offset * 2.0, second.y - offset);
        let event = recognizer.touches_moved(&[
            Touch::moved(1, first, next_first),
            Touch::moved(2, second, next_second),
        ]);
        let Some(GestureEvent::Delta(args)) = event else {
            panic!("expected delta, got {event:?}");
        };
        assert_eq!(args.delta_scale.x, args.delta_scale.y);
        assert!(args.delta_scale.x > 0.0);
        first = next_first;
        second = next_second;
    }
}

#[test]
fn cancelled_two_finger_gesture() {
    let mut recognizer = PanZoomRecognizer::new();
    recognizer.touches_began(&Touch::began(1, pt(0.0, 0.0)));
    recognizer.touches_began(&Touch::began(2, pt(50.0, 50.0)));
    let event = recognizer.touches_cancelled(&[
        Touch::cancelled(1, pt(1.0, 1.0)),
        Touch::cancelled(2, pt(50.0, 50.0)),
    ]);
    assert_eq!(
        event,
        Some(GestureEvent::Completed(TouchEventArgs::at(pt(1.0, 1.0))))
    );
    assert_eq!(recognizer.state(), RecognizerState::Cancelled);
}

#[test]
fn dispatcher_drives_viewport() {
    init_tracing();
    let manipulator = ViewportManipulator::new(
        Viewport::new(Range::new(0.0, 100.0), Range::new(0.0, 100.0)),
        ScreenRect::new(pt(0.0, 0.0), pt(200.0, 200.0)),
    );
    let mut dispatcher = GestureDispatcher::new(manipulator);

    assert!(dispatcher.touches_began(&[
        Touch::began(1, pt(50.0, 100.0)),
        Touch::began(2, pt(150.0, 100.0)),
    ]));
    assert!(dispatcher.touches_moved(&[
        Touch::moved(1, pt(50.0, 100.0), pt(0.0, 100.0)),
        Touch::moved(2, pt(150.0, 100.0), pt(200.0, 100.0)),
    ]));
    let viewport = dispatcher.controller().viewport();
    assert!(viewport.x.span() < 100.0);
    assert!((viewport.x.span() - viewport.y.span()).abs() < 1e-9);

    assert!(dispatcher.touches_ended(&[
        Touch::ended(1, pt(0.0, 100.0)),
        Touch::ended(2, pt(200.0, 100.0)),
    ]));
    assert!(!dispatcher.controller().is_active());
}
