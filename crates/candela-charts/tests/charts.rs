//! End-to-end exercises: data in, gestures and frames out.

use candela_charts::{
    AreaChart, BarChart, BarDatum, Category, CategoryChart, CategoryHit, ChartGesture,
    ChartGestureRecognizer, Color, DataPoint, ExplorerConfig, Paint, Point, PointerEvent,
    PointerPhase, RadialChart, RadialSegment, SelectionStyle, ShapeGeometry, StackSegment,
};

fn series() -> Vec<DataPoint> {
    (0..12)
        .map(|i| DataPoint::new(f64::from(i), f64::from((i * 7) % 40 + 5)))
        .collect()
}

#[test]
fn bar_chart_tap_selects_and_restyles() {
    let data = vec![
        BarDatum::new(12.0, Color::rgb(0.5, 0.8, 0.3)),
        BarDatum::new(30.0, Color::rgb(0.5, 0.8, 0.3)),
        BarDatum::new(22.0, Color::rgb(0.5, 0.8, 0.3)),
    ];
    let chart = BarChart::new(data.clone())
        .unwrap()
        .selection(SelectionStyle::default().scale(1.2))
        .select(None);

    // A tap lands in the middle column.
    let mut recognizer = ChartGestureRecognizer::new();
    recognizer.process(&PointerEvent::new(PointerPhase::Down, 160.0, 100.0, 0.0));
    let gesture = recognizer
        .process(&PointerEvent::new(PointerPhase::Up, 160.0, 100.0, 90.0))
        .expect("gesture resolves");
    let ChartGesture::Tap { x, y } = gesture else {
        panic!("expected a tap, got {gesture:?}");
    };

    let index = chart.hit_test(Point::new(x, y)).expect("tap hits a column");

    // The host re-renders with the selection animating in.
    let selected = BarChart::new(data)
        .unwrap()
        .selection(SelectionStyle::default().scale(1.2))
        .select(Some(index));
    let before = selected.render(1.0, 0.0);
    let after = selected.render(1.0, 1.0);
    assert_eq!(before.len(), after.len());
    assert_ne!(before, after);
}

#[test]
fn category_chart_resolves_grouped_and_stacked_hits() {
    let chart = CategoryChart::new(vec![
        Category::grouped(
            "Q1",
            vec![
                BarDatum::new(40.0, Color::rgb(0.2, 0.6, 0.9)),
                BarDatum::new(80.0, Color::rgb(0.9, 0.5, 0.1)),
            ],
        ),
        Category::stacked(
            "Q2",
            vec![
                StackSegment::new(35.0, Color::rgb(0.2, 0.6, 0.9)),
                StackSegment::new(45.0, Color::rgb(0.9, 0.5, 0.1)),
            ],
        ),
    ])
    .unwrap()
    .value_axis(false);

    let frame = chart.frame();
    let baseline = frame.baseline_y();

    // Second category, just above the baseline: bottom stack segment.
    let layout_offset = (frame.content_width() - 16.0) / 2.0 + 16.0;
    let stack_x = frame.insets.left + layout_offset + 10.0;
    assert_eq!(
        chart.hit_test(Point::new(stack_x, baseline - 3.0)),
        Some(CategoryHit {
            category: 1,
            bar: None,
            segment: Some(0)
        })
    );

    // First category, first bar.
    let bar_x = frame.insets.left + 5.0;
    assert_eq!(
        chart.hit_test(Point::new(bar_x, baseline - 3.0)),
        Some(CategoryHit {
            category: 0,
            bar: Some(0),
            segment: None
        })
    );

    // Entrance animation sweeps from empty to complete.
    assert!(chart.render(0.0, 0.0).is_empty());
    let full = chart.render(1.0, 0.0);
    let fills = full
        .shapes()
        .iter()
        .filter(|s| matches!(s.paint, Paint::Fill { .. }))
        .count();
    assert_eq!(fills, 4);
}

#[test]
fn area_chart_scrub_flow() {
    let chart = AreaChart::new(series())
        .unwrap()
        .show_points(true)
        .explorer(ExplorerConfig::default());

    // Pan from the left third to the right third of the chart.
    let mut recognizer = ChartGestureRecognizer::new();
    recognizer.process(&PointerEvent::new(PointerPhase::Down, 100.0, 80.0, 0.0));
    let began = recognizer.process(&PointerEvent::new(PointerPhase::Move, 110.0, 80.0, 16.0));
    assert!(matches!(began, Some(ChartGesture::ScrubBegin { .. })));
    let moved = recognizer.process(&PointerEvent::new(PointerPhase::Move, 200.0, 80.0, 32.0));
    let Some(ChartGesture::ScrubMove { x, .. }) = moved else {
        panic!("expected scrub move");
    };

    let index = chart.explorer_index(x).expect("scrub resolves an index");
    assert!(index < chart.data().len());

    let scene = chart.render_with_explorer(1.0, x);
    // Active + inactive fills and strokes, point markers, indicator.
    let circles = scene
        .shapes()
        .iter()
        .filter(|s| matches!(s.geometry, ShapeGeometry::Circle { .. }))
        .count();
    assert_eq!(circles, chart.data().len() + 1);

    let ended = recognizer.process(&PointerEvent::new(PointerPhase::Up, 200.0, 80.0, 48.0));
    assert_eq!(ended, Some(ChartGesture::ScrubEnd));
}

#[test]
fn radial_chart_tap_and_reveal() {
    let chart = RadialChart::donut(vec![
        RadialSegment::new(25.0, Color::rgb(0.9, 0.3, 0.2)),
        RadialSegment::new(25.0, Color::rgb(0.2, 0.7, 0.3)),
        RadialSegment::new(50.0, Color::rgb(0.2, 0.4, 0.9)),
    ])
    .unwrap();

    // Probe each quadrant of the ring through the public hit test.
    let center = chart.center();
    let r = chart.radius();
    let probe = |deg: f32| {
        Point::new(
            center.x + r * deg.to_radians().cos(),
            center.y + r * deg.to_radians().sin(),
        )
    };
    // Segments start at -90°: [-90, 0), [0, 90), [90, 270).
    assert_eq!(chart.hit_test(probe(-45.0)), Some(0));
    assert_eq!(chart.hit_test(probe(45.0)), Some(1));
    assert_eq!(chart.hit_test(probe(180.0)), Some(2));

    // Sequential reveal: halfway in, the last segment has not started.
    let partial = chart
        .easing(candela_charts::Easing::Linear)
        .render(0.4, 0.0);
    let fills = partial
        .shapes()
        .iter()
        .filter(|s| matches!(s.paint, Paint::Fill { .. }))
        .count();
    assert_eq!(fills, 2);
}

#[test]
fn scenes_serialize_for_remote_rendering() {
    let chart = BarChart::new(vec![BarDatum::new(5.0, Color::rgb(0.1, 0.2, 0.9))]).unwrap();
    let scene = chart.render(1.0, 0.0);
    let json = serde_json::to_string(&scene).unwrap();
    let back: candela_charts::Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}
