use egui::Color32;
use eframe_shapes::figure::{DEFAULT_COLOR, Ellipse, Line, Quadrilateral, Rectangle, Triangle};
use eframe_shapes::{Figure, Point};

fn committed<F: Figure>(mut figure: F, points: &[Point]) -> F {
    figure.set_points(points).expect("point count matches");
    figure
}

#[test]
fn required_clicks_per_kind() {
    assert_eq!(Line::new().required_clicks(), 2);
    assert_eq!(Rectangle::new().required_clicks(), 2);
    assert_eq!(Ellipse::new().required_clicks(), 2);
    assert_eq!(Triangle::new().required_clicks(), 3);
    assert_eq!(Quadrilateral::new().required_clicks(), 4);
}

#[test]
fn figures_enforce_their_point_contract() {
    let mut line = Line::new();
    let err = line
        .set_points(&[Point::new(0, 0)])
        .expect_err("one point is not a line");
    assert!(err.to_string().contains("2 points"));

    let mut quadrilateral = Quadrilateral::new();
    assert!(
        quadrilateral
            .set_points(&[Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)])
            .is_err()
    );
}

#[test]
fn blank_figures_hit_nothing() {
    assert!(!Line::new().contains(0, 0));
    assert!(!Rectangle::new().contains(0, 0));
    assert!(!Ellipse::new().contains(0, 0));
    assert!(!Triangle::new().contains(0, 0));
    assert!(Rectangle::new().handles().is_empty());
}

#[test]
fn line_hit_testing_follows_the_segment() {
    let line = committed(Line::new(), &[Point::new(0, 0), Point::new(100, 0)]);
    assert!(line.contains(50, 0));
    assert!(line.contains(50, 4), "within tolerance of the segment");
    assert!(!line.contains(50, 30));
    assert!(!line.contains(150, 0), "beyond the endpoint");
}

#[test]
fn rectangle_normalizes_any_corner_order() {
    // Clicked bottom-right first; the stored corners still normalize.
    let rectangle = committed(Rectangle::new(), &[Point::new(30, 40), Point::new(10, 20)]);
    assert!(rectangle.contains(20, 30));
    assert!(!rectangle.contains(5, 5));
    assert_eq!(
        rectangle.handles(),
        vec![
            Point::new(10, 20),
            Point::new(30, 20),
            Point::new(30, 40),
            Point::new(10, 40),
        ]
    );
}

#[test]
fn rectangle_corner_drag_moves_only_that_corner() {
    let mut rectangle = committed(Rectangle::new(), &[Point::new(10, 10), Point::new(30, 30)]);

    // Drag the bottom-right corner outward.
    rectangle.transform(5, 7, 2);
    assert_eq!(
        rectangle.handles(),
        vec![
            Point::new(10, 10),
            Point::new(35, 10),
            Point::new(35, 37),
            Point::new(10, 37),
        ]
    );

    // An unknown handle index changes nothing.
    let before = rectangle.handles();
    rectangle.transform(5, 5, 9);
    assert_eq!(rectangle.handles(), before);
}

#[test]
fn ellipse_containment_uses_the_inscribed_curve() {
    let ellipse = committed(Ellipse::new(), &[Point::new(0, 0), Point::new(20, 10)]);
    assert!(ellipse.contains(10, 5), "center");
    assert!(ellipse.contains(18, 5), "near the wide end");
    assert!(!ellipse.contains(0, 0), "bounding-box corner is outside");
    assert!(!ellipse.contains(19, 9));
}

#[test]
fn polygon_variants_contain_their_interior() {
    let triangle = committed(
        Triangle::new(),
        &[Point::new(0, 0), Point::new(40, 0), Point::new(0, 40)],
    );
    assert!(triangle.contains(10, 10));
    assert!(!triangle.contains(30, 30), "outside the hypotenuse");

    let quadrilateral = committed(
        Quadrilateral::new(),
        &[
            Point::new(0, 0),
            Point::new(40, 0),
            Point::new(40, 40),
            Point::new(0, 40),
        ],
    );
    assert!(quadrilateral.contains(20, 20));
    assert!(!quadrilateral.contains(50, 20));
}

#[test]
fn vertex_drag_moves_only_that_vertex() {
    let mut triangle = committed(
        Triangle::new(),
        &[Point::new(0, 0), Point::new(40, 0), Point::new(0, 40)],
    );
    triangle.transform(-3, 4, 1);
    assert_eq!(
        triangle.handles(),
        vec![Point::new(0, 0), Point::new(37, 4), Point::new(0, 40)]
    );
}

#[test]
fn selection_flag_round_trips() {
    let mut line = committed(Line::new(), &[Point::new(0, 0), Point::new(10, 0)]);
    assert!(!line.is_selected());
    line.select();
    assert!(line.is_selected());
    line.deselect();
    assert!(!line.is_selected());
}

#[test]
fn replication_yields_a_blank_sibling() {
    let mut original = committed(Line::new(), &[Point::new(0, 0), Point::new(10, 0)]);
    original.set_color(Color32::BLUE);

    let copy = original.replicate().expect("lines self-replicate");
    assert_eq!(copy.kind(), "line");
    assert_ne!(copy.id(), original.id(), "fresh identity");
    assert_eq!(copy.color(), DEFAULT_COLOR, "color is carried by the model");
    assert!(copy.handles().is_empty(), "no points yet");
}

#[test]
fn every_shipped_kind_self_replicates() {
    let figures: Vec<Box<dyn Figure>> = vec![
        Box::new(Line::new()),
        Box::new(Rectangle::new()),
        Box::new(Ellipse::new()),
        Box::new(Triangle::new()),
        Box::new(Quadrilateral::new()),
    ];
    for figure in &figures {
        let copy = figure.replicate().expect("shipped kinds replicate");
        assert_eq!(copy.kind(), figure.kind());
    }
}
