use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use egui::Color32;
use eframe_shapes::figure::Rectangle;
use eframe_shapes::{DrawingModel, Figure, ModelObserver, Point, Stroke};

struct CountingObserver(Arc<AtomicUsize>);

impl ModelObserver for CountingObserver {
    fn model_changed(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn observed_model() -> (DrawingModel, Arc<AtomicUsize>) {
    let model = DrawingModel::new();
    let notifications = Arc::new(AtomicUsize::new(0));
    model.subscribe(Box::new(CountingObserver(notifications.clone())));
    (model, notifications)
}

fn committed_rectangle(color: Color32) -> Box<dyn Figure> {
    let mut rectangle = Rectangle::new();
    rectangle.set_color(color);
    rectangle
        .set_points(&[Point::new(0, 0), Point::new(20, 20)])
        .expect("two corners");
    Box::new(rectangle)
}

#[test]
fn figures_append_in_insertion_order() {
    let (mut model, notifications) = observed_model();

    let first = model.add_figure(committed_rectangle(Color32::RED));
    let second = model.add_figure(committed_rectangle(Color32::BLUE));
    let third = model.add_figure(committed_rectangle(Color32::GREEN));

    assert_eq!(model.figures().len(), 3);
    assert_eq!(notifications.load(Ordering::SeqCst), 3);
    let ids: Vec<usize> = model.figures().iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn recolor_applies_only_to_members() {
    let (mut model, notifications) = observed_model();
    let id = model.add_figure(committed_rectangle(Color32::RED));

    model.recolor(id, Color32::BLUE);
    assert_eq!(model.figures()[0].color(), Color32::BLUE);
    assert_eq!(notifications.load(Ordering::SeqCst), 2);

    // A figure that was never added is not touched and nobody is notified.
    let detached = Rectangle::new();
    model.recolor(detached.id(), Color32::GREEN);
    assert_eq!(model.figures()[0].color(), Color32::BLUE);
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[test]
fn set_points_applies_only_to_members() {
    let (mut model, notifications) = observed_model();
    let id = model.add_figure(committed_rectangle(Color32::RED));

    model.set_points(id, &[Point::new(5, 5), Point::new(50, 60)]);
    assert_eq!(
        model.figures()[0].handles()[0],
        Point::new(5, 5),
        "top-left handle follows the new corners"
    );
    assert_eq!(notifications.load(Ordering::SeqCst), 2);

    let detached = Rectangle::new();
    model.set_points(detached.id(), &[Point::new(1, 1), Point::new(2, 2)]);
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[test]
fn set_points_rejected_by_figure_does_not_notify() {
    let (mut model, notifications) = observed_model();
    let id = model.add_figure(committed_rectangle(Color32::RED));

    // A rectangle is defined by two corners; three points violate its
    // contract and leave the scene untouched.
    model.set_points(id, &[Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]);
    assert_eq!(model.figures()[0].handles()[0], Point::new(0, 0));
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}

#[test]
fn replace_figures_swaps_content_and_drops_selection() {
    let (mut model, notifications) = observed_model();
    model.add_figure(committed_rectangle(Color32::RED));
    model.select_at(10, 10);
    assert!(model.selected_figure().is_some());
    let after_select = notifications.load(Ordering::SeqCst);

    model.replace_figures(Some(vec![
        committed_rectangle(Color32::BLUE),
        committed_rectangle(Color32::GREEN),
    ]));

    assert_eq!(model.figures().len(), 2);
    assert!(model.selected_figure().is_none());
    assert_eq!(notifications.load(Ordering::SeqCst), after_select + 1);
}

#[test]
fn replace_figures_with_none_clears() {
    let (mut model, notifications) = observed_model();
    model.add_figure(committed_rectangle(Color32::RED));
    model.add_figure(committed_rectangle(Color32::BLUE));

    model.replace_figures(None);

    assert!(model.figures().is_empty());
    // The clear itself is an observable change.
    assert_eq!(notifications.load(Ordering::SeqCst), 3);
}

#[test]
fn strokes_append_and_empty_strokes_are_rejected() {
    let (mut model, notifications) = observed_model();

    let path = vec![Point::new(0, 0), Point::new(3, 4), Point::new(8, 8)];
    model.add_stroke(Stroke::new(Color32::BLACK, 3.0, path.clone()));
    assert_eq!(model.strokes().len(), 1);
    assert_eq!(model.strokes()[0].points(), path.as_slice());
    assert_eq!(notifications.load(Ordering::SeqCst), 1);

    model.add_stroke(Stroke::new(Color32::BLACK, 3.0, Vec::new()));
    assert_eq!(model.strokes().len(), 1);
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}
