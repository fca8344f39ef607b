use grid_paint::{Color, Edit, EditorState, GestureConfig};
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_millis(10);

fn editor() -> EditorState {
    let mut editor = EditorState::with_config(
        8,
        GestureConfig {
            throttle_window: WINDOW,
        },
    );
    editor.set_active_color(Color::from("#FF0000"));
    editor
}

fn painted_cells(editor: &EditorState) -> usize {
    editor
        .grid()
        .cells()
        .filter(|(_, _, cell)| cell.is_some())
        .count()
}

#[test]
fn first_move_in_a_burst_applies_immediately() {
    let mut editor = editor();
    let t0 = Instant::now();

    editor.begin_stroke(0, 0).unwrap();
    editor.continue_stroke_at(0, 1, t0).unwrap();

    assert_eq!(editor.grid().get(0, 1).unwrap(), &Some(Color::from("#FF0000")));
}

#[test]
fn moves_inside_the_window_are_dropped() {
    let mut editor = editor();
    let t0 = Instant::now();

    editor.begin_stroke(0, 0).unwrap();
    editor.continue_stroke_at(0, 1, t0).unwrap();
    editor.continue_stroke_at(0, 2, t0 + Duration::from_millis(3)).unwrap();
    editor.continue_stroke_at(0, 3, t0 + Duration::from_millis(9)).unwrap();
    editor.end_stroke();

    // Only the press and the first move landed.
    assert_eq!(painted_cells(&editor), 2);
    assert_eq!(editor.grid().get(0, 2).unwrap(), &None);
    assert_eq!(editor.grid().get(0, 3).unwrap(), &None);
}

#[test]
fn dropped_moves_leave_no_history_behind() {
    let mut editor = editor();
    let t0 = Instant::now();

    editor.begin_stroke(0, 0).unwrap();
    editor.continue_stroke_at(0, 1, t0).unwrap();
    editor.continue_stroke_at(0, 2, t0 + Duration::from_millis(5)).unwrap();
    editor.end_stroke();

    assert_eq!(editor.history().len(), 1);
    match &editor.history().edits()[0] {
        Edit::Paint(edit) => assert_eq!(edit.cells().len(), 2),
        Edit::Clear { .. } => panic!("expected a paint edit"),
    }
}

#[test]
fn a_move_exactly_on_the_boundary_applies_and_resets_the_window() {
    let mut editor = editor();
    let t0 = Instant::now();

    editor.begin_stroke(0, 0).unwrap();
    editor.continue_stroke_at(0, 1, t0).unwrap();
    editor.continue_stroke_at(0, 2, t0 + WINDOW).unwrap();
    // Measured from the boundary hit, not from t0.
    editor.continue_stroke_at(0, 3, t0 + WINDOW + Duration::from_millis(5)).unwrap();
    editor.continue_stroke_at(0, 4, t0 + WINDOW + WINDOW).unwrap();
    editor.end_stroke();

    assert_eq!(editor.grid().get(0, 2).unwrap(), &Some(Color::from("#FF0000")));
    assert_eq!(editor.grid().get(0, 3).unwrap(), &None);
    assert_eq!(editor.grid().get(0, 4).unwrap(), &Some(Color::from("#FF0000")));
}

#[test]
fn each_spaced_move_applies() {
    let mut editor = editor();
    let t0 = Instant::now();

    editor.begin_stroke(0, 0).unwrap();
    for col in 1..6 {
        editor
            .continue_stroke_at(0, col, t0 + WINDOW * col as u32)
            .unwrap();
    }
    editor.end_stroke();

    assert_eq!(painted_cells(&editor), 6);
}

#[test]
fn a_single_undo_reverts_the_throttled_stroke_entirely() {
    let mut editor = editor();
    let t0 = Instant::now();

    editor.begin_stroke(0, 0).unwrap();
    editor.continue_stroke_at(0, 1, t0).unwrap();
    editor.continue_stroke_at(0, 2, t0 + Duration::from_millis(4)).unwrap();
    editor.continue_stroke_at(0, 3, t0 + WINDOW).unwrap();
    editor.end_stroke();

    editor.undo().unwrap();
    assert!(editor.grid().is_empty());
    assert!(editor.history().is_empty());
}

#[test]
fn the_gate_outlives_a_gesture() {
    let mut editor = editor();
    let t0 = Instant::now();

    editor.begin_stroke(0, 0).unwrap();
    editor.continue_stroke_at(0, 1, t0).unwrap();
    editor.end_stroke();

    // A new press is never throttled, but its first move still falls inside
    // the previous gesture's window.
    editor.begin_stroke(2, 0).unwrap();
    editor.continue_stroke_at(2, 1, t0 + Duration::from_millis(5)).unwrap();
    editor.continue_stroke_at(2, 2, t0 + WINDOW).unwrap();
    editor.end_stroke();

    assert_eq!(editor.grid().get(2, 0).unwrap(), &Some(Color::from("#FF0000")));
    assert_eq!(editor.grid().get(2, 1).unwrap(), &None);
    assert_eq!(editor.grid().get(2, 2).unwrap(), &Some(Color::from("#FF0000")));
}
