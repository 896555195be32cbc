use egui::Color32;
use pixel_paint::History;
use pixel_paint::PixelBuffer;
use pixel_paint::StrokeSession;
use pixel_paint::Tool;

fn setup(tool: Tool) -> (PixelBuffer, History, StrokeSession) {
    (
        PixelBuffer::new(10, 10, Color32::WHITE),
        History::new(),
        StrokeSession::new(tool, Color32::BLACK, 1),
    )
}

#[test]
fn events_while_idle_are_ignored() {
    let (mut buffer, mut history, mut session) = setup(Tool::Pen);

    session.pointer_move((3, 3), &mut buffer).unwrap();
    session.pointer_up((3, 3), &mut buffer, &mut history).unwrap();

    assert!(buffer.is_blank());
    assert!(!session.is_active());
    assert!(!history.can_undo());
}

#[test]
fn pen_commits_incrementally() {
    let (mut buffer, mut history, mut session) = setup(Tool::Pen);

    session.pointer_down((0, 0), &mut buffer, &mut history).unwrap();
    // The first dot and the snapshot land on the press
    assert_eq!(buffer.get(0, 0).unwrap(), Color32::BLACK);
    assert_eq!(history.undo_depth(), 1);

    // Each move writes immediately, no separate commit on release
    session.pointer_move((4, 4), &mut buffer).unwrap();
    for i in 0..=4 {
        assert_eq!(buffer.get(i, i).unwrap(), Color32::BLACK);
    }

    session.pointer_up((4, 4), &mut buffer, &mut history).unwrap();
    assert!(!session.is_active());
    assert_eq!(history.undo_depth(), 1, "pen must snapshot exactly once");
}

#[test]
fn shape_tools_preview_without_writing() {
    let (mut buffer, mut history, mut session) = setup(Tool::Rectangle);

    session.pointer_down((2, 2), &mut buffer, &mut history).unwrap();
    session.pointer_move((7, 7), &mut buffer).unwrap();

    // Preview exists, committed buffer untouched, nothing snapshotted
    assert!(!session.preview_pixels().is_empty());
    assert!(buffer.is_blank());
    assert!(!history.can_undo());
}

#[test]
fn rectangle_commits_its_outline_on_release() {
    let (mut buffer, mut history, mut session) = setup(Tool::Rectangle);

    session.pointer_down((2, 2), &mut buffer, &mut history).unwrap();
    session.pointer_move((5, 5), &mut buffer).unwrap();
    session.pointer_up((7, 7), &mut buffer, &mut history).unwrap();

    let black = buffer
        .pixels()
        .iter()
        .filter(|&&p| p == Color32::BLACK)
        .count();
    assert_eq!(black, 20, "expected exactly the border pixels");
    assert_eq!(buffer.get(4, 4).unwrap(), Color32::WHITE, "interior was filled");
    assert_eq!(history.undo_depth(), 1);
    assert!(!session.is_active());
    assert!(session.preview_pixels().is_empty(), "preview survives the release");
}

#[test]
fn line_commits_both_endpoints() {
    let (mut buffer, mut history, mut session) = setup(Tool::Line);

    session.pointer_down((0, 9), &mut buffer, &mut history).unwrap();
    session.pointer_up((9, 0), &mut buffer, &mut history).unwrap();

    assert_eq!(buffer.get(0, 9).unwrap(), Color32::BLACK);
    assert_eq!(buffer.get(9, 0).unwrap(), Color32::BLACK);
}

#[test]
fn shape_writes_are_clipped_to_the_buffer() {
    // Drag a circle partly off-canvas; the out-of-bounds reflections must
    // be dropped, not wrap or error
    let (mut buffer, mut history, mut session) = setup(Tool::Circle);

    session.pointer_down((0, 0), &mut buffer, &mut history).unwrap();
    session.pointer_up((9, 9), &mut buffer, &mut history).unwrap();

    assert!(!buffer.is_blank());
}

#[test]
fn fill_is_a_single_event_action() {
    let (mut buffer, mut history, mut session) = setup(Tool::Fill);

    session.pointer_down((5, 5), &mut buffer, &mut history).unwrap();

    assert!(buffer.pixels().iter().all(|&p| p == Color32::BLACK));
    assert!(!session.is_active(), "fill must not enter a drag gesture");
    // Fill commits without a snapshot, so there is nothing to undo
    assert!(!history.can_undo());
}

#[test]
fn brush_size_is_clamped() {
    let (mut buffer, mut history, mut session) = setup(Tool::Pen);

    session.set_brush_size(99);
    assert_eq!(session.brush_size(), 50);
    session.set_brush_size(0);
    assert_eq!(session.brush_size(), 1);

    // And a fat brush stamps a disc, not a single pixel
    session.set_brush_size(5);
    session.pointer_down((5, 5), &mut buffer, &mut history).unwrap();
    assert_eq!(buffer.get(5, 5).unwrap(), Color32::BLACK);
    assert_eq!(buffer.get(7, 5).unwrap(), Color32::BLACK);
    assert_eq!(buffer.get(5, 3).unwrap(), Color32::BLACK);
    assert_eq!(buffer.get(9, 9).unwrap(), Color32::WHITE);
}

#[test]
fn new_gesture_clears_the_redo_stack() {
    let (mut buffer, mut history, mut session) = setup(Tool::Pen);

    session.pointer_down((1, 1), &mut buffer, &mut history).unwrap();
    session.pointer_up((1, 1), &mut buffer, &mut history).unwrap();
    history.undo(&mut buffer);
    assert!(history.can_redo());

    session.pointer_down((2, 2), &mut buffer, &mut history).unwrap();
    assert!(!history.can_redo());
}
