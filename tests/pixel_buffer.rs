use egui::Color32;
use pixel_paint::PaintError;
use pixel_paint::PixelBuffer;

#[test]
fn out_of_bounds_access_is_rejected_not_clamped() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE);

    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (100, 100)] {
        assert!(matches!(
            buffer.get(x, y),
            Err(PaintError::OutOfBounds { .. })
        ));
        assert!(buffer.set(x, y, Color32::BLACK).is_err());
    }

    // The rejected writes left nothing behind
    assert!(buffer.is_blank());
}

#[test]
fn get_reads_back_what_set_wrote() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE);
    buffer.set(3, 0, Color32::RED).unwrap();
    assert_eq!(buffer.get(3, 0).unwrap(), Color32::RED);
    assert_eq!(buffer.get(0, 3).unwrap(), Color32::WHITE);
}

#[test]
fn clear_restores_the_background() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE);
    buffer.set(1, 2, Color32::BLACK).unwrap();
    buffer.clear();
    assert!(buffer.is_blank());
}

#[test]
fn resize_recreates_a_blank_buffer() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE);
    buffer.set(1, 1, Color32::BLACK).unwrap();

    buffer.resize(6, 3);
    assert_eq!(buffer.width(), 6);
    assert_eq!(buffer.height(), 3);
    // Content does not survive a resize
    assert!(buffer.is_blank());
}

#[test]
fn version_tracks_every_mutation() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE);
    let v0 = buffer.version();

    buffer.set(0, 0, Color32::BLACK).unwrap();
    let v1 = buffer.version();
    assert_ne!(v0, v1);

    buffer.clear();
    let v2 = buffer.version();
    assert_ne!(v1, v2);

    buffer.resize(5, 5);
    assert_ne!(v2, buffer.version());
}

#[test]
fn version_is_untouched_by_reads_and_rejected_writes() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE);
    let v0 = buffer.version();

    let _ = buffer.get(1, 1).unwrap();
    assert!(buffer.set(42, 42, Color32::BLACK).is_err());
    assert_eq!(buffer.version(), v0);
}

#[test]
fn restoring_a_snapshot_is_observable_as_a_change() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE);
    let snapshot = buffer.clone();

    buffer.set(0, 0, Color32::BLACK).unwrap();
    let mutated_version = buffer.version();

    // A wholesale restore swaps in the snapshot's older counter value
    buffer = snapshot;
    assert_ne!(buffer.version(), mutated_version);
    // The counter is bookkeeping, not content
    assert!(buffer == PixelBuffer::new(4, 4, Color32::WHITE));
}

#[test]
fn snapshots_do_not_alias_the_live_buffer() {
    let mut buffer = PixelBuffer::new(4, 4, Color32::WHITE);
    let snapshot = buffer.clone();

    buffer.set(0, 0, Color32::BLACK).unwrap();
    assert!(snapshot.is_blank());
    assert!(buffer != snapshot);
}
