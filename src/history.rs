use crate::buffer::PixelBuffer;

/// Manages undo/redo over full-buffer snapshots
///
/// Every committing mutation clones the live buffer onto the undo stack
/// before touching a pixel; undo and redo swap whole buffers. Preview-only
/// pointer moves never reach this type.
#[derive(Default)]
pub struct History {
    /// Snapshots that can be restored by undo, most recent last
    undo_stack: Vec<PixelBuffer>,
    /// Snapshots that can be restored by redo, most recent last
    redo_stack: Vec<PixelBuffer>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the buffer state ahead of a committing mutation.
    ///
    /// Call exactly once per committing gesture, before any write. Starting
    /// a new action invalidates whatever was undone, so the redo stack is
    /// cleared.
    pub fn snapshot_before_mutation(&mut self, buffer: &PixelBuffer) {
        self.undo_stack.push(buffer.clone());
        self.redo_stack.clear();
    }

    /// Restores the most recent undo snapshot into `buffer`.
    ///
    /// Silent no-op when there is nothing to undo; the user just sees
    /// nothing happen. A fresh canvas has an empty stack, so undoing it
    /// falls under the same check, while the blank buffer left by `clear`
    /// still has its snapshot and can be undone like any other mutation.
    pub fn undo(&mut self, buffer: &mut PixelBuffer) {
        if let Some(previous) = self.undo_stack.pop() {
            self.redo_stack.push(buffer.clone());
            *buffer = previous;
            log::debug!(
                "undo: {} undoable, {} redoable",
                self.undo_stack.len(),
                self.redo_stack.len()
            );
        }
    }

    /// Restores the most recently undone snapshot into `buffer`. Silent
    /// no-op when the redo stack is empty.
    pub fn redo(&mut self, buffer: &mut PixelBuffer) {
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(buffer.clone());
            *buffer = next;
            log::debug!(
                "redo: {} undoable, {} redoable",
                self.undo_stack.len(),
                self.redo_stack.len()
            );
        }
    }

    /// Blanks the buffer as a normal committing mutation, so a clear can be
    /// undone like any stroke.
    pub fn clear(&mut self, buffer: &mut PixelBuffer) {
        self.snapshot_before_mutation(buffer);
        buffer.clear();
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
