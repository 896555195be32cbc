use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events delivered to the stroke session, in canvas pixel
/// coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button was pressed inside the canvas
    PointerDown { x: i32, y: i32 },
    /// Pointer moved while a gesture may be in progress
    PointerMove { x: i32, y: i32 },
    /// Primary button was released
    PointerUp { x: i32, y: i32 },
}

/// Translates egui's pointer state into canvas-relative [`InputEvent`]s
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Converts a screen position to integer canvas coordinates
    fn canvas_coords(canvas_rect: Rect, pos: Pos2) -> (i32, i32) {
        let local = pos - canvas_rect.min;
        (local.x.floor() as i32, local.y.floor() as i32)
    }

    /// Reads this frame's pointer input and produces the events the session
    /// should see.
    ///
    /// Presses are only reported inside the canvas; moves and releases are
    /// reported wherever they land so a drag that leaves the canvas still
    /// finishes (the stroke writes are clipped downstream).
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input.pointer.interact_pos().or(input.pointer.latest_pos());

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pos {
                    if canvas_rect.contains(pos) {
                        let (x, y) = Self::canvas_coords(canvas_rect, pos);
                        events.push(InputEvent::PointerDown { x, y });
                    }
                }
            }

            if let Some(pos) = pos {
                if Some(pos) != self.last_pointer_pos {
                    let (x, y) = Self::canvas_coords(canvas_rect, pos);
                    events.push(InputEvent::PointerMove { x, y });
                }
                self.last_pointer_pos = Some(pos);
            }

            if input.pointer.button_released(PointerButton::Primary) {
                if let Some(pos) = pos {
                    let (x, y) = Self::canvas_coords(canvas_rect, pos);
                    events.push(InputEvent::PointerUp { x, y });
                }
            }
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
