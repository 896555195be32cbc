use serde::{Deserialize, Serialize};

/// The drawing tools the user can pick from. Exactly one is active at a
/// time; the session consults it on every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pen,
    Line,
    Rectangle,
    Ellipse,
    Circle,
    Fill,
}

impl Tool {
    /// Every tool, in toolbar order
    pub const ALL: [Tool; 6] = [
        Tool::Pen,
        Tool::Line,
        Tool::Rectangle,
        Tool::Ellipse,
        Tool::Circle,
        Tool::Fill,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Ellipse => "Ellipse",
            Tool::Circle => "Circle",
            Tool::Fill => "Fill",
        }
    }

    /// Drag tools rasterize start-to-current on release; Pen commits
    /// incrementally and Fill acts on the press alone.
    pub fn is_drag_shape(&self) -> bool {
        matches!(
            self,
            Tool::Line | Tool::Rectangle | Tool::Ellipse | Tool::Circle
        )
    }
}
