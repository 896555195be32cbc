#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod buffer;
pub mod error;
pub mod fill;
pub mod file_handler;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod session;
pub mod tools;

pub use app::PaintApp;
pub use buffer::PixelBuffer;
pub use error::PaintError;
pub use fill::flood_fill;
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use session::StrokeSession;
pub use tools::Tool;
