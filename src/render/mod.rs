//! Minimal view layer: stateless projections of store state into text,
//! with mode gates that let one tree serve both the screen and the PDF
//! capture.

mod gate;
mod renderer;
mod view;

pub use gate::{HideOnExport, ShowOnExport};
pub use renderer::Renderer;
pub use view::{format_yen, AmountLine, InputSummary, Stack, Text, View};
