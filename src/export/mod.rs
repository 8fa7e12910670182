//! PDF export: capture collaborator boundary, A4 pagination, and the
//! render-mode flip that keeps interactive chrome out of the capture.

mod exporter;
mod page;

pub use exporter::{
    Capture, CaptureFuture, CaptureTarget, ExportError, Exporter, PdfSink, Raster,
};
pub use page::{paginate, Orientation, PagePlacement};
