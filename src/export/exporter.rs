//! Export orchestration: capture a content subtree and hand it to the PDF
//! sink, flipping the store into export mode for the duration.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

use crate::config::ExportConfig;
use crate::export::page::{paginate, Orientation, PagePlacement};
use crate::store::{ProjectStore, RenderMode};

/// Errors surfaced by an export attempt.
///
/// Unlike estimate failures, these propagate to the caller so the UI can
/// reflect the failed export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("capture of '{target}' failed: {message}")]
    Capture { target: String, message: String },

    #[error("capture produced an empty raster")]
    EmptyCapture,

    #[error("PDF sink error: {0}")]
    Sink(String),
}

/// Identifier of the content subtree to capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget(pub String);

impl CaptureTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Raster image produced by the capture collaborator.
#[derive(Debug, Clone)]
pub struct Raster {
    pub width_px: u32,
    pub height_px: u32,
    pub data: Vec<u8>,
}

/// Boxed future returned by [`Capture::capture`].
pub type CaptureFuture = Pin<Box<dyn Future<Output = Result<Raster, ExportError>> + Send>>;

/// Asynchronous raster capture of a content subtree.
pub trait Capture: Send + Sync {
    /// Capture `target` at the given scale factor.
    fn capture(&self, target: &CaptureTarget, scale: u32) -> CaptureFuture;
}

/// Receives the paginated capture and assembles/persists the document.
pub trait PdfSink: Send + Sync {
    fn write(
        &self,
        raster: &Raster,
        pages: &[PagePlacement],
        orientation: Orientation,
    ) -> Result<(), ExportError>;
}

/// Drives one export: mode flip, capture, pagination, sink.
pub struct Exporter {
    capture: Arc<dyn Capture>,
    sink: Arc<dyn PdfSink>,
    orientation: Orientation,
    scale: u32,
}

impl Exporter {
    pub fn new(capture: Arc<dyn Capture>, sink: Arc<dyn PdfSink>, config: &ExportConfig) -> Self {
        Self {
            capture,
            sink,
            orientation: config.orientation,
            scale: config.scale,
        }
    }

    /// Export `target` as a paginated document.
    ///
    /// The store is flipped to [`RenderMode::Export`] before the capture
    /// begins and restored to interactive unconditionally — on success, on
    /// error, and if the capture future panics or is dropped mid-flight.
    pub async fn export(
        &self,
        store: &ProjectStore,
        target: &CaptureTarget,
    ) -> Result<(), ExportError> {
        store.set_mode(RenderMode::Export);
        let restore = store.clone();
        let _guard = scopeguard::guard((), move |_| {
            restore.set_mode(RenderMode::Interactive);
        });

        let result = self.run(target).await;
        if let Err(e) = &result {
            tracing::error!(target = %target.0, error = %e, "export failed");
        } else {
            tracing::info!(target = %target.0, "export completed");
        }
        result
    }

    async fn run(&self, target: &CaptureTarget) -> Result<(), ExportError> {
        let raster = self.capture.capture(target, self.scale).await?;
        if raster.width_px == 0 || raster.height_px == 0 {
            return Err(ExportError::EmptyCapture);
        }
        let pages = paginate(raster.width_px, raster.height_px, self.orientation);
        tracing::debug!(
            target = %target.0,
            pages = pages.len(),
            width_px = raster.width_px,
            height_px = raster.height_px,
            "capture paginated"
        );
        self.sink.write(&raster, &pages, self.orientation)
    }
}
