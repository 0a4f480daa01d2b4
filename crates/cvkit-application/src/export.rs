//! Export formats and renderer seams.
//!
//! JSON and YAML exports are produced in-process by the codecs. PDF and PNG
//! exports go through renderer traits implemented by the embedding shell,
//! so the document layer stays free of any graphics toolkit.

use async_trait::async_trait;

use cvkit_core::render::{RenderLabels, RenderedResume};
use cvkit_core::resume::ResumeData;

/// The formats a document can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Pdf,
    Png,
}

impl ExportFormat {
    /// The fixed download file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "resume.json",
            Self::Yaml => "resume.yaml",
            Self::Pdf => "resume.pdf",
            Self::Png => "resume.png",
        }
    }
}

/// A finished export: the bytes plus the file name to save them under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub(crate) fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format.file_name().to_string(),
            bytes,
        }
    }
}

/// Renderer error type. Renderers are free to fail with whatever their
/// toolkit produces; the service wraps it into a document-layer error.
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// Renders a document snapshot to PDF bytes.
///
/// The renderer receives the raw document plus the label set rather than the
/// rendered projection: PDF layout engines typically want to make their own
/// pagination decisions from the full data, but the date ranges and section
/// titles they print must come from the same labels as the preview.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, resume: &ResumeData, labels: &RenderLabels)
        -> Result<Vec<u8>, RenderError>;
}

/// Renders the preview projection to PNG bytes.
///
/// PNG export rasterizes what the preview shows, so it takes the rendered
/// projection and cannot diverge from it.
#[async_trait]
pub trait ImageRenderer: Send + Sync {
    async fn render_png(&self, rendered: &RenderedResume) -> Result<Vec<u8>, RenderError>;
}
