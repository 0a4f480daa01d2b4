//! Application layer for cvkit: the use-case service tying the document
//! store to persistence, plus the export formats and renderer seams.

pub mod export;
pub mod service;

pub use export::{ExportFormat, ExportPayload, ImageRenderer, PdfRenderer, RenderError};
pub use service::ResumeService;
