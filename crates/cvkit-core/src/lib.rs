//! Core document model for the cvkit resume editor.
//!
//! Everything in this crate is synchronous and side-effect free: the
//! document types, the snapshot store with its mutation operations, safe
//! link derivation for contact values, and the render projection that the
//! preview and the exporters share. Persistence and codecs live in
//! `cvkit-infrastructure`; use cases in `cvkit-application`.

pub mod error;
pub mod link;
pub mod render;
pub mod resume;

// Re-export common error type
pub use error::{CvError, Result};
