//! Infrastructure layer for cvkit: persistence, structural merge, and the
//! JSON/YAML codecs.
//!
//! Everything here sits behind the small [`state_store::StateStore`] seam so
//! the document layer never touches the filesystem directly.

pub mod codec;
pub mod merge;
pub mod paths;
pub mod repository;
pub mod state_store;

pub use codec::DataFormat;
pub use repository::{ResumeRepository, STORAGE_KEY};
pub use state_store::{FileStateStore, MemoryStateStore, StateStore};
