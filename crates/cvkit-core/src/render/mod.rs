//! Pure display derivation shared by the live preview and the exporters.

pub mod labels;
pub mod view;

pub use labels::RenderLabels;
pub use view::{
    RenderedContact, RenderedEntry, RenderedHeader, RenderedResume, RenderedSection, date_range,
    project,
};
