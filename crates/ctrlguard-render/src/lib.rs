//! Rendering for terminals and CI surfaces (plain text, Markdown).
//!
//! Renderers take an already-ordered [`RenderableReport`] and never reorder it.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableData, RenderableFinding, RenderableReport, RenderableVerdictStatus};
pub use text::render_text;
