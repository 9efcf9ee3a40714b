//! Rendering of permission reports for humans (plain text, Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableBlock, RenderableData, RenderableDecision, RenderableReport};
pub use text::render_text;
