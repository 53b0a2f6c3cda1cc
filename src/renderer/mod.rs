//! Template rendering capability
//!
//! - `interface`: The `TemplateRenderer` contract used by the walker
//! - `minijinja`: MiniJinja-backed implementation
//! - `filters`: Case-conversion filters available inside templates

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;

/// Creates the renderer shared by every component of one generation
pub fn get_template_engine() -> MiniJinjaRenderer {
    MiniJinjaRenderer::new()
}
