// Presentation: template and theme choices, the render tree, and plain-text export.

pub mod export;
pub mod handlers;
pub mod renderer;
pub mod template;
