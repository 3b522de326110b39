// Editing surface: typed edits over the stored document and the HTTP routes
// that issue them.

pub mod edits;
pub mod handlers;
pub mod session;

pub use session::{Editor, EditorSnapshot};
