// Readiness engine: rule table, scoring, suggestion ranking, bullet guidance.
// Everything here is pure; callers own persistence and recomputation.

pub mod bullets;
pub mod rules;
pub mod score;
pub mod suggest;

pub use bullets::critique;
pub use score::{score, ScoreReport};
pub use suggest::{suggest, Suggestion};
