// Eight-step build workflow, its sequential gate, and the proof view.

pub mod gate;
pub mod handlers;
pub mod proof;
pub mod steps;
