//! Sequential gating over the workflow steps.
//!
//! Step `i` is unlocked iff every step before it has a completion marker.
//! A request for a locked step is redirected to the earliest step that is
//! still incomplete, never to step 0 unconditionally.

use serde::Serialize;

use crate::store::keys::step_marker_key;
use crate::store::{PersistentStore, StoreError};
use crate::workflow::steps::{Step, STEPS, STEP_COUNT};

/// Where a navigation request wants to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Target {
    Step(usize),
    /// The terminal proof view, behind all steps.
    Proof,
}

impl Target {
    /// Indices past the last step address the proof view.
    pub fn from_index(index: usize) -> Self {
        if index < STEP_COUNT {
            Target::Step(index)
        } else {
            Target::Proof
        }
    }

    /// Steps that must be complete before entry.
    fn prerequisites(&self) -> usize {
        match self {
            Target::Step(i) => *i,
            Target::Proof => STEP_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Enter { target: Target },
    Redirect { to: usize, step: Step },
}

#[derive(Debug, Clone, Serialize)]
pub struct StepStatus {
    pub index: usize,
    #[serde(flatten)]
    pub step: Step,
    pub complete: bool,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepGate {
    completed: [bool; STEP_COUNT],
}

impl StepGate {
    pub fn new(completed: [bool; STEP_COUNT]) -> Self {
        Self { completed }
    }

    /// Reads every step's completion marker. An empty marker value counts
    /// as absent.
    pub async fn load(store: &dyn PersistentStore) -> Result<Self, StoreError> {
        let mut completed = [false; STEP_COUNT];
        for (done, step) in completed.iter_mut().zip(STEPS.iter()) {
            *done = store
                .get(&step_marker_key(step.id))
                .await?
                .is_some_and(|v| !v.trim().is_empty());
        }
        Ok(Self::new(completed))
    }

    pub fn is_complete(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|c| **c).count()
    }

    pub fn all_complete(&self) -> bool {
        self.completed_count() == STEP_COUNT
    }

    pub fn is_unlocked(&self, target: Target) -> bool {
        self.first_unmet(target).is_none()
    }

    /// The earliest incomplete prerequisite of `target`, if any.
    pub fn first_unmet(&self, target: Target) -> Option<usize> {
        self.completed[..target.prerequisites()]
            .iter()
            .position(|done| !done)
    }

    pub fn enter(&self, target: Target) -> GateDecision {
        match self.first_unmet(target) {
            Some(to) => GateDecision::Redirect {
                to,
                step: STEPS[to],
            },
            None => GateDecision::Enter { target },
        }
    }

    /// Where a bare workflow entry lands.
    pub fn entry_point(&self) -> GateDecision {
        self.enter(Target::Step(0))
    }

    pub fn statuses(&self) -> Vec<StepStatus> {
        STEPS
            .iter()
            .enumerate()
            .map(|(index, step)| StepStatus {
                index,
                step: *step,
                complete: self.is_complete(index),
                unlocked: self.is_unlocked(Target::Step(index)),
            })
            .collect()
    }
}

pub async fn mark_complete(
    store: &dyn PersistentStore,
    step: &Step,
    artifact: &str,
) -> Result<(), StoreError> {
    let value = if artifact.trim().is_empty() {
        "true"
    } else {
        artifact
    };
    store.set(&step_marker_key(step.id), value).await
}

pub async fn clear_marker(store: &dyn PersistentStore, step: &Step) -> Result<(), StoreError> {
    store.remove(&step_marker_key(step.id)).await
}
