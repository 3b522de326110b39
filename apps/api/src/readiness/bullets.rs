//! Per-bullet guidance shown while an achievement line is being edited.
//!
//! Independent of document scoring: a bullet is judged on its own text.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;
use crate::readiness::rules::has_metric_marker;

pub const ACTION_VERB_FINDING: &str = "Start with a strong action verb.";
pub const IMPACT_FINDING: &str = "Add measurable impact (numbers).";

const ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "developed",
    "designed",
    "implemented",
    "improved",
    "created",
    "optimized",
    "automated",
    "reduced",
    "launched",
    "architected",
    "delivered",
    "migrated",
    "shipped",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletFinding {
    WeakOpening,
    NoMeasurableImpact,
}

impl BulletFinding {
    pub fn message(&self) -> &'static str {
        match self {
            BulletFinding::WeakOpening => ACTION_VERB_FINDING,
            BulletFinding::NoMeasurableImpact => IMPACT_FINDING,
        }
    }
}

/// Guidance for one bullet, in line order, tagged by where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletGuidance {
    pub section: String,
    pub entry_index: usize,
    pub text: String,
    pub findings: Vec<String>,
}

/// Checks the opening verb and the presence of a metric.
/// Blank input yields no findings.
pub fn findings(text: &str) -> Vec<BulletFinding> {
    let Some(first) = text.split_whitespace().next() else {
        return vec![];
    };

    let mut found = Vec::new();
    if !is_action_verb(first) {
        found.push(BulletFinding::WeakOpening);
    }
    if !has_metric_marker(text) {
        found.push(BulletFinding::NoMeasurableImpact);
    }
    found
}

pub fn critique(text: &str) -> Vec<String> {
    findings(text)
        .iter()
        .map(|f| f.message().to_string())
        .collect()
}

/// Critiques every non-blank description line of every experience and project.
pub fn critique_document(doc: &ResumeDocument) -> Vec<BulletGuidance> {
    let experience = doc
        .experience
        .iter()
        .enumerate()
        .map(|(i, e)| ("experience", i, e.description.as_str()));
    let projects = doc
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| ("projects", i, p.description.as_str()));

    experience
        .chain(projects)
        .flat_map(|(section, entry_index, description)| {
            description
                .lines()
                .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
                .filter(|line| !line.is_empty())
                .map(move |line| BulletGuidance {
                    section: section.to_string(),
                    entry_index,
                    text: line.to_string(),
                    findings: critique(line),
                })
        })
        .collect()
}

fn is_action_verb(token: &str) -> bool {
    let word = token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ACTION_VERBS.contains(&word.as_str())
}
