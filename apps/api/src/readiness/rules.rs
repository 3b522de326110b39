//! The readiness rule table.
//!
//! Scoring and suggestion ranking both walk [`RULES`]; a suggestion's
//! "fixing this adds N points" is always the weight the scorer awards.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

pub const SUMMARY_MIN_WORDS: usize = 40;
pub const SUMMARY_MAX_WORDS: usize = 120;
pub const MIN_PROJECTS: usize = 2;
pub const MIN_EXPERIENCE: usize = 1;
pub const MIN_SKILLS: usize = 8;

/// Stable identifiers for each rule, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    SummaryLength,
    ProjectCount,
    ExperiencePresent,
    SkillCount,
    ProofLinks,
    MeasurableImpact,
    EducationComplete,
}

pub struct Rule {
    pub id: RuleId,
    pub weight: u32,
    /// Shown to the user when the rule fails.
    pub message: &'static str,
    check: fn(&ResumeDocument) -> bool,
}

impl Rule {
    pub fn passes(&self, doc: &ResumeDocument) -> bool {
        (self.check)(doc)
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        id: RuleId::SummaryLength,
        weight: 15,
        message: "Write a summary between 40 and 120 words.",
        check: summary_length_in_range,
    },
    Rule {
        id: RuleId::ProjectCount,
        weight: 10,
        message: "Add at least 2 projects.",
        check: enough_projects,
    },
    Rule {
        id: RuleId::ExperiencePresent,
        weight: 10,
        message: "Add at least one experience entry.",
        check: has_experience,
    },
    Rule {
        id: RuleId::SkillCount,
        weight: 10,
        message: "List at least 8 skills.",
        check: enough_skills,
    },
    Rule {
        id: RuleId::ProofLinks,
        weight: 10,
        message: "Add a GitHub or LinkedIn link.",
        check: has_proof_link,
    },
    Rule {
        id: RuleId::MeasurableImpact,
        weight: 15,
        message: "Add measurable impact (numbers) to your experience or project descriptions.",
        check: has_measurable_impact,
    },
    Rule {
        id: RuleId::EducationComplete,
        weight: 10,
        message: "Complete your education with school, degree and year.",
        check: education_complete,
    },
];

/// Sum of every rule weight in [`RULES`].
pub fn max_points() -> u32 {
    RULES.iter().map(|r| r.weight).sum()
}

#[cfg(test)]
pub fn rule(id: RuleId) -> &'static Rule {
    RULES
        .iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| unreachable!("every RuleId has a table entry"))
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Digit, `%`, or the magnitude letters `x`/`k`/`m` in any case.
pub fn has_metric_marker(text: &str) -> bool {
    text.chars()
        .any(|c| c.is_ascii_digit() || matches!(c.to_ascii_lowercase(), '%' | 'x' | 'k' | 'm'))
}

fn summary_length_in_range(doc: &ResumeDocument) -> bool {
    (SUMMARY_MIN_WORDS..=SUMMARY_MAX_WORDS).contains(&word_count(&doc.summary))
}

fn enough_projects(doc: &ResumeDocument) -> bool {
    doc.projects.len() >= MIN_PROJECTS
}

fn has_experience(doc: &ResumeDocument) -> bool {
    doc.experience.len() >= MIN_EXPERIENCE
}

fn enough_skills(doc: &ResumeDocument) -> bool {
    doc.skills.total() >= MIN_SKILLS
}

fn has_proof_link(doc: &ResumeDocument) -> bool {
    doc.links.has_any()
}

fn has_measurable_impact(doc: &ResumeDocument) -> bool {
    doc.experience
        .iter()
        .map(|e| e.description.as_str())
        .chain(doc.projects.iter().map(|p| p.description.as_str()))
        .any(has_metric_marker)
}

fn education_complete(doc: &ResumeDocument) -> bool {
    !doc.education.is_empty() && doc.education.iter().all(|e| e.is_complete())
}
