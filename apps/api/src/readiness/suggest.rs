use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;
use crate::readiness::rules::{RuleId, RULES};

/// How many suggestions the editor shows at once.
pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub rule_id: RuleId,
    pub message: String,
    pub points_if_fixed: u32,
}

/// Every failed rule, highest weight first. Equal weights keep table order.
pub fn failed_rules(doc: &ResumeDocument) -> Vec<Suggestion> {
    let mut failed: Vec<Suggestion> = RULES
        .iter()
        .filter(|rule| !rule.passes(doc))
        .map(|rule| Suggestion {
            rule_id: rule.id,
            message: rule.message.to_string(),
            points_if_fixed: rule.weight,
        })
        .collect();
    // sort_by is stable
    failed.sort_by(|a, b| b.points_if_fixed.cmp(&a.points_if_fixed));
    failed
}

/// The top [`MAX_SUGGESTIONS`] failed rules. Empty iff every rule passes.
pub fn suggest(doc: &ResumeDocument) -> Vec<Suggestion> {
    let mut ranked = failed_rules(doc);
    ranked.truncate(MAX_SUGGESTIONS);
    ranked
}
