use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;
use crate::readiness::rules::{max_points, RuleId, RULES};

/// Upper bound on any reported score, independent of the rule table.
pub const SCORE_CAP: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule_id: RuleId,
    pub passed: bool,
    pub points_awarded: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// 0 – 100.
    pub points: u32,
    /// Best score the active table can award (80 for the baseline table).
    pub max_points: u32,
    /// Every rule passed. Does not imply `points == 100`.
    pub all_passed: bool,
    pub rule_results: Vec<RuleResult>,
}

/// Applies every rule in table order. Total over all documents, never fails.
pub fn score(doc: &ResumeDocument) -> ScoreReport {
    let rule_results: Vec<RuleResult> = RULES
        .iter()
        .map(|rule| {
            let passed = rule.passes(doc);
            RuleResult {
                rule_id: rule.id,
                passed,
                points_awarded: if passed { rule.weight } else { 0 },
            }
        })
        .collect();

    let awarded: u32 = rule_results.iter().map(|r| r.points_awarded).sum();

    ScoreReport {
        points: awarded.min(SCORE_CAP),
        max_points: max_points().min(SCORE_CAP),
        all_passed: rule_results.iter().all(|r| r.passed),
        rule_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::fixtures::{arb_document, complete_document};
    use proptest::prelude::*;

    #[test]
    fn test_complete_document_scores_full_baseline() {
        let doc = complete_document();
        assert_eq!(crate::readiness::rules::word_count(&doc.summary), 90);
        let report = score(&doc);
        assert_eq!(report.points, 80);
        assert!(report.all_passed);
        assert_eq!(report.max_points, 80);
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let report = score(&ResumeDocument::default());
        assert_eq!(report.points, 0);
        assert!(!report.all_passed);
        assert_eq!(report.rule_results.len(), RULES.len());
        assert!(report.rule_results.iter().all(|r| !r.passed));
    }

    #[test]
    fn test_rule_results_follow_table_order() {
        let report = score(&ResumeDocument::default());
        let ids: Vec<_> = report.rule_results.iter().map(|r| r.rule_id).collect();
        let table: Vec<_> = RULES.iter().map(|r| r.id).collect();
        assert_eq!(ids, table);
    }

    #[test]
    fn test_satisfying_one_rule_adds_exactly_its_weight() {
        let empty = ResumeDocument::default();
        let before = score(&empty);

        let mut linked = empty.clone();
        linked.links.github = "https://github.com/ada".into();
        let after = score(&linked);

        assert_eq!(after.points, before.points + 10);
        for (b, a) in before.rule_results.iter().zip(&after.rule_results) {
            if a.rule_id == RuleId::ProofLinks {
                assert!(a.passed && !b.passed);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_breaking_one_rule_removes_exactly_its_weight() {
        let mut doc = complete_document();
        doc.projects.pop();
        let report = score(&doc);
        assert_eq!(report.points, 70);
        let failed: Vec<_> = report
            .rule_results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.rule_id)
            .collect();
        assert_eq!(failed, vec![RuleId::ProjectCount]);
    }

    proptest! {
        #[test]
        fn test_score_is_bounded(doc in arb_document()) {
            let report = score(&doc);
            prop_assert!(report.points <= SCORE_CAP);
            prop_assert!(report.points <= report.max_points);
        }

        #[test]
        fn test_score_is_deterministic(doc in arb_document()) {
            prop_assert_eq!(score(&doc), score(&doc.clone()));
        }

        #[test]
        fn test_points_equal_sum_of_awarded(doc in arb_document()) {
            let report = score(&doc);
            let sum: u32 = report.rule_results.iter().map(|r| r.points_awarded).sum();
            prop_assert_eq!(report.points, sum.min(SCORE_CAP));
        }
    }
}
