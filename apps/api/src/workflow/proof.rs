use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::keys::SUBMISSION_KEY;
use crate::store::{PersistentStore, StoreError};
use crate::workflow::gate::{StepGate, StepStatus};
use crate::workflow::steps::STEP_COUNT;

/// Links entered on the proof view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionLinks {
    pub lovable: String,
    pub github: String,
    pub deploy: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProofSummary {
    pub steps: Vec<StepStatus>,
    pub completed: usize,
    pub total: usize,
    pub all_complete: bool,
    pub links: SubmissionLinks,
}

pub async fn load_links(store: &dyn PersistentStore) -> Result<SubmissionLinks, StoreError> {
    let Some(raw) = store.get(SUBMISSION_KEY).await? else {
        return Ok(SubmissionLinks::default());
    };
    Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!("Discarding malformed submission links: {e}");
        SubmissionLinks::default()
    }))
}

pub async fn save_links(
    store: &dyn PersistentStore,
    links: &SubmissionLinks,
) -> Result<(), StoreError> {
    store
        .set(SUBMISSION_KEY, &serde_json::to_string(links)?)
        .await
}

pub fn summarize(gate: &StepGate, links: SubmissionLinks) -> ProofSummary {
    ProofSummary {
        steps: gate.statuses(),
        completed: gate.completed_count(),
        total: STEP_COUNT,
        all_complete: gate.all_complete(),
        links,
    }
}

/// Copyable final submission text.
pub fn submission_text(gate: &StepGate, links: &SubmissionLinks) -> String {
    format!(
        "Resume Builder — Final Submission\n\
         ---------------------------------\n\
         Status: {}/{} Steps Completed\n\
         \n\
         Links:\n\
         - Lovable: {}\n\
         - GitHub: {}\n\
         - Live Demo: {}",
        gate.completed_count(),
        STEP_COUNT,
        links.lovable.trim(),
        links.github.trim(),
        links.deploy.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_submission_text_lists_status_and_links() {
        let gate = StepGate::new([true; STEP_COUNT]);
        let links = SubmissionLinks {
            lovable: "https://lovable.dev/projects/rb".into(),
            github: " https://github.com/ada/rb ".into(),
            deploy: "https://rb.example.app".into(),
        };
        let text = submission_text(&gate, &links);
        assert!(text.contains("Status: 8/8 Steps Completed"));
        assert!(text.contains("- Lovable: https://lovable.dev/projects/rb\n"));
        assert!(text.contains("- GitHub: https://github.com/ada/rb\n"));
        assert!(text.ends_with("- Live Demo: https://rb.example.app"));
    }

    #[test]
    fn test_summary_counts_completed_steps() {
        let mut done = [false; STEP_COUNT];
        done[0] = true;
        done[1] = true;
        let summary = summarize(&StepGate::new(done), SubmissionLinks::default());
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total, 8);
        assert!(!summary.all_complete);
    }

    #[tokio::test]
    async fn test_links_round_trip_through_store() {
        let store = MemoryStore::new();
        assert_eq!(load_links(&store).await.unwrap(), SubmissionLinks::default());
        let links = SubmissionLinks {
            github: "https://github.com/ada/rb".into(),
            ..Default::default()
        };
        save_links(&store, &links).await.unwrap();
        assert_eq!(load_links(&store).await.unwrap(), links);
    }

    #[tokio::test]
    async fn test_malformed_links_fall_back_to_empty() {
        let store = MemoryStore::new();
        store.set(SUBMISSION_KEY, "[1,2]").await.unwrap();
        assert_eq!(load_links(&store).await.unwrap(), SubmissionLinks::default());
    }
}
