use crate::workflow::steps::STEPS;

/// The persisted résumé record. Editor and preview must agree on this key.
pub const DOCUMENT_KEY: &str = "resumeBuilderData";
pub const TEMPLATE_KEY: &str = "resumeBuilderTemplate";
pub const THEME_KEY: &str = "resumeBuilderTheme";
pub const SUBMISSION_KEY: &str = "rb_final_submission";

/// Completion marker for a workflow step; presence means complete.
pub fn step_marker_key(step_id: &str) -> String {
    format!("rb_step_{step_id}_artifact")
}

/// Every key cleared by a reset.
pub fn owned_keys() -> Vec<String> {
    let mut keys: Vec<String> = [DOCUMENT_KEY, TEMPLATE_KEY, THEME_KEY, SUBMISSION_KEY]
        .iter()
        .map(|k| k.to_string())
        .collect();
    keys.extend(STEPS.iter().map(|s| step_marker_key(s.id)));
    keys
}
