pub mod events;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::workflow::handlers as workflow;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Editing surface
        .route(
            "/api/v1/resume",
            get(editor::handle_get_resume).put(editor::handle_replace_resume),
        )
        .route("/api/v1/resume/edits", post(editor::handle_apply_edit))
        .route("/api/v1/resume/sample", post(editor::handle_load_sample))
        .route(
            "/api/v1/resume/bullets/critique",
            post(editor::handle_critique_bullet),
        )
        .route(
            "/api/v1/resume/guidance",
            get(editor::handle_document_guidance),
        )
        .route("/api/v1/resume/export", get(editor::handle_export_text))
        // Presentation surface
        .route("/api/v1/preview", get(render::handle_preview))
        .route(
            "/api/v1/preferences",
            get(render::handle_get_preferences).put(render::handle_put_preferences),
        )
        // Workflow
        .route("/api/v1/steps", get(workflow::handle_list_steps))
        .route("/api/v1/steps/entry", get(workflow::handle_workflow_entry))
        .route(
            "/api/v1/steps/:index/enter",
            get(workflow::handle_enter_step),
        )
        .route(
            "/api/v1/steps/:id/artifact",
            put(workflow::handle_put_artifact).delete(workflow::handle_delete_artifact),
        )
        .route("/api/v1/proof", get(workflow::handle_get_proof))
        .route("/api/v1/proof/links", put(workflow::handle_put_links))
        .route(
            "/api/v1/proof/submission",
            get(workflow::handle_submission_text),
        )
        .route("/api/v1/reset", post(workflow::handle_reset))
        // Cross-view notifications
        .route("/api/v1/events", get(events::events_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::store::MemoryStore;
    use crate::workflow::steps::STEPS;

    fn app() -> Router {
        build_router(AppState::new(Arc::new(MemoryStore::new())))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn complete_steps(app: &Router, count: usize) {
        for step in &STEPS[..count] {
            let uri = format!("/api/v1/steps/{}/artifact", step.id);
            let (status, _) = send_json(app, Method::PUT, &uri, Some(json!({ "artifact": "done" }))).await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_health_reports_store_backend() {
        let (status, body) = send_json(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "rb-api");
        assert_eq!(body["store"], "memory");
    }

    #[tokio::test]
    async fn test_fresh_resume_scores_zero_with_three_suggestions() {
        let (status, body) = send_json(&app(), Method::GET, "/api/v1/resume", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"]["points"], 0);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
        assert_eq!(body["suggestions"][0]["rule_id"], "summary_length");
    }

    #[tokio::test]
    async fn test_edits_are_visible_to_preview_and_export() {
        let app = app();
        let (status, _) = send_json(
            &app,
            Method::POST,
            "/api/v1/resume/edits",
            Some(json!({ "op": "set_personal", "field": "name", "value": "Ada Lovelace" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, preview) = send_json(&app, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(preview["template"], "Classic");
        assert_eq!(preview["regions"][0]["header"]["name"], "Ada Lovelace");

        let (status, text) = send(&app, Method::GET, "/api/v1/resume/export", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(text).unwrap().starts_with("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_invalid_edit_is_rejected_with_error_body() {
        let (status, body) = send_json(
            &app(),
            Method::POST,
            "/api/v1/resume/edits",
            Some(json!({ "op": "remove_item", "section": "education", "index": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_EDIT");
    }

    #[tokio::test]
    async fn test_replace_accepts_legacy_flat_skills() {
        let (status, body) = send_json(
            &app(),
            Method::PUT,
            "/api/v1/resume",
            Some(json!({ "summary": "Builder", "skills": "Rust, Go" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["document"]["skills"]["technical"], json!(["Rust", "Go"]));
    }

    #[tokio::test]
    async fn test_preview_query_overrides_persisted_template() {
        let app = app();
        send_json(&app, Method::POST, "/api/v1/resume/sample", None).await;
        let (status, body) = send_json(
            &app,
            Method::GET,
            "/api/v1/preview?template=modern&theme=Navy",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["layout"], "two_region");
        assert_eq!(body["accent"], "hsl(220, 60%, 35%)");

        let (_, prefs) = send_json(&app, Method::GET, "/api/v1/preferences", None).await;
        assert_eq!(prefs["template"], "Classic");
        assert_eq!(prefs["theme"], "Teal");
    }

    #[tokio::test]
    async fn test_preferences_persist_and_reject_unknown_values() {
        let app = app();
        let (status, body) = send_json(
            &app,
            Method::PUT,
            "/api/v1/preferences",
            Some(json!({ "template": "Minimal", "theme": "Forest" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "Minimal");

        let (status, body) = send_json(
            &app,
            Method::PUT,
            "/api/v1/preferences",
            Some(json!({ "theme": "Magenta" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, prefs) = send_json(&app, Method::GET, "/api/v1/preferences", None).await;
        assert_eq!(prefs["theme"], "Forest");
        assert_eq!(prefs["palette"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_critique_reports_both_findings() {
        let (_, body) = send_json(
            &app(),
            Method::POST,
            "/api/v1/resume/bullets/critique",
            Some(json!({ "text": "helped the design of a login page" })),
        )
        .await;
        assert_eq!(
            body["findings"],
            json!(["Start with a strong action verb.", "Add measurable impact (numbers)."])
        );
    }

    #[tokio::test]
    async fn test_locked_step_redirects_to_first_unmet() {
        let app = app();
        complete_steps(&app, 3).await;
        let (status, body) = send_json(&app, Method::GET, "/api/v1/steps/5/enter", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["decision"], "redirect");
        assert_eq!(body["to"], 3);
        assert_eq!(body["step"]["id"], "04");

        let (_, body) = send_json(&app, Method::GET, "/api/v1/steps/3/enter", None).await;
        assert_eq!(body["decision"], "enter");
    }

    #[tokio::test]
    async fn test_bare_entry_lands_on_first_step() {
        let (_, body) = send_json(&app(), Method::GET, "/api/v1/steps/entry", None).await;
        assert_eq!(body["decision"], "enter");
        assert_eq!(body["target"], json!({ "kind": "step", "index": 0 }));
    }

    #[tokio::test]
    async fn test_unknown_step_id_is_not_found() {
        let (status, _) = send_json(&app(), Method::PUT, "/api/v1/steps/09/artifact", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_proof_is_gated_until_every_step_is_complete() {
        let app = app();
        complete_steps(&app, 7).await;
        let (_, body) = send_json(&app, Method::GET, "/api/v1/proof", None).await;
        assert_eq!(body["decision"], "redirect");
        assert_eq!(body["to"], 7);

        complete_steps(&app, 8).await;
        let (_, body) = send_json(
            &app,
            Method::PUT,
            "/api/v1/proof/links",
            Some(json!({ "github": "https://github.com/ada/rb" })),
        )
        .await;
        assert_eq!(body["completed"], 8);
        assert_eq!(body["links"]["github"], "https://github.com/ada/rb");

        let (status, text) = send(&app, Method::GET, "/api/v1/proof/submission", None).await;
        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("Status: 8/8 Steps Completed"));
        assert!(text.contains("- GitHub: https://github.com/ada/rb"));
    }

    #[tokio::test]
    async fn test_reset_clears_document_and_markers() {
        let app = app();
        send_json(&app, Method::POST, "/api/v1/resume/sample", None).await;
        complete_steps(&app, 2).await;

        let (status, _) = send_json(&app, Method::POST, "/api/v1/reset", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, resume) = send_json(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(resume["score"]["points"], 0);
        let (_, steps) = send_json(&app, Method::GET, "/api/v1/steps", None).await;
        assert!(steps
            .as_array()
            .unwrap()
            .iter()
            .all(|s| s["complete"] == false));
    }
}
