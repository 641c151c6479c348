pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job catalog
        .route("/api/jobs", get(jobs::handle_list_jobs))
        // Matching API
        .route("/api/match/calculate", post(handlers::handle_calculate))
        .route("/api/match/weights", get(handlers::handle_weights))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::jobs::{JobSnapshot, StaticJobSource};
    use crate::models::job::JobPosting;

    fn app(snapshot: JobSnapshot) -> Router {
        build_router(AppState {
            job_source: Arc::new(StaticJobSource(snapshot)),
        })
    }

    fn catalog() -> Vec<JobPosting> {
        serde_json::from_value(json!([
            {
                "id": 10,
                "title": "Accountant",
                "company": "Ledger Co",
                "location": "Chennai",
                "is_remote": false,
                "required_skills": ["Tally", "Excel"]
            },
            {
                "id": 11,
                "title": "Senior Backend Engineer",
                "company": "Acme",
                "location": "Bengaluru",
                "is_remote": false,
                "salary_min": 600000,
                "salary_max": 900000,
                "min_experience_years": 4,
                "required_skills": ["Python", "FastAPI", "PostgreSQL"],
                "nice_to_have_skills": []
            }
        ]))
        .unwrap()
    }

    fn candidate_body() -> Value {
        json!({
            "full_name": "Asha Rao",
            "skills": ["Python", "FastAPI"],
            "preferred_locations": ["Bangalore"],
            "experience_years": 1,
            "expected_salary": {"min": 800000, "max": 800000},
            "preferred_roles": ["Backend Developer"],
            "education": {"degree": "B.Tech", "field": "Computer Science"}
        })
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(JobSnapshot::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_calculate_ranks_jobs() {
        let (status, body) = post_json(
            app(JobSnapshot::available(catalog())),
            "/api/match/calculate",
            candidate_body().to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidate_name"], "Asha Rao");
        assert_eq!(body["target_role_family"], "backend");
        assert_eq!(body["total_jobs"], 2);
        assert_eq!(body["source_available"], true);
        assert_eq!(body["candidate_education"]["degree"], "B.Tech");

        let top = &body["matches"][0];
        assert_eq!(top["job_id"], 11);
        assert_eq!(top["total_score"], 75.1);
        assert_eq!(top["match_tier"], "Good");
        assert_eq!(top["skills_score"], 73.3);
        assert_eq!(top["missing_required_skills"], json!(["PostgreSQL"]));
        assert_eq!(body["matches"][1]["job_id"], 10);
    }

    #[tokio::test]
    async fn test_calculate_with_no_jobs_is_empty_not_error() {
        let (status, body) = post_json(
            app(JobSnapshot::unavailable()),
            "/api/match/calculate",
            candidate_body().to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matches"], json!([]));
        assert_eq!(body["source_available"], false);
    }

    #[tokio::test]
    async fn test_calculate_rejects_invalid_fields() {
        let mut candidate = candidate_body();
        candidate["experience_years"] = json!(-3);
        let (status, body) = post_json(
            app(JobSnapshot::available(catalog())),
            "/api/match/calculate",
            candidate.to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["details"][0]["field"], "experience_years");
    }

    #[tokio::test]
    async fn test_calculate_rejects_missing_skills() {
        let (status, body) = post_json(
            app(JobSnapshot::available(catalog())),
            "/api/match/calculate",
            json!({"full_name": "No Skills"}).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_list_jobs_returns_catalog() {
        let (status, body) = get_json(app(JobSnapshot::available(catalog())), "/api/jobs").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["jobs"][0]["id"], 10);
        assert_eq!(body["jobs"][1]["required_skills"], json!(["Python", "FastAPI", "PostgreSQL"]));
    }

    #[tokio::test]
    async fn test_list_jobs_without_catalog_is_empty() {
        let (status, body) = get_json(app(JobSnapshot::unavailable()), "/api/jobs").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"jobs": []}));
    }

    #[tokio::test]
    async fn test_weights_endpoint() {
        let response = app(JobSnapshot::default())
            .oneshot(
                Request::builder()
                    .uri("/api/match/weights")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["weights"][0]["factor"], "skills");
        assert_eq!(body["weights"][0]["percentage"], 40);
        assert_eq!(body["tiers"][3]["tier"], "Poor");
    }
}
