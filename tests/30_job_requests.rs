mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

// Malformed requests are rejected before any query runs

#[tokio::test]
async fn create_job_bad_request_with_missing_data() -> Result<()> {
    let state = common::lazy_state();
    let token = common::admin_token(&state.config);
    let server = common::spawn_app(state).await?;

    let res = reqwest::Client::new()
        .post(format!("{}/jobs", server.base_url))
        .bearer_auth(token)
        .json(&json!({ "title": "new", "equity": 0 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"]["status"], 400, "unexpected body: {}", body);
    Ok(())
}

#[tokio::test]
async fn create_job_bad_request_with_invalid_data() -> Result<()> {
    let state = common::lazy_state();
    let token = common::admin_token(&state.config);
    let server = common::spawn_app(state).await?;

    let res = reqwest::Client::new()
        .post(format!("{}/jobs", server.base_url))
        .bearer_auth(token)
        .json(&json!({ "title": "secretary", "salary": 50000, "equity": 2.5, "companyHandle": "c1" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(
        body["error"]["fieldErrors"].get("equity").is_some(),
        "expected equity field error: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn patch_job_bad_request_with_empty_body() -> Result<()> {
    let state = common::lazy_state();
    let token = common::admin_token(&state.config);
    let server = common::spawn_app(state).await?;

    let res = reqwest::Client::new()
        .patch(format!("{}/jobs/1", server.base_url))
        .bearer_auth(token)
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"]["message"], "No data", "unexpected body: {}", body);
    Ok(())
}

#[tokio::test]
async fn patch_job_bad_request_on_immutable_or_null_fields() -> Result<()> {
    let state = common::lazy_state();
    let token = common::admin_token(&state.config);
    let server = common::spawn_app(state).await?;
    let client = reqwest::Client::new();

    for body in [json!({ "id": 99 }), json!({ "companyHandle": "c2" }), json!({ "title": null })] {
        let res = client
            .patch(format!("{}/jobs/1", server.base_url))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {} was accepted", body);
    }
    Ok(())
}

#[tokio::test]
async fn list_jobs_bad_request_on_unknown_or_invalid_filters() -> Result<()> {
    let server = common::spawn_app(common::lazy_state()).await?;
    let client = reqwest::Client::new();

    for query in ["salary=5", "minSalary=-5", "minSalary=lots", "hasEquity=maybe"] {
        let res = client
            .get(format!("{}/jobs?{}", server.base_url, query))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query {} was accepted", query);
    }
    Ok(())
}

#[tokio::test]
async fn get_job_bad_request_on_non_numeric_id() -> Result<()> {
    let server = common::spawn_app(common::lazy_state()).await?;

    let res = reqwest::Client::new()
        .get(format!("{}/jobs/not-a-number", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn patch_job_field_errors_for_out_of_range_values() -> Result<()> {
    let state = common::lazy_state();
    let token = common::admin_token(&state.config);
    let server = common::spawn_app(state).await?;

    let res = reqwest::Client::new()
        .patch(format!("{}/jobs/1", server.base_url))
        .bearer_auth(token)
        .json(&json!({ "title": "", "salary": -1 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"]["fieldErrors"]["title"], "must not be empty", "body: {}", body);
    assert_eq!(
        body["error"]["fieldErrors"]["salary"],
        "must be greater than or equal to 0",
        "body: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn create_job_field_errors_use_body_names() -> Result<()> {
    let state = common::lazy_state();
    let token = common::admin_token(&state.config);
    let server = common::spawn_app(state).await?;

    let res = reqwest::Client::new()
        .post(format!("{}/jobs", server.base_url))
        .bearer_auth(token)
        .json(&json!({ "title": "x", "companyHandle": "" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(
        body["error"]["fieldErrors"].get("companyHandle").is_some(),
        "expected companyHandle field error: {}",
        body
    );
    Ok(())
}
