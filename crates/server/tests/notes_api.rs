use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::startup::notes_app;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

async fn create(app: &Router, title: &str, content: &str) -> anyhow::Result<Value> {
    let (status, body) = send(app, "POST", "/notes", Some(json!({"title": title, "content": content}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    Ok(body)
}

#[tokio::test]
async fn create_then_get_returns_same_record() -> anyhow::Result<()> {
    let app = notes_app();
    let created = create(&app, "A", "B").await?;
    assert_eq!(created["title"], "A");
    assert_eq!(created["content"], "B");
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty());

    let (status, fetched) = send(&app, "GET", &format!("/notes/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn patch_merges_only_supplied_fields() -> anyhow::Result<()> {
    let app = notes_app();
    let created = create(&app, "A", "B").await?;
    let id = created["id"].as_str().unwrap_or_default();

    let (status, updated) = send(&app, "PATCH", &format!("/notes/{id}"), Some(json!({"title": "C"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": id, "title": "C", "content": "B"}));

    let (status, same) = send(&app, "PATCH", &format!("/notes/{id}"), Some(json!({}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(same, updated);
    Ok(())
}

#[tokio::test]
async fn empty_strings_are_accepted_and_overwrite() -> anyhow::Result<()> {
    let app = notes_app();
    let blank = create(&app, "", "").await?;
    assert_eq!(blank["title"], "");

    let created = create(&app, "A", "B").await?;
    let id = created["id"].as_str().unwrap_or_default();
    let (status, updated) = send(&app, "PATCH", &format!("/notes/{id}"), Some(json!({"title": ""}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": id, "title": "", "content": "B"}));

    let (_, fetched) = send(&app, "GET", &format!("/notes/{id}"), None).await?;
    assert_eq!(fetched, updated);
    Ok(())
}

#[tokio::test]
async fn delete_then_everything_is_404() -> anyhow::Result<()> {
    let app = notes_app();
    let created = create(&app, "A", "B").await?;
    let id = created["id"].as_str().unwrap_or_default();

    let (status, body) = send(&app, "DELETE", &format!("/notes/{id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", &format!("/notes/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Note not found");

    let (status, _) = send(&app, "PATCH", &format!("/notes/{id}"), Some(json!({"title": "x"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/notes/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/notes", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn list_reflects_live_records() -> anyhow::Result<()> {
    let app = notes_app();
    let a = create(&app, "a", "").await?;
    let b = create(&app, "b", "").await?;
    let c = create(&app, "c", "").await?;
    let (status, _) = send(&app, "DELETE", &format!("/notes/{}", b["id"].as_str().unwrap_or_default()), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, list) = send(&app, "GET", "/notes", None).await?;
    assert_eq!(status, StatusCode::OK);
    let items = list.as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 2);
    assert!(items.contains(&a));
    assert!(items.contains(&c));
    Ok(())
}

#[tokio::test]
async fn invalid_bodies_are_422() -> anyhow::Result<()> {
    let app = notes_app();
    let (status, body) = send(&app, "POST", "/notes", Some(json!({"title": "only"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");

    let (status, _) = send(&app, "POST", "/notes", Some(json!({"title": 5, "content": "x"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "POST", "/notes", Some(json!({"content": "x"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = send(&app, "GET", "/notes", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn separate_apps_do_not_share_state() -> anyhow::Result<()> {
    let first = notes_app();
    let second = notes_app();
    create(&first, "A", "B").await?;
    let (_, list) = send(&second, "GET", "/notes", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn health_and_openapi() -> anyhow::Result<()> {
    let app = notes_app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, "GET", "/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/notes"].is_object());
    Ok(())
}
