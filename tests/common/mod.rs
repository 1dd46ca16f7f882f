#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use journal_api::auth::{issue_token, TokenVerifier};
use journal_api::database::models::{EntryFields, JournalEntry};
use journal_api::database::{JournalStore, MutationOutcome, StoreError};
use journal_api::routes;
use journal_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory store with the same ownership scoping as the Postgres backend,
/// so the whole HTTP surface can be exercised without infrastructure.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<JournalEntry>>,
}

#[async_trait]
impl JournalStore for MemoryStore {
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert(&self, owner: Uuid, fields: &EntryFields) -> Result<JournalEntry, StoreError> {
        let now = Utc::now();
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            title: fields.title.clone(),
            date: fields.date,
            entry: fields.entry.clone(),
            owner,
            created_at: now,
            updated_at: now,
        };

        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<JournalEntry>, StoreError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn list_owned(&self, owner: Uuid) -> Result<Vec<JournalEntry>, StoreError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().filter(|e| e.owner == owner).cloned().collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<JournalEntry>, StoreError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().filter(|e| e.title == title).cloned().collect())
    }

    async fn update_owned(
        &self,
        owner: Uuid,
        id: Uuid,
        fields: &EntryFields,
    ) -> Result<MutationOutcome, StoreError> {
        let mut entries = self.entries.lock().unwrap();
        let mut affected = 0;

        for e in entries.iter_mut().filter(|e| e.id == id && e.owner == owner) {
            e.title = fields.title.clone();
            e.date = fields.date;
            e.entry = fields.entry.clone();
            e.updated_at = Utc::now();
            affected += 1;
        }

        Ok(MutationOutcome::new(affected))
    }

    async fn delete_owned(&self, owner: Uuid, id: Uuid) -> Result<MutationOutcome, StoreError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !(e.id == id && e.owner == owner));

        Ok(MutationOutcome::new((before - entries.len()) as u64))
    }
}

/// Fresh app over an empty in-memory store
pub fn test_app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::default()),
        TokenVerifier::new(TEST_SECRET),
    );
    routes::app(state)
}

/// Bearer token the test app will accept for `user`
pub fn bearer_for(user: Uuid) -> String {
    issue_token(user, TEST_SECRET, 1).expect("signing a test token")
}

/// Dispatch one request in-process and decode the response body as JSON.
/// Bodies that are not JSON (e.g. extractor rejections) come back as Null.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("router is infallible");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("reading response body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("building request")
}

pub fn get_authed(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("building request")
}

/// Bodyless request with a bearer token, for DELETE
pub fn authed(method: &str, path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("building request")
}

/// JSON-bodied request with an optional bearer token
pub fn json_request(method: &str, path: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder
        .body(Body::from(serde_json::to_vec(body).expect("serializing body")))
        .expect("building request")
}

/// Create an entry through the API, asserting success, and return its data
pub async fn create_entry(
    app: &Router,
    token: &str,
    title: &str,
    date: &str,
    entry: &str,
) -> Value {
    let payload = json!({ "journal": { "title": title, "date": date, "entry": entry } });
    let (status, body) = send(app, json_request("POST", "/api/journal", Some(token), &payload)).await;

    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    body["data"].clone()
}
