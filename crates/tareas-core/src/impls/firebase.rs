//! Firebase Realtime Database task store.
//!
//! Thin REST wrapper: one `reqwest::Client` for the instance lifetime, no
//! retry or backoff, transport failures propagate to the caller unmodified.
//! The only structural contract owned here is the collection path `tasks`
//! and the per-record shape of [`Task`].

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::domain::{NewTask, StoreError, Task, TaskId, sort_newest_first};
use crate::ports::{Clock, SystemClock, TaskStore, ToggleOutcome};

const COLLECTION: &str = "tasks";

/// `POST /<collection>.json` answers with the server-minted push key.
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// Remote [`TaskStore`] over a Firebase Realtime Database instance.
///
/// Explicitly constructed from [`StoreConfig`] and passed to callers by
/// value or `Arc`; there is no process-wide handle. Dropping the store
/// drops the HTTP client, which is the whole teardown.
pub struct FirebaseTaskStore {
    http: Client,
    base_url: String,
    auth: Option<String>,
    clock: Arc<dyn Clock>,
}

impl FirebaseTaskStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Injected clock variant, so tests can pin `createdAt` stamps.
    pub fn with_clock(config: &StoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            http: Client::new(),
            base_url: config.database_url.trim_end_matches('/').to_string(),
            auth: config.api_key.clone(),
            clock,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(key) = &self.auth {
            req = req.query(&[("auth", key.as_str())]);
        }
        req
    }
}

fn check_status(resp: Response, operation: &'static str) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(StoreError::Status {
            status: status.as_u16(),
            operation,
        })
    }
}

/// Turn the key -> record map the REST transport returns into tasks.
///
/// The map key is authoritative for `id`; records written by other clients
/// may carry a stale or missing id field.
fn decode_records(records: BTreeMap<String, Value>) -> Result<Vec<Task>, StoreError> {
    let mut tasks = Vec::with_capacity(records.len());
    for (key, mut value) in records {
        if let Some(object) = value.as_object_mut() {
            object.insert("id".to_string(), Value::String(key));
        }
        tasks.push(serde_json::from_value(value)?);
    }
    Ok(tasks)
}

#[async_trait]
impl TaskStore for FirebaseTaskStore {
    async fn create(&self, input: NewTask) -> Result<Task, StoreError> {
        let mut task = Task {
            id: TaskId::new(""),
            title: input.title,
            category: input.category,
            priority: input.priority,
            completed: false,
            archived: false,
            cost: input.cost,
            time: input.time,
            created_at: Some(self.clock.now_millis()),
        };

        // POST mints the push key; the follow-up PUT writes the record back
        // under that key with `id` filled in, as the original client did.
        let mut body = serde_json::to_value(&task)?;
        if let Some(object) = body.as_object_mut() {
            object.remove("id");
        }

        let resp = self
            .request(Method::POST, COLLECTION)
            .json(&body)
            .send()
            .await?;
        let push: PushResponse = check_status(resp, "create")?.json().await?;
        if push.name.is_empty() {
            return Err(StoreError::MissingKey);
        }
        task.id = TaskId::new(push.name);

        let path = format!("{COLLECTION}/{}", task.id);
        let resp = self.request(Method::PUT, &path).json(&task).send().await?;
        check_status(resp, "create")?;

        tracing::debug!(id = %task.id, "created task");
        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        let resp = self.request(Method::GET, COLLECTION).send().await?;
        // An empty collection comes back as a JSON `null` body.
        let records: Option<BTreeMap<String, Value>> =
            check_status(resp, "list")?.json().await?;

        let mut tasks = decode_records(records.unwrap_or_default())?;
        sort_newest_first(&mut tasks);
        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    async fn toggle_completed(&self, id: &TaskId) -> Result<ToggleOutcome, StoreError> {
        let path = format!("{COLLECTION}/{id}");

        let resp = self.request(Method::GET, &path).send().await?;
        let record: Option<Value> = check_status(resp, "toggle")?.json().await?;
        let Some(record) = record else {
            tracing::debug!(id = %id, "toggle on missing id, no-op");
            return Ok(ToggleOutcome::NotFound);
        };

        let completed = !record
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let resp = self
            .request(Method::PATCH, &path)
            .json(&serde_json::json!({ "completed": completed }))
            .send()
            .await?;
        check_status(resp, "toggle")?;

        tracing::debug!(id = %id, completed, "toggled task");
        Ok(ToggleOutcome::Toggled { completed })
    }

    async fn set_archived(&self, id: &TaskId, archived: bool) -> Result<(), StoreError> {
        let path = format!("{COLLECTION}/{id}");

        // Existence check first: a PATCH against a missing id would mint a
        // partial record, which no caller ever wants.
        let resp = self.request(Method::GET, &path).send().await?;
        let record: Option<Value> = check_status(resp, "archive")?.json().await?;
        if record.is_none() {
            return Err(StoreError::NotFound(id.clone()));
        }

        let resp = self
            .request(Method::PATCH, &path)
            .json(&serde_json::json!({ "archived": archived }))
            .send()
            .await?;
        check_status(resp, "archive")?;

        tracing::debug!(id = %id, archived, "set archived flag");
        Ok(())
    }
}
