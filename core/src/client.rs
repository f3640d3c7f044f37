//! Request builder and response parser for the task document store.
//!
//! # Design
//! `TaskClient` holds only the store location and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces a `RequestDescriptor` and a `parse_*` method that consumes the
//! JSON the hook decoded. The hook sits in between and owns the round-trip.

use serde_json::Value;

use crate::descriptor::RequestDescriptor;
use crate::error::RequestError;
use crate::http::HttpMethod;
use crate::types::{PushResponse, TaskItem, TaskRecord};

pub const DEFAULT_COLLECTION: &str = "tasks";

#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
    collection: String,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = collection.trim_matches('/').to_string();
        self
    }

    /// URL of the collection document, e.g. `https://host/tasks.json`.
    pub fn collection_url(&self) -> String {
        format!("{}/{}.json", self.base_url, self.collection)
    }

    pub fn build_fetch_tasks(&self) -> RequestDescriptor {
        RequestDescriptor::new(self.collection_url())
    }

    pub fn build_add_task(&self, text: &str) -> Result<RequestDescriptor, RequestError> {
        RequestDescriptor::new(self.collection_url())
            .method(HttpMethod::Post)
            .header("Content-Type", "application/json")
            .json(&TaskRecord {
                text: text.to_string(),
            })
    }

    /// Flatten the collection document into list items, keeping key order.
    ///
    /// An empty collection comes back from the store as `null`.
    pub fn parse_fetch_tasks(&self, document: Value) -> Result<Vec<TaskItem>, RequestError> {
        let entries = match document {
            Value::Null => return Ok(Vec::new()),
            Value::Object(entries) => entries,
            other => {
                return Err(RequestError::Deserialization(format!(
                    "expected a task collection object, got {}",
                    kind(&other)
                )))
            }
        };

        entries
            .into_iter()
            .map(|(id, record)| {
                let record: TaskRecord = serde_json::from_value(record)
                    .map_err(|e| RequestError::Deserialization(format!("task {id}: {e}")))?;
                Ok(TaskItem {
                    id,
                    text: record.text,
                })
            })
            .collect()
    }

    pub fn parse_add_task(&self, text: &str, reply: Value) -> Result<TaskItem, RequestError> {
        let reply: PushResponse = serde_json::from_value(reply)
            .map_err(|e| RequestError::Deserialization(e.to_string()))?;
        Ok(TaskItem {
            id: reply.name,
            text: text.to_string(),
        })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
