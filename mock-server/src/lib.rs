//! In-memory JSON document store speaking the realtime-database wire format.
//!
//! `GET /<collection>.json` returns the collection object (or `null` when it
//! is empty); `POST /<collection>.json` stores the body under a fresh push
//! key and replies `{"name": key}`. Keys keep insertion order.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushReply {
    pub name: String,
}

pub type Db = Arc<RwLock<HashMap<String, Map<String, Value>>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/{document}", get(read_collection).post(push_record))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "document store listening");
    }
    axum::serve(listener, app()).await
}

/// `tasks.json` -> `tasks`. Anything without the suffix is not a document.
fn collection_name(document: &str) -> Result<&str, StatusCode> {
    match document.strip_suffix(".json") {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

fn push_key() -> String {
    format!("-{}", Uuid::new_v4().simple())
}

async fn read_collection(
    State(db): State<Db>,
    Path(document): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let name = collection_name(&document)?;
    let db = db.read().await;
    let body = match db.get(name) {
        Some(records) if !records.is_empty() => Value::Object(records.clone()),
        _ => Value::Null,
    };
    Ok(Json(body))
}

async fn push_record(
    State(db): State<Db>,
    Path(document): Path<String>,
    Json(record): Json<Value>,
) -> Result<Json<PushReply>, StatusCode> {
    let name = collection_name(&document)?;
    let key = push_key();
    db.write()
        .await
        .entry(name.to_string())
        .or_default()
        .insert(key.clone(), record);
    debug!(collection = name, %key, "record stored");
    Ok(Json(PushReply { name: key }))
}
