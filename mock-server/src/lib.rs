//! Naive in-memory HTTP file server used as an integration-test target.
//!
//! # Design
//! Files live in an `Arc<RwLock<HashMap>>` keyed by request path. `GET`
//! serves stored bytes, `POST` stores the raw body, `GET /` lists the
//! store's contents. The `_with_store` constructors hand the store to
//! the caller so tests can assert on server-side effects of requests
//! whose responses the client never reads.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// One row of the `GET /` listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size: usize,
}

pub type Store = Arc<RwLock<HashMap<String, Vec<u8>>>>;

pub fn app() -> Router {
    app_with_store(Store::default())
}

pub fn app_with_store(store: Store) -> Router {
    Router::new()
        .route("/", get(list_files))
        .route("/{*path}", get(get_file).post(store_file))
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_store(listener, Store::default()).await
}

pub async fn run_with_store(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_store(store)).await
}

async fn list_files(State(store): State<Store>) -> Json<Vec<FileEntry>> {
    let files = store.read().await;
    let mut entries: Vec<FileEntry> = files
        .iter()
        .map(|(name, bytes)| FileEntry {
            name: name.clone(),
            size: bytes.len(),
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Json(entries)
}

async fn get_file(
    State(store): State<Store>,
    Path(path): Path<String>,
) -> Result<Vec<u8>, StatusCode> {
    let files = store.read().await;
    files.get(&path).cloned().ok_or(StatusCode::NOT_FOUND)
}

async fn store_file(State(store): State<Store>, Path(path): Path<String>, body: Bytes) -> StatusCode {
    debug!(%path, bytes = body.len(), "storing upload");
    store.write().await.insert(path, body.to_vec());
    StatusCode::CREATED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_entry_serializes_to_json() {
        let entry = FileEntry {
            name: "a.txt".to_string(),
            size: 3,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "a.txt");
        assert_eq!(json["size"], 3);
    }

    #[test]
    fn file_entry_roundtrips_through_json() {
        let entry = FileEntry {
            name: "dir/b.bin".to_string(),
            size: 1000,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: FileEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
