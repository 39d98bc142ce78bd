//! Remote Collection Client
//!
//! Defines the abstract interface to the record collection.
//! Implementations can talk HTTP, keep records in memory, etc.

mod http;
mod memory;

use async_trait::async_trait;

use crate::domain::{ClientResult, Draft, Record, RecordId};

pub use http::HttpCollection;
pub use memory::MemoryCollection;

/// CRUD access to the remote record collection
///
/// One request per call; no retries, batching or timeouts.
/// Futures are not `Send` so the trait works on single-threaded WASM.
#[async_trait(?Send)]
pub trait CollectionApi {
    /// Fetch the whole collection in store order
    async fn list_all(&self) -> ClientResult<Vec<Record>>;

    /// Store a new record; the server assigns `id` and `likes = 0`
    async fn create(&self, draft: &Draft) -> ClientResult<Record>;

    /// Replace the record at `id` with `record`
    async fn update(&self, id: &RecordId, record: &Record) -> ClientResult<Record>;

    /// Delete the record at `id`
    async fn remove(&self, id: &RecordId) -> ClientResult<()>;
}
