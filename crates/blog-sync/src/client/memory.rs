//! In-Memory Collection
//!
//! `CollectionApi` backed by a `Vec`, with call counting and failure
//! injection. Clones share the same store.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use super::CollectionApi;
use crate::domain::{ClientError, ClientResult, Draft, Record, RecordId};

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Record>,
    last_id: u64,
    calls: usize,
    fail_next: Option<ClientError>,
}

impl Inner {
    /// Count the call and consume an injected failure, if any
    fn begin(&mut self) -> ClientResult<()> {
        self.calls += 1;
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn position(&self, id: &RecordId) -> ClientResult<usize> {
        self.records
            .iter()
            .position(|record| &record.id == id)
            .ok_or_else(|| ClientError::NotFound(id.clone()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store; later ids continue after the largest numeric id
    pub fn with_records(records: Vec<Record>) -> Self {
        let last_id = records
            .iter()
            .filter_map(|record| record.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                records,
                last_id,
                ..Default::default()
            })),
        }
    }

    /// Current server-side contents
    pub fn snapshot(&self) -> Vec<Record> {
        self.inner.borrow().records.clone()
    }

    /// Number of calls made so far, failed ones included
    pub fn calls(&self) -> usize {
        self.inner.borrow().calls
    }

    /// Make the next call fail with `err`
    pub fn fail_next(&self, err: ClientError) {
        self.inner.borrow_mut().fail_next = Some(err);
    }

    /// Delete behind the client's back, as another session would
    pub fn evict(&self, id: &RecordId) {
        self.inner.borrow_mut().records.retain(|record| &record.id != id);
    }
}

#[async_trait(?Send)]
impl CollectionApi for MemoryCollection {
    async fn list_all(&self) -> ClientResult<Vec<Record>> {
        let mut inner = self.inner.borrow_mut();
        inner.begin()?;
        Ok(inner.records.clone())
    }

    async fn create(&self, draft: &Draft) -> ClientResult<Record> {
        let mut inner = self.inner.borrow_mut();
        inner.begin()?;
        inner.last_id += 1;
        let record = Record {
            id: RecordId::new(inner.last_id.to_string()),
            title: draft.title.clone(),
            author: draft.author.clone(),
            url: draft.url.clone(),
            likes: 0,
        };
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, record: &Record) -> ClientResult<Record> {
        let mut inner = self.inner.borrow_mut();
        inner.begin()?;
        let index = inner.position(id)?;
        let stored = Record {
            id: id.clone(),
            ..record.clone()
        };
        inner.records[index] = stored.clone();
        Ok(stored)
    }

    async fn remove(&self, id: &RecordId) -> ClientResult<()> {
        let mut inner = self.inner.borrow_mut();
        inner.begin()?;
        let index = inner.position(id)?;
        inner.records.remove(index);
        Ok(())
    }
}
