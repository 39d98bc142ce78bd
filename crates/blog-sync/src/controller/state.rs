//! View State
//!
//! In-memory mirror of the collection plus transient form, filter,
//! notification and pending fields. Mutated only through the methods here.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::notification::{Notification, NotificationSlot};
use crate::domain::{Draft, Record, RecordId};

/// Operation currently awaiting a remote response
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PendingOp {
    Load,
    /// Form submit, create or duplicate-replace
    Submit,
    /// Duplicate-url replace of this record
    Update(RecordId),
    Delete(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    records: Vec<Record>,
    draft: Draft,
    filter: String,
    show_all: bool,
    notification: NotificationSlot,
    pending: BTreeSet<PendingOp>,
    /// Persisted likes awaiting the server, per record
    liking: BTreeMap<RecordId, usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            draft: Draft::default(),
            filter: String::new(),
            show_all: true,
            notification: NotificationSlot::default(),
            pending: BTreeSet::new(),
            liking: BTreeMap::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    // ========================
    // Collection Mirror
    // ========================

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// First record with this url, in sequence order
    pub fn find_by_url(&self, url: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.url == url)
    }

    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the record with the same id in place
    pub fn replace(&mut self, updated: Record) -> bool {
        match self.records.iter_mut().find(|record| record.id == updated.id) {
            Some(record) => {
                *record = updated;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        let index = self.records.iter().position(|record| &record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Bump likes by exactly one; returns the updated record
    pub fn increment_likes(&mut self, id: &RecordId) -> Option<Record> {
        let record = self.records.iter_mut().find(|record| &record.id == id)?;
        record.likes = record.likes.saturating_add(1);
        Some(record.clone())
    }

    // ========================
    // Filter Projection
    // ========================

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_show_all(&self) -> bool {
        self.show_all
    }

    /// Set the filter text and switch to filtered mode
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.show_all = false;
    }

    pub fn show_all(&mut self) {
        self.show_all = true;
    }

    /// Records to render: everything, or titles containing the filter
    /// (case-insensitive substring)
    pub fn visible(&self) -> Vec<&Record> {
        if self.show_all {
            return self.records.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.title.to_lowercase().contains(&needle))
            .collect()
    }

    // ========================
    // Draft
    // ========================

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.draft.author = author.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.draft.url = url.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft = Draft::default();
    }

    // ========================
    // Notification
    // ========================

    pub fn notification(&self) -> &NotificationSlot {
        &self.notification
    }

    pub fn notify(&mut self, notification: Notification) -> u64 {
        self.notification.show(notification)
    }

    pub fn expire_notification(&mut self, generation: u64) -> bool {
        self.notification.expire(generation)
    }

    // ========================
    // Pending Operations
    // ========================

    pub fn is_pending(&self, op: &PendingOp) -> bool {
        self.pending.contains(op)
    }

    /// Mark `op` in flight; false if it already was
    pub fn begin(&mut self, op: PendingOp) -> bool {
        self.pending.insert(op)
    }

    pub fn finish(&mut self, op: &PendingOp) {
        self.pending.remove(op);
    }

    /// A replace or delete of this record is in flight
    pub fn is_record_locked(&self, id: &RecordId) -> bool {
        self.is_pending(&PendingOp::Update(id.clone()))
            || self.is_pending(&PendingOp::Delete(id.clone()))
    }

    pub fn is_liking(&self, id: &RecordId) -> bool {
        self.liking.contains_key(id)
    }

    /// Likes stack: several may be in flight for one record
    pub fn begin_like(&mut self, id: &RecordId) {
        *self.liking.entry(id.clone()).or_insert(0) += 1;
    }

    pub fn finish_like(&mut self, id: &RecordId) {
        if let Some(count) = self.liking.get_mut(id) {
            *count -= 1;
            if *count == 0 {
                self.liking.remove(id);
            }
        }
    }

    /// Nothing is awaiting the server
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.liking.is_empty()
    }
}

/// Access to the cell holding the `ViewState`
///
/// Never held across an await: callers read or write, then let go.
pub trait StateHandle {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;

    fn write(&self, f: impl FnOnce(&mut ViewState));
}

/// Plain shared cell for native use and tests
pub type SharedState = Rc<RefCell<ViewState>>;

impl StateHandle for SharedState {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&*self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut *self.borrow_mut())
    }
}
