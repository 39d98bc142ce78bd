//! Blog Sync
//!
//! Layered the same way for every client:
//! - domain: records, drafts and errors
//! - client: access to the remote collection
//! - controller: view state and reconciliation after each remote call

pub mod client;
pub mod config;
pub mod controller;
pub mod domain;

pub use client::{CollectionApi, HttpCollection, MemoryCollection};
pub use config::{ClientConfig, LikePolicy};
pub use controller::{
    Confirm, Controller, Notification, NotificationSlot, Outcome, PendingOp, Prompt, Severity,
    SharedState, StateHandle, ViewState,
};
pub use domain::{ClientError, ClientResult, Draft, Operation, Record, RecordId, RequestFailed};
