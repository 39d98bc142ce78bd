//! View-State Controller
//!
//! Issues one remote call per user action and folds the settled result
//! into the local mirror. Notifications are raised only after the call
//! resolves, one per action.

mod confirm;
mod notification;
mod state;


use tracing::{debug, error, info, warn};

use crate::client::CollectionApi;
use crate::config::LikePolicy;
use crate::domain::{ClientError, Draft, Operation, Record, RecordId, RequestFailed};

pub use confirm::{Confirm, Prompt};
pub use notification::{Notification, NotificationSlot, Severity};
pub use state::{PendingOp, SharedState, StateHandle, ViewState};

/// How an action ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Remote call succeeded and the mirror was updated
    Completed,
    /// User said no at the confirmation prompt
    Declined,
    /// A conflicting operation is in flight; nothing was sent
    Busy,
    /// Target record is not in the mirror
    Ignored,
    Failed(RequestFailed),
}

pub struct Controller<A, C, S> {
    api: A,
    confirm: C,
    state: S,
    like_policy: LikePolicy,
}

impl<A, C, S> Controller<A, C, S> {
    pub fn new(api: A, confirm: C, state: S) -> Self {
        Self {
            api,
            confirm,
            state,
            like_policy: LikePolicy::default(),
        }
    }

    pub fn with_like_policy(mut self, like_policy: LikePolicy) -> Self {
        self.like_policy = like_policy;
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<A, C, S> Controller<A, C, S>
where
    A: CollectionApi,
    C: Confirm,
    S: StateHandle,
{
    // ========================
    // Actions
    // ========================

    /// Replace the mirror with the full remote collection.
    ///
    /// Only starts when nothing else awaits the server, so no mutation can
    /// land between the fetch and the overwrite.
    pub async fn load(&self) -> Outcome {
        let mut started = false;
        self.state.write(|s| started = s.is_idle() && s.begin(PendingOp::Load));
        if !started {
            warn!("requests in flight, load skipped");
            return Outcome::Busy;
        }

        let outcome = match self.api.list_all().await {
            Ok(records) => {
                let count = records.len();
                info!(count, "collection loaded");
                self.state.write(|s| {
                    s.replace_all(records);
                    s.notify(Notification::info(format!("loaded {} blogs", count)));
                });
                Outcome::Completed
            }
            Err(err) => self.report(Operation::Load, err),
        };

        self.finish(&PendingOp::Load);
        outcome
    }

    /// Create a record, or replace the one sharing the draft's url
    /// after the user confirms
    pub async fn add(&self, draft: Draft) -> Outcome {
        if let Err(err) = draft.validate() {
            return self.report(Operation::Create, err);
        }
        if self.loading() {
            warn!(url = %draft.url, "collection still loading, submit skipped");
            return Outcome::Busy;
        }
        if !self.begin(PendingOp::Submit) {
            warn!(url = %draft.url, "submit already in flight");
            return Outcome::Busy;
        }

        let existing = self.state.read(|s| s.find_by_url(&draft.url).cloned());
        let outcome = match existing {
            Some(existing) => self.replace_duplicate(existing, &draft).await,
            None => self.create(&draft).await,
        };

        self.finish(&PendingOp::Submit);
        outcome
    }

    /// Submit whatever is currently in the form
    pub async fn submit_draft(&self) -> Outcome {
        let draft = self.state.read(|s| s.draft().clone());
        self.add(draft).await
    }

    /// Bump likes locally, then persist according to the like policy
    pub async fn like(&self, id: &RecordId) -> Outcome {
        let persist = self.like_policy == LikePolicy::Persist;
        let mut busy = false;
        let mut liked = None;
        self.state.write(|s| {
            busy = s.is_pending(&PendingOp::Load) || s.is_record_locked(id);
            if busy {
                return;
            }
            liked = s.increment_likes(id);
            if persist && liked.is_some() {
                s.begin_like(id);
            }
        });
        if busy {
            warn!(%id, "record busy, like skipped");
            return Outcome::Busy;
        }
        let Some(record) = liked else {
            warn!(%id, "like on unknown record");
            return Outcome::Ignored;
        };
        debug!(%id, likes = record.likes, "like applied locally");

        if persist {
            let result = self.api.update(id, &record).await;
            self.state.write(|s| s.finish_like(id));
            if let Err(err) = result {
                return self.report(Operation::Like, err);
            }
        }

        self.state.write(|s| {
            s.notify(Notification::info(format!("{} liked", record.title)));
        });
        Outcome::Completed
    }

    /// Delete a record after the user confirms
    pub async fn delete(&self, id: &RecordId) -> Outcome {
        let Some(title) = self.state.read(|s| s.get(id).map(|r| r.title.clone())) else {
            warn!(%id, "delete on unknown record");
            return Outcome::Ignored;
        };
        if self.loading() {
            warn!(%id, "collection still loading, delete skipped");
            return Outcome::Busy;
        }
        let op = PendingOp::Delete(id.clone());
        if !self.begin(op.clone()) {
            warn!(%id, "delete already in flight");
            return Outcome::Busy;
        }

        let outcome = if self.confirm.confirm(&Prompt::Delete { title }).await {
            match self.api.remove(id).await {
                Ok(()) => {
                    info!(%id, "record deleted");
                    self.state.write(|s| {
                        s.remove(id);
                        s.notify(Notification::info("the blog information deleted"));
                    });
                    Outcome::Completed
                }
                Err(err) => self.report(Operation::Delete, err),
            }
        } else {
            debug!(%id, "delete declined");
            Outcome::Declined
        };

        self.finish(&op);
        outcome
    }

    pub fn set_filter(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.write(|s| s.set_filter(text));
    }

    pub fn show_all(&self) {
        self.state.write(|s| s.show_all());
    }

    /// Dismiss the notification if `generation` is still the one showing
    pub fn expire_notification(&self, generation: u64) {
        self.state.write(|s| {
            s.expire_notification(generation);
        });
    }

    // ========================
    // Helpers
    // ========================

    async fn create(&self, draft: &Draft) -> Outcome {
        match self.api.create(draft).await {
            Ok(record) => {
                info!(id = %record.id, "record created");
                let message = format!("{} blog added", record.title);
                self.state.write(|s| {
                    s.append(record);
                    s.clear_draft();
                    s.notify(Notification::info(message));
                });
                Outcome::Completed
            }
            Err(err) => self.report(Operation::Create, err),
        }
    }

    async fn replace_duplicate(&self, existing: Record, draft: &Draft) -> Outcome {
        let id = existing.id;
        let prompt = Prompt::ReplaceDuplicate { url: existing.url };
        if !self.confirm.confirm(&prompt).await {
            debug!(%id, "replace declined");
            return Outcome::Declined;
        }

        // Re-read after the prompt: the record may have changed meanwhile
        let op = PendingOp::Update(id.clone());
        let mut busy = false;
        let mut current = None;
        self.state.write(|s| {
            busy = s.is_liking(&id) || s.is_record_locked(&id);
            if !busy {
                current = s.get(&id).cloned();
                if current.is_some() {
                    s.begin(op.clone());
                }
            }
        });
        if busy {
            warn!(%id, "record busy, replace skipped");
            return Outcome::Busy;
        }
        let Some(current) = current else {
            warn!(%id, "replaced record no longer mirrored");
            return Outcome::Ignored;
        };

        let patched = current.with_draft(draft);
        let result = self.api.update(&id, &patched).await;
        self.finish(&op);
        match result {
            Ok(stored) => {
                info!(id = %stored.id, "record replaced");
                let message = format!("{} information changed", stored.url);
                self.state.write(|s| {
                    if !s.replace(stored) {
                        warn!(%id, "replaced record no longer mirrored");
                    }
                    s.clear_draft();
                    s.notify(Notification::info(message));
                });
                Outcome::Completed
            }
            Err(err) => self.report(Operation::Update, err),
        }
    }

    /// Raise the error notification. A 404 means the server no longer has
    /// the record, so the local copy goes too.
    fn report(&self, operation: Operation, err: ClientError) -> Outcome {
        let failure = RequestFailed::new(operation, err);
        error!(%failure, "request failed");
        let notification = Notification::from(&failure);
        self.state.write(|s| {
            if let ClientError::NotFound(id) = &failure.reason {
                s.remove(id);
            }
            s.notify(notification);
        });
        Outcome::Failed(failure)
    }

    fn loading(&self) -> bool {
        self.state.read(|s| s.is_pending(&PendingOp::Load))
    }

    fn begin(&self, op: PendingOp) -> bool {
        let mut started = false;
        self.state.write(|s| started = s.begin(op));
        started
    }

    fn finish(&self, op: &PendingOp) {
        self.state.write(|s| s.finish(op));
    }
}
