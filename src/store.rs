//! View State Store
//!
//! The controller's `ViewState` held in a single reactive signal.

use blog_sync::{StateHandle, ViewState};
use leptos::prelude::*;

/// `RwSignal<ViewState>` as seen by the controller
#[derive(Clone, Copy)]
pub struct ViewSignal(RwSignal<ViewState>);

impl ViewSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(ViewState::new()))
    }

    /// Underlying signal, for tracked reads in views
    pub fn signal(&self) -> RwSignal<ViewState> {
        self.0
    }
}

impl StateHandle for ViewSignal {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut ViewState)) {
        self.0.update(f);
    }
}
