//! Application Context
//!
//! Shared state and configuration provided via Leptos Context API.

use blog_sync::{ClientConfig, Controller, HttpCollection, Prompt};
use leptos::prelude::*;
use tracing::warn;

use crate::confirm::window_confirm;
use crate::store::ViewSignal;

pub type AppController = Controller<HttpCollection, fn(&Prompt) -> bool, ViewSignal>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mirror of the remote collection plus form/filter/notification fields
    pub state: ViewSignal,
    config: StoredValue<ClientConfig>,
    /// One client for the whole app, sharing its connection pool
    api: StoredValue<HttpCollection>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let api = HttpCollection::new(&config);
        Self {
            state: ViewSignal::new(),
            config: StoredValue::new(config),
            api: StoredValue::new(api),
        }
    }

    /// Controller bound to this context's state
    pub fn controller(&self) -> AppController {
        let like_policy = self.config.with_value(|config| config.like_policy);
        Controller::new(
            self.api.get_value(),
            window_confirm as fn(&Prompt) -> bool,
            self.state,
        )
        .with_like_policy(like_policy)
    }

    /// How long a notification stays visible, in milliseconds
    pub fn notification_ttl_ms(&self) -> u32 {
        let ttl = self.config.with_value(|config| config.notification_ttl());
        u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Build-time config, falling back to the page origin as API host.
///
/// `BLOG_CLIENT_CONFIG` holds the whole config as JSON;
/// `BLOG_API_PATH` overrides only the collection path.
pub fn client_config() -> ClientConfig {
    if let Some(json) = option_env!("BLOG_CLIENT_CONFIG") {
        match ClientConfig::from_json(json) {
            Ok(config) => return config,
            Err(err) => warn!(%err, "ignoring malformed BLOG_CLIENT_CONFIG"),
        }
    }

    let mut config = ClientConfig::default();
    if let Some(origin) = page_origin() {
        config = config.with_base_url(origin);
    }
    if let Some(path) = option_env!("BLOG_API_PATH") {
        config = config.with_collection_path(path);
    }
    config
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
