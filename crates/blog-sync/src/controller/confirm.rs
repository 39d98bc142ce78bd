//! Confirmation Capability
//!
//! Destructive actions ask before any remote call is issued.

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// A record with this url already exists
    ReplaceDuplicate { url: String },
    Delete { title: String },
}

impl Prompt {
    pub fn message(&self) -> String {
        match self {
            Prompt::ReplaceDuplicate { url } => format!(
                "{} already exists, replace the old information with a new one?",
                url
            ),
            Prompt::Delete { title } => format!("Delete {}?", title),
        }
    }
}

/// Yes/no answer from the user
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, prompt: &Prompt) -> bool;
}

#[async_trait(?Send)]
impl<F> Confirm for F
where
    F: Fn(&Prompt) -> bool,
{
    async fn confirm(&self, prompt: &Prompt) -> bool {
        self(prompt)
    }
}
