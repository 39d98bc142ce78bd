//! Domain Layer
//!
//! Records, drafts and the error taxonomy shared by client and controller.

mod error;
mod record;

pub use error::{ClientError, ClientResult, Operation, RequestFailed};
pub use record::{Draft, Record, RecordId};
