//! Blog Record
//!
//! The only domain entity, plus the draft typed into the creation form.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{ClientError, ClientResult};

/// Server-assigned record identifier.
///
/// Stores treat ids differently (Mongo-style strings, json-server integers),
/// so both JSON strings and numbers are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Number(u64),
        }

        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(text) => RecordId(text),
            WireId::Number(n) => RecordId(n.to_string()),
        })
    }
}

/// A blog entry as stored by the remote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireRecord")]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u32,
}

/// Incoming shape: the id may arrive as `id`, `_id` or both
#[derive(Deserialize)]
struct WireRecord {
    id: Option<RecordId>,
    #[serde(rename = "_id")]
    mongo_id: Option<RecordId>,
    title: String,
    author: String,
    url: String,
    #[serde(default)]
    likes: u32,
}

impl TryFrom<WireRecord> for Record {
    type Error = String;

    fn try_from(wire: WireRecord) -> Result<Self, Self::Error> {
        let id = wire
            .id
            .or(wire.mongo_id)
            .ok_or_else(|| "missing field `id`".to_string())?;
        Ok(Record {
            id,
            title: wire.title,
            author: wire.author,
            url: wire.url,
            likes: wire.likes,
        })
    }
}

impl Record {
    /// Copy of this record with title and author taken from `draft`.
    /// Id, url and likes are kept.
    pub fn with_draft(&self, draft: &Draft) -> Record {
        Record {
            title: draft.title.clone(),
            author: draft.author.clone(),
            ..self.clone()
        }
    }
}

/// Form contents for a new record; the server assigns id and likes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
        }
    }

    /// All three fields are required
    pub fn validate(&self) -> ClientResult<()> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("author", &self.author),
            ("url", &self.url),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ClientError::Validation(format!("{} required", missing.join(", "))))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_underscore_id() {
        let record: Record = serde_json::from_str(
            r#"{"_id":"64f1","title":"A","author":"X","url":"u1","likes":3}"#,
        )
        .unwrap();
        assert_eq!(record.id, RecordId::new("64f1"));
        assert_eq!(record.likes, 3);
    }

    #[test]
    fn test_record_accepts_both_id_fields() {
        let record: Record = serde_json::from_str(
            r#"{"_id":"64f1","id":"64f1","title":"A","author":"X","url":"u1","likes":2,"__v":0}"#,
        )
        .unwrap();
        assert_eq!(record.id, RecordId::new("64f1"));
        assert_eq!(record.likes, 2);

        let records: Vec<Record> = serde_json::from_str(concat!(
            r#"[{"_id":"a","id":"a","title":"A","author":"X","url":"u1"},"#,
            r#"{"id":2,"title":"B","author":"Y","url":"u2"}]"#,
        ))
        .unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "2"]);
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let err = serde_json::from_str::<Record>(r#"{"title":"A","author":"X","url":"u1"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_record_numeric_id_and_default_likes() {
        let record: Record =
            serde_json::from_str(r#"{"id":7,"title":"A","author":"X","url":"u1"}"#).unwrap();
        assert_eq!(record.id.as_str(), "7");
        assert_eq!(record.likes, 0);
    }

    #[test]
    fn test_record_serializes_plain_id() {
        let record = Record {
            id: RecordId::new("1"),
            title: "A".into(),
            author: "X".into(),
            url: "u1".into(),
            likes: 0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "1");
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_with_draft_keeps_identity() {
        let record = Record {
            id: RecordId::new("1"),
            title: "Old".into(),
            author: "Old".into(),
            url: "u1".into(),
            likes: 4,
        };
        let patched = record.with_draft(&Draft::new("New", "Someone", "ignored"));
        assert_eq!(patched.id, record.id);
        assert_eq!(patched.url, "u1");
        assert_eq!(patched.likes, 4);
        assert_eq!(patched.title, "New");
        assert_eq!(patched.author, "Someone");
    }

    #[test]
    fn test_draft_validation() {
        assert!(Draft::new("A", "X", "u1").validate().is_ok());

        let err = Draft::new("A", "  ", "").validate().unwrap_err();
        assert_eq!(err, ClientError::Validation("author, url required".into()));
    }
}
