//! HTTP/JSON Collection
//!
//! `CollectionApi` over a REST resource:
//! `GET /c`, `POST /c`, `PUT /c/{id}`, `DELETE /c/{id}`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use super::CollectionApi;
use crate::config::ClientConfig;
use crate::domain::{ClientError, ClientResult, Draft, Record, RecordId};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpCollection {
    client: Client,
    endpoint: String,
}

impl HttpCollection {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Reuse an existing `reqwest::Client` (shared connection pool)
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn record_url(&self, id: &RecordId) -> String {
        format!(
            "{}/{}",
            self.endpoint,
            utf8_percent_encode(id.as_str(), SEGMENT)
        )
    }
}

/// Map non-success statuses; 404 only means `NotFound` on id routes
fn check_status(response: Response, id: Option<&RecordId>) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match id {
        Some(id) if status == StatusCode::NOT_FOUND => Err(ClientError::NotFound(id.clone())),
        _ => Err(ClientError::Network(format!(
            "HTTP {} from {}",
            status,
            response.url().path()
        ))),
    }
}

#[async_trait(?Send)]
impl CollectionApi for HttpCollection {
    async fn list_all(&self) -> ClientResult<Vec<Record>> {
        debug!(endpoint = %self.endpoint, "GET collection");
        let response = self.client.get(&self.endpoint).send().await?;
        let records = check_status(response, None)?.json::<Vec<Record>>().await?;
        Ok(records)
    }

    async fn create(&self, draft: &Draft) -> ClientResult<Record> {
        debug!(endpoint = %self.endpoint, url = %draft.url, "POST record");
        let response = self.client.post(&self.endpoint).json(draft).send().await?;
        let record = check_status(response, None)?.json::<Record>().await?;
        Ok(record)
    }

    async fn update(&self, id: &RecordId, record: &Record) -> ClientResult<Record> {
        let url = self.record_url(id);
        debug!(%url, "PUT record");
        let response = self.client.put(&url).json(record).send().await?;
        let record = check_status(response, Some(id))?.json::<Record>().await?;
        Ok(record)
    }

    async fn remove(&self, id: &RecordId) -> ClientResult<()> {
        let url = self.record_url(id);
        debug!(%url, "DELETE record");
        let response = self.client.delete(&url).send().await?;
        check_status(response, Some(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_url_encodes_id() {
        let config = ClientConfig::default().with_base_url("http://api.test");
        let collection = HttpCollection::new(&config);
        assert_eq!(
            collection.record_url(&RecordId::new("a b/c")),
            "http://api.test/api/blogs/a%20b%2Fc"
        );
    }
}
