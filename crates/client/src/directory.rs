//! Directory backend client.
//!
//! [`Directory`] is the seam between the page logic and the backend.
//! [`HttpDirectory`] speaks the JSON-over-HTTP contract of the collection
//! endpoint:
//!
//! ```text
//! POST   {base}       - Create a record (JSON body)
//! GET    {base}       - List all records
//! DELETE {base}{id}   - Delete one record
//! ```
//!
//! Each call is a single attempt. The HTTP client is built without a request
//! timeout and nothing is retried.

use std::future::Future;

use people_directory_core::{NewPerson, Person, PersonId};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Response};
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Backend operations used by the directory page.
pub trait Directory {
    /// Create a record. Succeeds once the backend acknowledged it.
    fn create(&self, person: &NewPerson) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Fetch the full collection in backend order.
    fn list(&self) -> impl Future<Output = Result<Vec<Person>, ClientError>> + Send;

    /// Delete the record with the given identifier.
    fn delete(&self, id: &PersonId) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// HTTP implementation of [`Directory`].
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    base_url: Url,
}

impl HttpDirectory {
    /// Create a client for the configured backend.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// URL of a single record: the collection endpoint plus one path segment.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the base URL cannot carry a path.
    pub fn record_url(&self, id: &PersonId) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}

impl Directory for HttpDirectory {
    #[instrument(skip(self, person), fields(url = %self.base_url))]
    async fn create(&self, person: &NewPerson) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(person)
            .send()
            .await
            .map_err(|e| ClientError::request(&e))?;

        let response = ensure_success(response)?;

        // The body is the created record; only its parseability matters.
        let _: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::response(&e))?;

        debug!("Person created");
        Ok(())
    }

    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn list(&self) -> Result<Vec<Person>, ClientError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| ClientError::request(&e))?;

        let people: Vec<Person> = ensure_success(response)?
            .json()
            .await
            .map_err(|e| ClientError::response(&e))?;

        debug!(count = people.len(), "Fetched people");
        Ok(people)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &PersonId) -> Result<(), ClientError> {
        let url = self.record_url(id)?;

        let response = self
            .client
            .delete(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| ClientError::request(&e))?;

        let response = ensure_success(response)?;

        let _: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::response(&e))?;

        debug!("Person deleted");
        Ok(())
    }
}

/// Reject non-2xx responses.
fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(ClientError::Status {
        status: status.as_u16(),
        url: response.url().to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn directory(base: &str) -> HttpDirectory {
        HttpDirectory::new(&ClientConfig::with_base_url(base).unwrap())
    }

    #[test]
    fn test_record_url_appends_id() {
        let dir = directory("http://localhost:8000/");
        let id = PersonId::parse("4f1c2a6e").unwrap();
        assert_eq!(
            dir.record_url(&id).unwrap().as_str(),
            "http://localhost:8000/4f1c2a6e"
        );
    }

    #[test]
    fn test_record_url_under_nested_base() {
        let dir = directory("http://localhost:8000/api/people");
        let id = PersonId::parse("p-1").unwrap();
        assert_eq!(
            dir.record_url(&id).unwrap().as_str(),
            "http://localhost:8000/api/people/p-1"
        );
    }

    #[test]
    fn test_record_url_encodes_id_as_one_segment() {
        let dir = directory("http://localhost:8000/");
        let id = PersonId::parse("a/b c").unwrap();
        assert_eq!(
            dir.record_url(&id).unwrap().as_str(),
            "http://localhost:8000/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_list_reports_network_failure() {
        // Reserve a port, then close it so nothing is listening there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let dir = directory(&format!("http://{addr}/"));
        let err = dir.list().await.unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
    }
}
