// HTTP client for the scheduling backend.
//
// Purpose
// - Single place that knows how to talk JSON over HTTP to the backend API.
//
// Responsibilities
// - Build request URLs from the configured base URL.
// - Map response statuses onto BackendError so ports stay transport agnostic.

use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend resource not found: {0}")]
    NotFound(String),

    #[error("backend rejected {path} with status {status}: {body}")]
    Rejected {
        path: String,
        status: u16,
        body: String,
    },

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, BackendError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    #[tracing::instrument(skip(self, query), fields(method = "GET"))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let response = self
            .http
            .request(Method::GET, self.url(path))
            .query(query)
            .send()
            .await?;
        Ok(check_status(path, response).await?.json().await?)
    }

    #[tracing::instrument(skip(self, body), fields(method = "POST"))]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body).await
    }

    #[tracing::instrument(skip(self, body), fields(method = "PUT"))]
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, path, body).await
    }

    #[tracing::instrument(skip(self), fields(method = "DELETE"))]
    pub async fn delete(&self, path: &str) -> Result<(), BackendError> {
        let response = self
            .http
            .request(Method::DELETE, self.url(path))
            .send()
            .await?;
        check_status(path, response).await?;
        Ok(())
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Ok(check_status(path, response).await?.json().await?)
    }
}

async fn check_status(path: &str, response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        tracing::debug!(path, "backend answered 404");
        return Err(BackendError::NotFound(path.to_string()));
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(path, status = status.as_u16(), "backend rejected request");
    Err(BackendError::Rejected {
        path: path.to_string(),
        status: status.as_u16(),
        body,
    })
}

pub mod in_memory;

#[cfg(test)]
mod backend_client_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8000", "/employees", "http://localhost:8000/employees")]
    #[case("http://localhost:8000/", "/employees/3", "http://localhost:8000/employees/3")]
    #[case("http://api.local/v1/", "/schedule", "http://api.local/v1/schedule")]
    fn it_should_join_the_base_url_and_path(
        #[case] base: &str,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        let client =
            BackendClient::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap();
        assert_eq!(client.url(path), expected);
    }

    #[rstest]
    fn it_should_describe_a_rejection_with_status_and_body() {
        let err = BackendError::Rejected {
            path: "/employees".into(),
            status: 422,
            body: "name missing".into(),
        };
        assert_eq!(
            err.to_string(),
            "backend rejected /employees with status 422: name missing"
        );
    }
}
