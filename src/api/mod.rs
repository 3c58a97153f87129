//! HTTP client for the HRM backend.
//!
//! One async operation per remote endpoint. Every operation returns
//! `ApiResult<T>`; a non-2xx response becomes [`ApiError::Status`] carrying
//! the server's text verbatim.

pub mod attendance;
pub mod employee;

pub use attendance::AttendanceApi;
pub use employee::EmployeeApi;

use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::model::HealthStatus;
use crate::routes;

/// Network client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// No request timeout is configured; the transport default applies.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/_health`
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.get(&routes::health()).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::POST, path, None::<&()>).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = self.url(path);
        debug!(%method, %url, "Sending request");

        let mut req = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            warn!(error = %e, %method, %url, "Request failed");
            ApiError::from(e)
        })?;
        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        debug!(status = status.as_u16(), body = %text, "Backend rejected request");
        return Err(ApiError::from_status(status, text));
    }

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://hr.internal:8000/").unwrap();
        assert_eq!(client.base_url(), "http://hr.internal:8000");
        assert_eq!(
            client.url(&routes::employees()),
            "http://hr.internal:8000/api/employees"
        );
    }
}
