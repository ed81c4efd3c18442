//! Typed client for the site backend's REST API.
//!
//! Every call sends exactly one request and runs the reply through
//! [`decode_response`], so all resources fail the same way.

pub mod contacts;
pub mod content;
pub mod models;
pub mod settings;
pub mod showcases;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::http::{GlooTransport, HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

pub use contacts::ContactsApi;
pub use content::ContentApi;
pub use settings::SettingsApi;
pub use showcases::ShowcasesApi;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// 2xx bodies decode into `R` (an empty body reads as `null`); anything else
/// is [`ApiError::Status`].
pub fn decode_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status { status: response.status, body: response.body });
    }
    let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    Ok(serde_json::from_str(body)?)
}

pub struct ApiClient<T = GlooTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<GlooTransport> {
    /// Client for the configured backend using the browser's fetch.
    pub fn from_config() -> Self {
        Self::new(config::get_api_base_url(), GlooTransport)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string(), transport }
    }

    pub fn settings(&self) -> SettingsApi<'_, T> {
        SettingsApi::new(self)
    }

    pub fn content(&self) -> ContentApi<'_, T> {
        ContentApi::new(self)
    }

    pub fn showcases(&self) -> ShowcasesApi<'_, T> {
        ShowcasesApi::new(self)
    }

    pub fn contacts(&self) -> ContactsApi<'_, T> {
        ContactsApi::new(self)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await?;
        decode_response(response)
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(HttpRequest::new(Method::Get, self.url(path))).await
    }

    pub(crate) async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(HttpRequest::new(Method::Delete, self.url(path))).await
    }

    pub(crate) async fn patch<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(HttpRequest::new(Method::Patch, self.url(path))).await
    }

    pub(crate) async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        self.execute(HttpRequest::new(method, self.url(path)).json(body)).await
    }
}

/// Percent-encodes one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `path` plus `?locale=..` when a locale is given.
pub(crate) fn with_locale(path: &str, locale: Option<&str>) -> String {
    match locale {
        Some(locale) => format!("{}?locale={}", path, urlencoding::encode(locale)),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse { status, body: body.to_string() }
    }

    #[test]
    fn success_decodes_json() {
        let value: Value = decode_response(response(200, r#"{"id":1}"#)).unwrap();
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn empty_success_body_is_null() {
        let value: Option<Value> = decode_response(response(204, "")).unwrap();
        assert_eq!(value, None);
        decode_response::<()>(response(200, "  ")).unwrap();
    }

    #[test]
    fn non_success_keeps_status_and_body() {
        match decode_response::<Value>(response(404, "not found")) {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn bad_json_is_a_decode_error() {
        assert!(matches!(decode_response::<Value>(response(200, "{nope")), Err(ApiError::Decode(_))));
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://api.test/v1/", crate::http::testing::MockTransport::default());
        assert_eq!(client.url("/settings"), "http://api.test/v1/settings");
    }

    #[test]
    fn locale_query_is_encoded() {
        assert_eq!(with_locale("/content", Some("pt")), "/content?locale=pt");
        assert_eq!(with_locale("/content", None), "/content");
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
    }
}
