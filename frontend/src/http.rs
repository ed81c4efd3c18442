//! The one place the site talks to the network. Everything that sends a
//! request does it through [`HttpTransport`], so request building and status
//! handling can be exercised without a browser.

use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// JSON text, sent with `Content-Type: application/json`.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn json(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// Browser `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.header("Content-Type", "application/json").body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Records every request and answers from a queue of canned replies.
    #[derive(Default)]
    pub struct MockTransport {
        pub requests: RefCell<Vec<HttpRequest>>,
        replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    }

    impl MockTransport {
        pub fn replying(status: u16, body: &str) -> Self {
            let mock = Self::default();
            mock.push(Ok(HttpResponse { status, body: body.to_string() }));
            mock
        }

        pub fn failing(error: TransportError) -> Self {
            let mock = Self::default();
            mock.push(Err(error));
            mock
        }

        pub fn push(&self, reply: Result<HttpResponse, TransportError>) {
            self.replies.borrow_mut().push_back(reply);
        }

        pub fn sent(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn last(&self) -> HttpRequest {
            self.requests.borrow().last().cloned().expect("no request was sent")
        }
    }

    impl HttpTransport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(HttpResponse { status: 200, body: String::new() }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_any_2xx() {
        let response = |status| HttpResponse { status, body: String::new() };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(300).is_success());
        assert!(!response(404).is_success());
    }

    #[test]
    fn builder_keeps_headers_in_order() {
        let request = HttpRequest::new(Method::Post, "/x")
            .header("Accept", "application/json")
            .json("{}".into());
        assert_eq!(request.headers, vec![("Accept", "application/json".to_string())]);
        assert_eq!(request.body.as_deref(), Some("{}"));
    }
}
