// Copyright © 2025 Nipun Kumar

use async_trait::async_trait;
use snafu::Snafu;

/// Status line and body of a finished GET.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network failed before a status line was received.
#[derive(Debug, Snafu)]
#[snafu(display("{message}"))]
pub struct TransportFailure {
    pub message: String,
}

#[async_trait(?Send)]
pub trait HttpGet {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportFailure>;
}

/// Uses reqwest directly; native builds have no CORS restrictions.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct DefaultHttp {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpGet for DefaultHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportFailure {
                message: format!("{e}"),
            })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportFailure {
            message: format!("{e}"),
        })?;
        Ok(HttpResponse { status, body })
    }
}

/// Browser fetch through gloo-net. Relative urls resolve against the page
/// origin, so the dev-server proxy sees `/api/...` requests.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct DefaultHttp;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpGet for DefaultHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportFailure> {
        use gloo_net::http::Request;

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| TransportFailure {
                message: format!("{e:?}"),
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| TransportFailure {
            message: format!("{e:?}"),
        })?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned responses in order and records every requested url.
    #[derive(Default)]
    pub struct FakeHttp {
        pub responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
        pub requested: RefCell<Vec<String>>,
    }

    impl FakeHttp {
        pub fn ok(self, body: &str) -> Self {
            self.respond(200, body)
        }

        pub fn respond(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, message: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(message.to_string()));
            self
        }
    }

    #[async_trait(?Send)]
    impl HttpGet for FakeHttp {
        async fn get(&self, url: &str) -> Result<HttpResponse, TransportFailure> {
            self.requested.borrow_mut().push(url.to_string());
            match self.responses.borrow_mut().pop_front() {
                Some(Ok(r)) => Ok(r),
                Some(Err(message)) => Err(TransportFailure { message }),
                None => Err(TransportFailure {
                    message: "connection refused".into(),
                }),
            }
        }
    }
}
