// Copyright © 2025 Nipun Kumar

//! Data access for the chatlog backend.
//!
//! One call per resource, each a single GET that decodes into the typed
//! records in [`crate::model`]. Failures are logged here and handed back to the
//! caller unchanged; deciding what the user sees is the view's job.

pub mod http;

use dioxus::logger::tracing::{debug, error};
use serde::de::DeserializeOwned;
use snafu::{ResultExt, Snafu};

use crate::model::{ChatRoomItem, ChatSessionItem, ChatlogItem, ContactItem, Page, PageQuery};
use self::http::HttpGet;
pub use self::http::DefaultHttp;

pub const CONTACT_ENDPOINT: &str = "/api/v1/contact?format=json";
pub const CHATROOM_ENDPOINT: &str = "/api/v1/chatroom?format=json";
pub const SESSION_ENDPOINT: &str = "/api/v1/session?format=json";
pub const CHATLOG_ENDPOINT: &str = "/api/v1/chatlog?format=json";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(display("request to {url} failed: {source}"))]
    Transport {
        url: String,
        source: http::TransportFailure,
    },
    #[snafu(display("{url} responded with HTTP {status}: {body}"))]
    Server {
        url: String,
        status: u16,
        body: String,
    },
    #[snafu(display("could not decode response from {url}: {source}"))]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Thin client over the four chatlog endpoints.
#[derive(Debug, Clone)]
pub struct WeChatService<H> {
    http: H,
    base: String,
}

impl WeChatService<DefaultHttp> {
    pub fn from_base(base: impl Into<String>) -> Self {
        Self::new(DefaultHttp::default(), base)
    }
}

impl<H: HttpGet> WeChatService<H> {
    pub fn new(http: H, base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_contact(&self, params: &PageQuery) -> ApiResult<Page<ContactItem>> {
        self.fetch(CONTACT_ENDPOINT, params)
            .await
            .inspect_err(|e| error!("Error fetching contact: {e}"))
    }

    pub async fn get_chat_room(&self, params: &PageQuery) -> ApiResult<Page<ChatRoomItem>> {
        self.fetch(CHATROOM_ENDPOINT, params)
            .await
            .inspect_err(|e| error!("Error fetching chat room: {e}"))
    }

    pub async fn get_chat_sessions(
        &self,
        params: &PageQuery,
    ) -> ApiResult<Page<ChatSessionItem>> {
        self.fetch(SESSION_ENDPOINT, params)
            .await
            .inspect_err(|e| error!("Error fetching chat sessions: {e}"))
    }

    /// The chat log comes back as a bare array, not an `{ items }` envelope.
    pub async fn get_chatlog(&self, params: &PageQuery) -> ApiResult<Vec<ChatlogItem>> {
        self.fetch(CHATLOG_ENDPOINT, params)
            .await
            .inspect_err(|e| error!("Error fetching chat logs: {e}"))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &PageQuery,
    ) -> ApiResult<T> {
        let url = format!("{}{}{}", self.base, endpoint, params.to_query_suffix());
        debug!("GET {url}");
        let response = self.http.get(&url).await.context(TransportSnafu { url: &url })?;
        if !response.is_success() {
            return ServerSnafu {
                url,
                status: response.status,
                body: response.body,
            }
            .fail();
        }
        serde_json::from_str(&response.body).context(DecodeSnafu { url })
    }
}
