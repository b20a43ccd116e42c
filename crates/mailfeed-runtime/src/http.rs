//! reqwest-backed [`FeedApi`] talking to the feed server's REST endpoints.

use crate::api::{EmailQuery, FeedApi};
use crate::{Error, Result};
use futures::future::{FutureExt, LocalBoxFuture};
use mailfeed_types::{Message, MessageId, Section, Tab};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info};

/// Body of the server's command endpoints (`open-email`, `enqueue-summary`)
#[derive(Debug, Default, Deserialize)]
struct CommandReply {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct HttpFeedApi {
    client: Client,
    base: Url,
}

impl HttpFeedApi {
    pub fn new(server: &str) -> Result<Self> {
        let base = Url::parse(server)
            .map_err(|e| Error::Config(format!("invalid server URL '{}': {}", server, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("server URL '{}' cannot be a base", server)));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let response = check_status(&url, response)?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn post_command(&self, url: Url, body: serde_json::Value) -> Result<()> {
        debug!(%url, "POST");
        let response = self.client.post(url.clone()).json(&body).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let reply: CommandReply = serde_json::from_slice(&body).unwrap_or_default();

        if let Some(error) = reply.error {
            return Err(Error::Api(error));
        }
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        if let Some(status) = reply.status {
            info!(%url, status = %status, "command accepted");
        }
        Ok(())
    }
}

fn check_status(url: &Url, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// `{base}/{segments...}` with each segment percent-encoded
pub fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// `GET /api/tabs/{tab}/sections/{section}/emails?limit={n}[&start_from={cursor}]`
pub fn emails_url(base: &Url, query: &EmailQuery) -> Url {
    let mut url = endpoint(
        base,
        &["api", "tabs", &query.tab, "sections", &query.section, "emails"],
    );
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("limit", &query.limit.to_string());
        if let Some(cursor) = query.start_from {
            pairs.append_pair("start_from", &cursor.to_string());
        }
    }
    url
}

impl FeedApi for HttpFeedApi {
    fn list_tabs(&self) -> LocalBoxFuture<'_, Result<Vec<Tab>>> {
        let url = endpoint(&self.base, &["api", "tabs"]);
        self.get_json(url).boxed_local()
    }

    fn list_sections<'a>(&'a self, tab: &'a str) -> LocalBoxFuture<'a, Result<Vec<Section>>> {
        let url = endpoint(&self.base, &["api", "tabs", tab, "sections"]);
        self.get_json(url).boxed_local()
    }

    fn list_emails<'a>(&'a self, query: &'a EmailQuery) -> LocalBoxFuture<'a, Result<Vec<Message>>> {
        let url = emails_url(&self.base, query);
        self.get_json(url).boxed_local()
    }

    fn open_email<'a>(&'a self, message: &'a Message) -> LocalBoxFuture<'a, Result<()>> {
        async move {
            let url = endpoint(&self.base, &["api", "open-email"]);
            let body = serde_json::to_value(message)?;
            self.post_command(url, body).await
        }
        .boxed_local()
    }

    fn enqueue_summary<'a>(&'a self, id: &'a MessageId) -> LocalBoxFuture<'a, Result<()>> {
        let url = endpoint(&self.base, &["api", "enqueue-summary"]);
        self.post_command(url, json!({ "header_message_id": id }))
            .boxed_local()
    }
}
