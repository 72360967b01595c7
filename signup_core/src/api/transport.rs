use super::error;
use core::{fmt, future::Future};
use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

/// A response we got back, before looking at the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status of the response.
    pub status: StatusCode,

    /// The raw response body.
    pub body: Vec<u8>,
}

/// Something that can POST JSON somewhere and hand back the response.
pub trait Transport {
    /// Why a request didn't produce a response.
    type Error: fmt::Display;

    /// Send `body` as JSON (with a `Content-Type: application/json` header) to
    /// `url`. Non-2xx statuses are not errors here; they come back in the
    /// `Reply` like any other status.
    fn post_json<B>(&self, url: &Url, body: &B) -> impl Future<Output = Result<Reply, Self::Error>>
    where
        B: Serialize + ?Sized;
}

/// `Transport` over a real HTTP client. Works natively and in the browser
/// (where reqwest uses `fetch`.)
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    /// Shared so connections get reused between submissions.
    http: reqwest::Client,
}

impl HttpTransport {
    /// Use an existing client.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    type Error = error::Error;

    async fn post_json<B>(&self, url: &Url, body: &B) -> error::Result<Reply>
    where
        B: Serialize + ?Sized,
    {
        let resp = self.http.post(url.clone()).json(body).send().await?;

        let status = resp.status();
        let body = resp.bytes().await?.to_vec();

        Ok(Reply { status, body })
    }
}
