use super::{Error, Transport};
use crate::{Credentials, Outcome};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// The request to register a new account.
pub type Req = Credentials;

/// Whatever the server sends back on success. We don't rely on its shape.
pub type Resp = Value;

/// What a failed registration may tell us.
#[derive(Debug, Deserialize)]
pub struct ErrorResp {
    /// Human-readable reason. Usually a string, but we take anything.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResp {
    /// The detail as text, if there's something worth showing. Empty strings
    /// and `null` count as nothing; non-string values are shown as JSON.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            None | Some(Value::Null) => None,
            Some(Value::String(detail)) if detail.is_empty() => None,
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Register with the server. Exactly one request is made; whatever happens
/// is folded into the returned `Outcome` rather than an error.
pub async fn signup<T: Transport>(transport: &T, endpoint: &Url, req: &Req) -> Outcome {
    tracing::info!(username = %req.username, email = %req.email, %endpoint, "submitting signup");

    let reply = match transport.post_json(endpoint, req).await {
        Ok(reply) => reply,
        Err(problem) => {
            tracing::error!(%problem, "signup request failed");
            return Outcome::Unreachable(problem.to_string());
        }
    };

    let body: Resp = match serde_json::from_slice(&reply.body) {
        Ok(body) => body,
        Err(err) => {
            let problem = Error::from(err);
            tracing::error!(status = %reply.status, %problem, "signup response was not JSON");
            return Outcome::Unreachable(problem.to_string());
        }
    };

    tracing::debug!(status = %reply.status, response = %body, "signup response");

    if reply.status.is_success() {
        Outcome::Created(body)
    } else {
        // A JSON body that isn't an object (say, a bare string) has no detail.
        let detail = serde_json::from_value::<ErrorResp>(body)
            .ok()
            .and_then(|resp| resp.detail_text());

        Outcome::Rejected {
            status: reply.status,
            detail,
        }
    }
}
