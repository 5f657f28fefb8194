//! HTTP client for the yupcha backend.
//!
//! Four endpoints, all JSON over fetch: `/chat`, `/tweet`, `/tweet/history`
//! and `/tweet/post`. The adapter never inspects the HTTP status: whatever
//! JSON the server sends (error shapes included) is handed to the typed
//! wrapper, which reports a missing payload field instead.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Default backend address when `YUPCHA_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Backend base URL, resolved at compile time.
pub fn api_base() -> &'static str {
    option_env!("YUPCHA_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

// --- Errors ---

/// What can go wrong talking to the backend.
///
/// `Request` covers the transport (fetch rejected, body not JSON); the other
/// variants mean the server answered but not with the payload the action
/// needs. Panels collapse every variant into one fixed message per action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected response shape: {0}")]
    Decode(String),
    #[error("response missing `{0}`")]
    MissingField(&'static str),
}

fn js_err(err: JsValue) -> ApiError {
    ApiError::Request(format!("{:?}", err))
}

// --- Wire shapes ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    reply: Option<String>,
}

#[derive(Serialize)]
struct TweetRequest<'a> {
    prompt: &'a str,
    tone: &'a str,
}

#[derive(Deserialize)]
struct TweetReply {
    #[serde(default)]
    tweet: Option<String>,
}

/// One generated tweet as reported by `/tweet/history`.
///
/// The server also sends the prompt and tone it was generated from; this
/// client only renders the text, so extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TweetHistoryItem {
    #[serde(default)]
    pub tweet: String,
}

#[derive(Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    history: Option<Vec<TweetHistoryItem>>,
}

#[derive(Serialize)]
struct PostRequest<'a> {
    tweet: &'a str,
}

#[derive(Deserialize)]
struct PostReply {
    #[serde(default)]
    redirect_url: Option<String>,
}

impl PostReply {
    // The server sends an empty string when no destination is configured;
    // that counts the same as a missing field.
    fn redirect(self) -> Option<String> {
        self.redirect_url.filter(|url| !url.is_empty())
    }
}

// --- Endpoints ---

/// `POST /chat`: returns the bot's reply text.
pub async fn send_chat(message: &str) -> Result<String, ApiError> {
    let json = post_json("/chat", &ChatRequest { message }).await?;
    let reply: ChatReply = decode(json)?;
    reply.reply.ok_or(ApiError::MissingField("reply"))
}

/// `POST /tweet`: returns the generated tweet text.
pub async fn generate_tweet(prompt: &str, tone: &str) -> Result<String, ApiError> {
    let json = post_json("/tweet", &TweetRequest { prompt, tone }).await?;
    let reply: TweetReply = decode(json)?;
    reply.tweet.ok_or(ApiError::MissingField("tweet"))
}

/// `GET /tweet/history`: the full server-side list of generated tweets.
/// A missing or null `history` field decodes to an empty list.
pub async fn tweet_history() -> Result<Vec<TweetHistoryItem>, ApiError> {
    let json = request_json("GET", "/tweet/history", None).await?;
    let response: HistoryResponse = decode(json)?;
    Ok(response.history.unwrap_or_default())
}

/// `POST /tweet/post`: submits a tweet to the external platform. `None`
/// when the response has no redirect URL, or an empty one; either way the
/// server had nowhere to send the user.
pub async fn post_tweet(tweet: &str) -> Result<Option<String>, ApiError> {
    let json = post_json("/tweet/post", &PostRequest { tweet }).await?;
    let reply: PostReply = decode(json)?;
    Ok(reply.redirect())
}

// --- Plumbing ---

async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<JsValue, ApiError> {
    let body = serde_json::to_string(body).map_err(|err| ApiError::Request(err.to_string()))?;
    request_json("POST", path, Some(body)).await
}

async fn request_json(method: &str, path: &str, body: Option<String>) -> Result<JsValue, ApiError> {
    let url = format!("{}{}", api_base(), path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    let has_body = body.is_some();
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Request("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;

    // No status check on purpose: error bodies flow to the typed wrapper.
    JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)
}

fn decode<T: DeserializeOwned>(value: JsValue) -> Result<T, ApiError> {
    serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}
