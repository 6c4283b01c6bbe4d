//! Share-link codec.
//!
//! A share token is the JSON payload `{"data": <document>, "theme": <theme>}`
//! encoded with URL-safe base64 (no padding), so it can travel in the `p`
//! query parameter untouched. Decoding also accepts the standard alphabet
//! with padding, which older links used.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{PortfolioData, Theme};

/// Query parameter carrying a share token.
pub const SHARE_QUERY_PARAM: &str = "p";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Share token is empty")]
    Empty,
    #[error("Share token is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("Share token does not contain UTF-8 text")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Share payload is malformed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A decoded share link: the document and the theme it was shared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedPortfolio {
    pub data: PortfolioData,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Serialize)]
struct SharePayloadRef<'a> {
    data: &'a PortfolioData,
    theme: Theme,
}

/// Encode a document and theme into a URL-embeddable token.
pub fn encode(data: &PortfolioData, theme: Theme) -> Result<String, ShareError> {
    let payload = serde_json::to_vec(&SharePayloadRef { data, theme })?;
    Ok(URL_SAFE_NO_PAD.encode(payload))
}

/// Decode a token produced by [`encode`].
pub fn decode(token: &str) -> Result<SharedPortfolio, ShareError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ShareError::Empty);
    }

    let bytes = match URL_SAFE_NO_PAD.decode(token) {
        Ok(bytes) => bytes,
        Err(url_safe_error) => STANDARD.decode(token).map_err(|_| url_safe_error)?,
    };
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// Build a full share URL for `base_url` carrying the encoded document.
pub fn share_url(base_url: &str, data: &PortfolioData, theme: Theme) -> Result<String, ShareError> {
    let token = encode(data, theme)?;
    let base = base_url.trim();
    let base = base.split(&['?', '#'][..]).next().unwrap_or(base);
    Ok(format!("{base}?{SHARE_QUERY_PARAM}={token}"))
}

/// Extract and decode a share token from a URL query string.
///
/// Accepts a bare query (`p=...&x=1`), a query with leading `?`, or a full
/// URL. A missing parameter or a token that fails to decode yields `None`;
/// callers fall back to the normal session bootstrap.
pub fn from_query(query: &str) -> Option<SharedPortfolio> {
    let query = query.split_once('?').map_or(query, |(_, query)| query);
    let query = query.split('#').next().unwrap_or(query);

    let raw_token = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == SHARE_QUERY_PARAM).then_some(value)
    })?;

    let token = match urlencoding::decode(raw_token) {
        Ok(token) => token.into_owned(),
        Err(error) => {
            tracing::warn!("Discarding share token with invalid escapes: {}", error);
            return None;
        }
    };

    match decode(&token) {
        Ok(shared) => Some(shared),
        Err(error) => {
            tracing::warn!("Discarding malformed share token: {}", error);
            None
        }
    }
}
