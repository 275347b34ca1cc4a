use crate::error::FetchError;
use crate::tcg::RawCard;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Anything the collector can pull raw cards from.
pub trait CardSource {
    /// Fetch the cards behind an API path such as `allSetCards/` or
    /// `sets/OP-01/`.
    async fn fetch_cards(&self, path: &str) -> Result<Vec<RawCard>, FetchError>;
}

/// Card source backed by the live HTTP API.
pub struct HttpCardSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCardSource {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl CardSource for HttpCardSource {
    async fn fetch_cards(&self, path: &str) -> Result<Vec<RawCard>, FetchError> {
        let url = self.url_for(path);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(parse_card_array(value))
    }
}

/// Cards from a decoded response body. Anything but an array counts as no
/// cards; array elements that aren't card objects are dropped.
pub fn parse_card_array(value: serde_json::Value) -> Vec<RawCard> {
    let serde_json::Value::Array(items) = value else {
        debug!("Response body is not a list, treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| {
            // Serde would also map a positional array onto the struct fields
            if !item.is_object() {
                debug!("Dropping non-object card entry: {}", item);
                return None;
            }

            match serde_json::from_value::<RawCard>(item) {
                Ok(card) => Some(card),
                Err(e) => {
                    debug!("Dropping malformed card entry: {}", e);
                    None
                }
            }
        })
        .collect()
}

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "OptcgArena"
}
