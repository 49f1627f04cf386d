//! Client for the one-api.ir `owghat` prayer-times endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::ProviderError;

/// One day of prayer times for a recognized city, as the provider returns it.
///
/// `day` and `month` arrive as Persian-digit strings and need decoding; the
/// six event times are preformatted in the provider's locale and pass through
/// to the reply untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub day: String,
    pub month: String,
    pub azan_sobh: String,
    pub toloe_aftab: String,
    pub azan_zohre: String,
    pub ghorob_aftab: String,
    pub azan_maghreb: String,
    pub nime_shabe_sharie: String,
}

/// Outcome of a successful provider call.
#[derive(Debug, Clone)]
pub enum ProviderResult {
    Found(CityRecord),
    /// The provider answered but did not recognize the city.
    NotFound,
}

#[derive(Debug, Deserialize)]
struct OwghatEnvelope {
    // Absent or null when the city is unknown.
    result: Option<CityRecord>,
}

/// Source of daily prayer times, keyed by free-text city name.
///
/// The router takes this as an injected dependency so tests can substitute a
/// stub for the live HTTP client.
#[async_trait]
pub trait PrayerTimesProvider: Send + Sync {
    async fn daily_times(&self, city: &str) -> Result<ProviderResult, ProviderError>;
}

// Lets a shared provider instance back several consumers (dispatch tasks,
// tests observing a stub).
#[async_trait]
impl<P: PrayerTimesProvider + ?Sized> PrayerTimesProvider for std::sync::Arc<P> {
    async fn daily_times(&self, city: &str) -> Result<ProviderResult, ProviderError> {
        (**self).daily_times(city).await
    }
}

/// reqwest-backed provider client. One GET per lookup, no retries, no cache;
/// timeouts are whatever the transport defaults to.
#[derive(Clone)]
pub struct OwghatClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl OwghatClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl PrayerTimesProvider for OwghatClient {
    async fn daily_times(&self, city: &str) -> Result<ProviderResult, ProviderError> {
        let url = format!("{}/owghat/", self.base_url);
        debug!("Querying owghat provider for city '{}'", city);

        let response = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str()), ("city", city)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await?;
        let envelope: OwghatEnvelope = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Malformed(format!("undecodable payload: {e}")))?;

        Ok(match envelope.result {
            Some(record) => ProviderResult::Found(record),
            None => ProviderResult::NotFound,
        })
    }
}
