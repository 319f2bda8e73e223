use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};

use crate::core::badge::BadgeConfig;
use crate::core::stats::stats_extract::{parse_profile, truncate_for_log, LOG_BODY_LIMIT};
use crate::core::stats::{StatsError, StatsResult, StatsSource};

/// TryHackMe answers browser-looking clients; keep this in sync with what a desktop browser sends.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Public profile client for the TryHackMe API. No auth, one request per fetch
/// (two when the badge pre-check is enabled).
pub struct TryHackMeClient {
    client: Client,
    base_url: String,
    badge_precheck: bool,
}

impl TryHackMeClient {
    pub fn new(config: &BadgeConfig) -> Result<Self, StatsError> {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static(USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StatsError::Unexpected(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base.clone(),
            badge_precheck: config.badge_precheck,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, StatsError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| StatsError::Unexpected(format!("Invalid API base {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| StatsError::Unexpected(format!("Invalid API base {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn profile_url(&self, username: &str) -> Result<Url, StatsError> {
        self.endpoint(&["api", "user", "public-profile", username])
    }

    fn badge_url(&self, username: &str) -> Result<Url, StatsError> {
        let mut url = self.endpoint(&["api", "v2", "badges", "public-profile"])?;
        url.query_pairs_mut().append_pair("userPublicId", username);
        Ok(url)
    }

    /// Hits the badge endpoint and only looks at its status; the body is logged and dropped.
    async fn check_badge(&self, username: &str) -> Result<(), StatsError> {
        let resp = self
            .client
            .get(self.badge_url(username)?)
            .send()
            .await
            .map_err(network_error)?;

        let status = resp.status();
        tracing::info!(status = status.as_u16(), "Badge API response status");
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!("Badge API response: {}...", truncate_for_log(&body, LOG_BODY_LIMIT));

        if !status.is_success() {
            return Err(StatsError::BadgeStatus(status.as_u16()));
        }
        Ok(())
    }

    async fn fetch_profile(&self, username: &str) -> StatsResult {
        let resp = self
            .client
            .get(self.profile_url(username)?)
            .send()
            .await
            .map_err(network_error)?;

        let status = resp.status();
        tracing::info!(status = status.as_u16(), "Profile API response status");

        if !status.is_success() {
            return Err(StatsError::ProfileStatus(status.as_u16()));
        }

        let body = resp.text().await.map_err(network_error)?;
        tracing::info!("Profile API response: {}...", truncate_for_log(&body, LOG_BODY_LIMIT));

        parse_profile(&body)
    }
}

fn network_error(err: reqwest::Error) -> StatsError {
    tracing::warn!("Request failed: {}", err);
    StatsError::Network(err.to_string())
}

#[async_trait]
impl StatsSource for TryHackMeClient {
    async fn fetch(&self, username: &str) -> StatsResult {
        if self.badge_precheck {
            self.check_badge(username).await?;
        }
        self.fetch_profile(username).await
    }
}
