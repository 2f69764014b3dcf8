//! CollegeFootballData API client
//!
//! Rate-limited HTTP client for api.collegefootballdata.com. List endpoints
//! decode per record: a malformed record is logged and skipped instead of
//! poisoning the whole response.

use super::types::{PlayerSearchResult, PlayerSeasonStat, PortalTransfer, Recruit, RosterPlayer};
use super::PlayerDataProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::time::sleep;

const CFBD_API_BASE: &str = "https://api.collegefootballdata.com";
const RATE_LIMIT_DELAY_MS: u64 = 250; // stay well inside the free-tier budget

/// Environment variable holding the CollegeFootballData API key.
pub const API_KEY_ENV: &str = "CFB_DATA_API_KEY";

pub struct CfbdClient {
    client: Client,
    api_key: String,
    last_request: Mutex<Instant>,
}

impl CfbdClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            last_request: Mutex::new(Instant::now()),
        })
    }

    /// Enforce a courtesy delay between requests
    async fn rate_limit(&self) {
        let elapsed = {
            let last = self.last_request.lock().unwrap();
            last.elapsed()
        };

        if elapsed < Duration::from_millis(RATE_LIMIT_DELAY_MS) {
            sleep(Duration::from_millis(RATE_LIMIT_DELAY_MS) - elapsed).await;
        }

        let mut last = self.last_request.lock().unwrap();
        *last = Instant::now();
    }

    /// GET a list endpoint, mapping auth and status failures before any
    /// decoding is attempted.
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, ProviderError> {
        self.rate_limit().await;
        let url = format!("{CFBD_API_BASE}{path}");
        tracing::debug!(%url, ?params, "CFBD request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() == 401 {
            tracing::warn!(%url, "CFBD rejected the API key");
            return Err(ProviderError::AuthRejected);
        }
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        decode_body(&body, path)
    }
}

/// Decode a list response body, skipping records that fail to deserialize.
/// An empty body counts as an empty list; a body that is not a JSON array
/// is a decode error.
fn decode_body<T: DeserializeOwned>(body: &str, endpoint: &str) -> Result<Vec<T>, ProviderError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "skipping undecodable record");
                None
            }
        })
        .collect())
}

#[async_trait]
impl PlayerDataProvider for CfbdClient {
    async fn search_players(
        &self,
        name: &str,
        team: Option<&str>,
        year: i32,
    ) -> Result<Vec<PlayerSearchResult>, ProviderError> {
        let mut params = vec![
            ("searchTerm", name.to_string()),
            ("year", year.to_string()),
        ];
        if let Some(team) = team {
            params.push(("team", team.to_string()));
        }
        self.get_list("/player/search", &params).await
    }

    async fn get_roster(&self, team: &str, year: i32) -> Result<Vec<RosterPlayer>, ProviderError> {
        let params = [("team", team.to_string()), ("year", year.to_string())];
        self.get_list("/roster", &params).await
    }

    async fn get_season_stats(
        &self,
        team: &str,
        year: i32,
    ) -> Result<Vec<PlayerSeasonStat>, ProviderError> {
        let params = [("team", team.to_string()), ("year", year.to_string())];
        self.get_list("/stats/player/season", &params).await
    }

    async fn get_recruits(&self, year: i32) -> Result<Vec<Recruit>, ProviderError> {
        let params = [("year", year.to_string())];
        self.get_list("/recruiting/players", &params).await
    }

    async fn get_transfer_portal(&self, year: i32) -> Result<Vec<PortalTransfer>, ProviderError> {
        let params = [("year", year.to_string())];
        self.get_list("/player/portal", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_skips_bad_records() {
        let body = r#"[
            {"firstName": "Bo", "lastName": "Nix"},
            {"firstName": 17},
            {"firstName": "Dillon", "lastName": "Gabriel"}
        ]"#;
        let decoded: Vec<PortalTransfer> = decode_body(body, "/player/portal").unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].first_name.as_deref(), Some("Bo"));
        assert_eq!(decoded[1].first_name.as_deref(), Some("Dillon"));
    }

    #[test]
    fn test_decode_body_treats_empty_as_no_results() {
        let decoded: Vec<PlayerSearchResult> = decode_body("", "/player/search").unwrap();
        assert!(decoded.is_empty());
        let decoded: Vec<PlayerSearchResult> = decode_body("  \n", "/player/search").unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_body_rejects_non_array_payload() {
        let err = decode_body::<PlayerSearchResult>(r#"{"message": "nope"}"#, "/player/search");
        assert!(matches!(err, Err(ProviderError::Decode(_))));
    }

    #[test]
    fn test_client_builds_without_network() {
        assert!(CfbdClient::new("test-key").is_ok());
    }
}
