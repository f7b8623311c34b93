// ODsay API client and the end-to-end route resolution:
// searchPubTransPathT -> pick the best path -> loadLane for its mapObj.

use crate::error::RouteError;
use crate::models::{Coordinate, RideHint, SearchPathResponse};
use crate::path_select::select_path;
use log::warn;
use std::time::Duration;

pub const ODSAY_BASE: &str = "https://api.odsay.com/v1/api";

/// Fixed destination for every request: the Yonsei University library.
pub const LIBRARY: Coordinate = Coordinate {
    lat: 37.563729,
    lng: 126.936898,
};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared, read-only ODsay client. The API key is optional at
/// construction so the server can boot without one; the missing key only
/// fails the individual request that needs it.
#[derive(Debug, Clone)]
pub struct OdsayClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl OdsayClient {
    pub fn new(api_key: Option<String>) -> OdsayClient {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("reqwest client construction failed");

        OdsayClient { client, api_key }
    }

    /// Reads ODSAY_API_KEY. A missing key is only a warning here so the
    /// server still comes up; requests will fail with MissingCredential.
    pub fn from_env() -> OdsayClient {
        let api_key = std::env::var("ODSAY_API_KEY").ok();
        if api_key.is_none() {
            warn!("ODSAY_API_KEY is not set, ODsay requests will fail until it is");
        }
        OdsayClient::new(api_key)
    }

    /// One GET against the ODsay API with the shared base parameters
    /// merged in, plus ODsay's in-band error convention: a 200 whose body
    /// carries an "error" object is still a failure.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, RouteError> {
        let api_key = self.api_key.as_ref().ok_or(RouteError::MissingCredential)?;

        let mut query: Vec<(&str, String)> = vec![
            ("apiKey", api_key.clone()),
            ("lang", "0".to_string()),
            ("output", "json".to_string()),
        ];
        query.extend(params.iter().cloned());

        let url = format!("{ODSAY_BASE}/{endpoint}");
        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;

        if let Some(error) = body.get("error") {
            let code = error
                .get("code")
                .map(json_field_to_string)
                .unwrap_or_default();
            let msg = error
                .get("msg")
                .map(json_field_to_string)
                .unwrap_or_else(|| "ODsay error".to_string());
            return Err(RouteError::UpstreamReported { code, msg });
        }

        Ok(body)
    }

    /// Searches bus+subway routes from `from` to the library, in ODsay's
    /// recommended-path ranking (OPT=0, SearchPathType=0).
    pub async fn search_transit_path(
        &self,
        from: Coordinate,
    ) -> Result<serde_json::Value, RouteError> {
        self.get(
            "searchPubTransPathT",
            &[
                ("SX", from.lng.to_string()),
                ("SY", from.lat.to_string()),
                ("EX", LIBRARY.lng.to_string()),
                ("EY", LIBRARY.lat.to_string()),
                ("OPT", "0".to_string()),
                ("SearchPathType", "0".to_string()),
            ],
        )
        .await
    }

    /// Fetches the graphical lane data for one itinerary handle. ODsay
    /// wants the handle wrapped as mapObject=0:0@{mapObj}.
    pub async fn load_lane(&self, map_obj: &str) -> Result<serde_json::Value, RouteError> {
        self.get("loadLane", &[("mapObject", format!("0:0@{map_obj}"))])
            .await
    }

    /// The whole operation: route from `from` to the library, pick the
    /// path matching the hints best, and return its loadLane payload
    /// verbatim. Two sequential upstream calls, no retries.
    pub async fn lane_graph_to_library(
        &self,
        from: Coordinate,
        hint: &RideHint,
    ) -> Result<serde_json::Value, RouteError> {
        let raw = self.search_transit_path(from).await?;
        let search: SearchPathResponse = serde_json::from_value(raw)
            .map_err(|e| RouteError::MalformedResponse(e.to_string()))?;

        let path = select_path(&search, hint)?;
        let map_obj = path
            .info
            .map_obj
            .as_deref()
            .filter(|handle| !handle.is_empty())
            .ok_or(RouteError::MissingMapObject)?;

        self.load_lane(map_obj).await
    }
}

fn json_field_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
