//! Racing Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{GetRaceRequest, GetRaceResponse, ListRacesRequest, ListRacesResponse, Race};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::time::Duration;

const LIST_RACES_METHOD: &str = "racing.list_races.v1";
const GET_RACE_METHOD: &str = "racing.get_race.v1";

/// Racing catalogue client
///
/// # Example
///
/// ```no_run
/// use racing_sdk::RacingClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RacingClient::connect("http://127.0.0.1:9000").await?;
/// # Ok(())
/// # }
/// ```
pub struct RacingClient {
    client: HttpClient,
}

impl RacingClient {
    /// Connect to the racing server
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9000`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        Self::connect_with_timeout(url, Duration::from_secs(30)).await
    }

    /// Connect with a per-request deadline
    ///
    /// A request that outlives `timeout` is abandoned, which also cancels the
    /// query on the server side.
    pub async fn connect_with_timeout(url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// List races
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use racing_sdk::{RacingClient, ListRacesRequest, ListRacesOrderBy};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = RacingClient::connect("http://127.0.0.1:9000").await?;
    /// let races = client.list_races(ListRacesRequest {
    ///     filter: None,
    ///     order_by: Some(ListRacesOrderBy {
    ///         column: Some("meeting_id".to_string()),
    ///         direction: Some("asc".to_string()),
    ///     }),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_races(&self, request: ListRacesRequest) -> Result<Vec<Race>> {
        let params = rpc_params![request];
        let response: ListRacesResponse = self.client.request(LIST_RACES_METHOD, params).await?;

        Ok(response.races)
    }

    /// Fetch a race by id; `Ok(None)` when it does not exist
    pub async fn get_race(&self, id: i64) -> Result<Option<Race>> {
        let params = rpc_params![GetRaceRequest { id }];
        let response: GetRaceResponse = self.client.request(GET_RACE_METHOD, params).await?;

        Ok(response.race)
    }
}
