//! RPC Method Handlers
//!
//! Translates JSON-RPC requests into repository calls.

use crate::error::to_rpc_error;
use crate::types::{GetRaceRequest, GetRaceResponse, ListRacesRequest, ListRacesResponse};
use jsonrpsee::types::ErrorObjectOwned;
use racing_core::domain::{ListFilter, SortSpec};
use racing_core::port::RaceRepository;
use std::sync::Arc;
use tracing::debug;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    race_repo: Arc<dyn RaceRepository>,
}

impl RpcHandler {
    pub fn new(race_repo: Arc<dyn RaceRepository>) -> Self {
        Self { race_repo }
    }

    /// racing.list_races.v1
    pub async fn list_races(
        &self,
        params: ListRacesRequest,
    ) -> Result<ListRacesResponse, ErrorObjectOwned> {
        let filter = params.filter.map(ListFilter::from);
        let sort = params.order_by.map(SortSpec::from);

        let races = self
            .race_repo
            .list(filter.as_ref(), sort.as_ref())
            .await
            .map_err(to_rpc_error)?;

        debug!(count = races.len(), "racing.list_races.v1");
        Ok(ListRacesResponse { races })
    }

    /// racing.get_race.v1
    pub async fn get_race(
        &self,
        params: GetRaceRequest,
    ) -> Result<GetRaceResponse, ErrorObjectOwned> {
        let race = self
            .race_repo
            .get(params.id)
            .await
            .map_err(to_rpc_error)?;

        debug!(id = params.id, found = race.is_some(), "racing.get_race.v1");
        Ok(GetRaceResponse { race })
    }
}
