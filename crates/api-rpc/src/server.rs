//! JSON-RPC Server
//!
//! Serves the race catalogue as JSON-RPC 2.0 over HTTP.

use crate::error::invalid_params;
use crate::handler::RpcHandler;
use crate::types::{GetRaceRequest, ListRacesRequest};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::{ErrorObjectOwned, Params};
use jsonrpsee::RpcModule;
use racing_core::port::RaceRepository;
use serde::de::DeserializeOwned;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub const LIST_RACES_METHOD: &str = "racing.list_races.v1";
pub const GET_RACE_METHOD: &str = "racing.get_race.v1";

const DEFAULT_RPC_ENDPOINT: &str = "127.0.0.1:9000";

/// RPC Server Configuration
pub struct RpcServerConfig {
    /// `host:port` to bind
    pub endpoint: String,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RPC_ENDPOINT.to_string(),
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, race_repo: Arc<dyn RaceRepository>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(race_repo)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port 0) and the server handle.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let endpoint = self.config.endpoint.as_str();

        info!(endpoint = %endpoint, "Starting JSON-RPC server");

        let server = Server::builder()
            .build(endpoint)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", endpoint, e))?;

        let addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let mut module = RpcModule::new(());

        // Register methods
        let handler = self.handler.clone();
        module
            .register_async_method(LIST_RACES_METHOD, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ListRacesRequest = parse_params(params)?;
                    handler.list_races(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method(GET_RACE_METHOD, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GetRaceRequest = parse_params(params)?;
                    handler.get_race(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        info!(%addr, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((addr, handle))
    }
}

/// Accept params as a named object, a single-element positional array
/// wrapping that object, or nothing at all.
fn parse_params<T: DeserializeOwned>(params: Params<'static>) -> Result<T, ErrorObjectOwned> {
    let value: serde_json::Value = params.parse()?;

    let value = match value {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        serde_json::Value::Array(mut items) if items.len() == 1 => items.remove(0),
        other => other,
    };

    serde_json::from_value(value).map_err(|e| invalid_params(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params_shapes() {
        let named: GetRaceRequest = parse_params(Params::new(Some(r#"{"id":7}"#))).unwrap();
        assert_eq!(named.id, 7);

        let positional: GetRaceRequest =
            parse_params(Params::new(Some(r#"[{"id":8}]"#))).unwrap();
        assert_eq!(positional.id, 8);

        let empty: ListRacesRequest = parse_params(Params::new(None)).unwrap();
        assert!(empty.filter.is_none());
        assert!(empty.order_by.is_none());
    }

    #[test]
    fn test_parse_params_rejects_wrong_types() {
        let err = parse_params::<GetRaceRequest>(Params::new(Some(r#"{"id":"seven"}"#)))
            .unwrap_err();
        assert_eq!(err.code(), jsonrpsee::types::error::INVALID_PARAMS_CODE);
    }
}
