//! Racing SDK - Rust Client Library
//!
//! Typed client for the racing catalogue JSON-RPC server.
//!
//! # Example
//!
//! ```no_run
//! use racing_sdk::{ListRacesFilter, ListRacesRequest, RacingClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RacingClient::connect("http://127.0.0.1:9000").await?;
//!
//!     let races = client
//!         .list_races(ListRacesRequest {
//!             filter: Some(ListRacesFilter {
//!                 meeting_ids: vec![5, 7],
//!                 visible_only: true,
//!             }),
//!             order_by: None,
//!         })
//!         .await?;
//!
//!     for race in races {
//!         println!("{} {} ({})", race.id, race.name, race.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::RacingClient;
pub use error::{Result, SdkError};
pub use types::{
    GetRaceRequest, GetRaceResponse, ListRacesFilter, ListRacesOrderBy, ListRacesRequest,
    ListRacesResponse, Race, RaceTimestamp,
};
