//! Simple SDK Example
//!
//! Lists open races for two meetings, then fetches one by id.
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package racing-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package racing-sdk --example simple
//!    ```

use racing_sdk::{ListRacesFilter, ListRacesOrderBy, ListRacesRequest, RacingClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Racing SDK - Simple Example");
    println!("===========================\n");

    let client = RacingClient::connect("http://127.0.0.1:9000").await?;

    let races = client
        .list_races(ListRacesRequest {
            filter: Some(ListRacesFilter {
                meeting_ids: vec![5, 7],
                visible_only: true,
            }),
            order_by: Some(ListRacesOrderBy {
                column: Some("advertised_start_time".to_string()),
                direction: Some("asc".to_string()),
            }),
        })
        .await?;

    println!("{} visible races in meetings 5 and 7:", races.len());
    for race in &races {
        let start = race
            .advertised_start_time
            .to_datetime()
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        println!(
            "  #{:<4} meeting {:<3} R{:<2} {:<20} {} {}",
            race.id, race.meeting_id, race.number, race.name, start, race.status
        );
    }

    match client.get_race(1).await? {
        Some(race) => println!("\nRace 1: {} ({})", race.name, race.status),
        None => println!("\nRace 1 not found"),
    }

    Ok(())
}
