//! Racing CLI - browse the race catalogue over JSON-RPC

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9000";

const LIST_RACES_METHOD: &str = "racing.list_races.v1";
const GET_RACE_METHOD: &str = "racing.get_race.v1";

#[derive(Parser)]
#[command(name = "racing")]
#[command(about = "Race catalogue CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "RACING_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List races
    List {
        /// Only races in this meeting (repeatable)
        #[arg(short, long = "meeting-id")]
        meeting_id: Vec<i64>,

        /// Only visible races
        #[arg(long)]
        visible_only: bool,

        /// Sort column (id, meeting_id, name, number, visible, advertised_start_time)
        #[arg(long)]
        sort_column: Option<String>,

        /// Sort direction (asc, desc)
        #[arg(long)]
        sort_direction: Option<String>,
    },

    /// Show one race
    Get {
        /// Race ID
        id: i64,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct WireTimestamp {
    seconds: i64,
    nanos: i32,
}

#[derive(Deserialize)]
struct WireRace {
    id: i64,
    meeting_id: i64,
    name: String,
    number: i64,
    visible: bool,
    advertised_start_time: WireTimestamp,
    status: String,
}

#[derive(Deserialize)]
struct ListRacesResult {
    races: Vec<WireRace>,
}

#[derive(Deserialize)]
struct GetRaceResult {
    race: Option<WireRace>,
}

#[derive(Tabled)]
struct RaceRow {
    id: i64,
    meeting: i64,
    number: i64,
    name: String,
    visible: String,
    start: String,
    status: String,
}

impl From<WireRace> for RaceRow {
    fn from(race: WireRace) -> Self {
        let status = match race.status.as_str() {
            "OPEN" => race.status.green().to_string(),
            "CLOSED" => race.status.red().to_string(),
            _ => race.status,
        };

        Self {
            id: race.id,
            meeting: race.meeting_id,
            number: race.number,
            name: race.name,
            visible: if race.visible { "yes" } else { "no" }.to_string(),
            start: format_start(&race.advertised_start_time),
            status,
        }
    }
}

fn format_start(ts: &WireTimestamp) -> String {
    u32::try_from(ts.nanos)
        .ok()
        .and_then(|nanos| DateTime::from_timestamp(ts.seconds, nanos))
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| format!("{}s+{}ns", ts.seconds, ts.nanos))
}

fn list_params(
    meeting_ids: Vec<i64>,
    visible_only: bool,
    sort_column: Option<String>,
    sort_direction: Option<String>,
) -> serde_json::Value {
    let mut params = json!({
        "filter": {
            "meeting_ids": meeting_ids,
            "visible_only": visible_only,
        },
    });

    if sort_column.is_some() || sort_direction.is_some() {
        params["order_by"] = json!({
            "column": sort_column,
            "direction": sort_direction,
        });
    }

    params
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to server")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            meeting_id,
            visible_only,
            sort_column,
            sort_direction,
        } => {
            let params = list_params(meeting_id, visible_only, sort_column, sort_direction);
            let result = call_rpc(&cli.rpc_url, LIST_RACES_METHOD, params).await?;
            let list: ListRacesResult = serde_json::from_value(result)?;

            if list.races.is_empty() {
                println!("{}", "No races found".yellow());
                return Ok(());
            }

            println!("{}", format!("{} races", list.races.len()).cyan().bold());
            let rows: Vec<RaceRow> = list.races.into_iter().map(RaceRow::from).collect();
            println!("{}", Table::new(rows));
        }

        Commands::Get { id } => {
            let result = call_rpc(&cli.rpc_url, GET_RACE_METHOD, json!({ "id": id })).await?;
            let found: GetRaceResult = serde_json::from_value(result)?;

            match found.race {
                Some(race) => println!("{}", Table::new(vec![RaceRow::from(race)])),
                None => println!("{}", format!("Race {} not found", id).yellow()),
            }
        }
    }

    Ok(())
}
