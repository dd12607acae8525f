//! JSON-RPC API Layer
//!
//! Exposes the race catalogue as a JSON-RPC 2.0 server over HTTP.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::RpcServer;
