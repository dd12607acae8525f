// Port Layer - Interfaces for external dependencies

pub mod race_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use race_repository::RaceRepository;
pub use time_provider::TimeProvider;
