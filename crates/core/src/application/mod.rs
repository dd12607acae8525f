// Application Layer - Use-case level building blocks

pub mod init_once;

// Re-exports
pub use init_once::InitOnce;
