//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::error::INVALID_PARAMS_CODE;
use jsonrpsee::types::ErrorObjectOwned;
use racing_core::error::AppError;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const DB_ERROR: i32 = 5001;
    pub const UNAVAILABLE: i32 = 5003;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Validation(msg) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::StoreUnavailable(msg) => {
            ErrorObjectOwned::owned(code::UNAVAILABLE, msg, None::<()>)
        }
        AppError::Database(msg) => ErrorObjectOwned::owned(code::DB_ERROR, msg, None::<()>),
        AppError::MalformedTimestamp(msg) => ErrorObjectOwned::owned(
            code::INTERNAL_ERROR,
            format!("Malformed timestamp: {}", msg),
            None::<()>,
        ),
        AppError::SeedFailure(msg) => ErrorObjectOwned::owned(
            code::INTERNAL_ERROR,
            format!("Seed failure: {}", msg),
            None::<()>,
        ),
        AppError::Config(msg) | AppError::Internal(msg) => {
            ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>)
        }
    }
}

/// Malformed request parameters (standard JSON-RPC code)
pub fn invalid_params(msg: impl Into<String>) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(INVALID_PARAMS_CODE, msg.into(), None::<()>)
}
