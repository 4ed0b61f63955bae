//! V1 API handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod todos;


pub use todos::*;

/// Error response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Todo not found")]
    pub error: String,
}
