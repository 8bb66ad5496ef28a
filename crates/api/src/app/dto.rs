use serde::{Deserialize, Serialize};

pub use holdup_core::{CalculationRequest, CalculationResult};

pub const GREETING: &str = "Hello from backend API";

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            message: GREETING.to_string(),
        }
    }
}

/// Error payload. `details` is only present for server-side faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
