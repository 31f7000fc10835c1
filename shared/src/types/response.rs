//! Standard API response envelope
//!
//! Every endpoint responds with `{ "success": bool, "message": string }`
//! plus an optional `data` payload.

use serde::{Deserialize, Serialize};

/// Response envelope shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response without a payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Successful response carrying a payload
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed response with a user-facing message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_data_field_when_none() {
        let response: ApiResponse<()> = ApiResponse::ok("done");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn serializes_payload() {
        let response = ApiResponse::with_data("sent", serde_json::json!({ "code": "482913" }));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["code"], "482913");
    }
}
