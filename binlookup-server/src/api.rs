//! API response types

use binlookup_core::BinRecord;
use serde::{Deserialize, Serialize};

/// Successful lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Always `true`
    pub success: bool,

    /// The matched record exactly as stored
    pub data: BinRecord,
}

impl LookupResponse {
    /// Wrap a matched record
    pub fn new(data: BinRecord) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body returned for every lookup failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Always `false`
    pub success: bool,

    /// Human readable explanation
    pub message: String,
}

impl FailureResponse {
    /// Create a failure body with `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: HealthStatus,

    /// Current UTC time, ISO-8601
    pub timestamp: String,

    /// Number of loaded BIN records
    pub bin_count: usize,
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is answering requests
    Ok,
}

/// Root discovery document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryDocument {
    /// Service name
    pub name: String,

    /// Available endpoints
    pub endpoints: Vec<EndpointInfo>,
}

/// One entry of the discovery document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointInfo {
    /// Route pattern
    pub path: String,

    /// What the route does
    pub description: String,
}

impl DiscoveryDocument {
    /// The document served at `/`
    pub fn current() -> Self {
        Self {
            name: "BIN Lookup API".to_string(),
            endpoints: vec![
                EndpointInfo {
                    path: "/api/lookup/:bin".to_string(),
                    description: "Look up BIN information".to_string(),
                },
                EndpointInfo {
                    path: "/api/health".to_string(),
                    description: "API health check".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_response_shape() {
        let response = HealthResponse {
            status: HealthStatus::Ok,
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            bin_count: 42,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "ok", "timestamp": "2024-01-01T00:00:00.000Z", "binCount": 42})
        );
    }

    #[test]
    fn test_failure_response_shape() {
        let body = FailureResponse::new("BIN not found");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": false, "message": "BIN not found"})
        );
    }

    #[test]
    fn test_discovery_document_shape() {
        assert_eq!(
            serde_json::to_value(DiscoveryDocument::current()).unwrap(),
            json!({
                "name": "BIN Lookup API",
                "endpoints": [
                    {"path": "/api/lookup/:bin", "description": "Look up BIN information"},
                    {"path": "/api/health", "description": "API health check"}
                ]
            })
        );
    }
}
