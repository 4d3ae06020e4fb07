//! DTOs for dashboard HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::dashboard::Toggles;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string accepted by page endpoints.
///
/// Every field stays a string so a malformed value becomes a dashboard
/// error rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub tasks: Option<String>,
}

impl PageParams {
    /// Parsed year; an empty value counts as absent.
    pub fn year(&self) -> Result<Option<i32>, String> {
        match self.year.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| format!("Invalid year '{}'", raw)),
        }
    }

    /// Checkbox states; accepts `true/false`, `1/0`, `on/off` and `yes/no`.
    pub fn toggles(&self) -> Result<Toggles, String> {
        Ok(Toggles {
            raw: flag("raw", self.raw.as_deref())?,
            forecast: flag("forecast", self.forecast.as_deref())?,
            tasks: flag("tasks", self.tasks.as_deref())?,
        })
    }
}

fn flag(name: &str, value: Option<&str>) -> Result<bool, String> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "" | "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(format!("Invalid value '{}' for {}", value, name)),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
