use serde_json::Value;
use thiserror::Error;

/// Failure of a single API call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// HTTP 422 with a FastAPI-style `detail: [{msg, ...}]` body
    #[error("Validation failed: {}", .messages.join(", "))]
    Validation { messages: Vec<String> },

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Http { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let json: Option<Value> = serde_json::from_str(body).ok();

        let messages = json
            .as_ref()
            .and_then(|v| v.get("detail"))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(detail_message).collect::<Vec<_>>());

        if let Some(messages) = messages {
            if status == 422 {
                return ApiError::Validation { messages };
            }
            return ApiError::Http {
                status,
                detail: (!messages.is_empty()).then(|| messages.join(", ")),
            };
        }

        let detail = json.as_ref().and_then(|v| {
            v.get("detail")
                .and_then(Value::as_str)
                .or_else(|| v.get("message").and_then(Value::as_str))
                .map(str::to_string)
        });

        ApiError::Http { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { .. } => Some(422),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Text for the UI: validation messages joined, else the backend's own
    /// `detail`/`message`, else `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation { messages } if !messages.is_empty() => messages.join(", "),
            ApiError::Http { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Only 422s are surfaced verbatim; everything else becomes `fallback`
    pub fn validation_message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation { .. } => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

fn detail_message(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        other => other.get("msg").and_then(Value::as_str).map(str::to_string),
    }
}
