use serde::Serialize;
use serde_json::Value;

/// What a surface shows the user: an alert (`title` + `message`) and, for
/// read-only surfaces, the data to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    pub title: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Response {
    pub fn success(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: true,
            title,
            message: message.into(),
            data: None,
        }
    }

    pub fn failure(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            title,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Text printed by the binary: JSON data when present, else the alert line.
    pub fn render(&self, pretty: bool) -> String {
        let Some(data) = &self.data else {
            return format!("{}: {}", self.title, self.message);
        };

        let json = if pretty {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        };

        json.unwrap_or_else(|e| format!("Error: failed to render response: {e}"))
    }
}
