use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub action: CommandAction,
    #[serde(default = "empty_payload")]
    pub payload: Value,
}

fn empty_payload() -> Value {
    Value::Object(Default::default())
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    Encode,
    Compare,
}

impl CommandAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            CommandAction::Encode => "encode",
            CommandAction::Compare => "compare",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EncodePayload {
    pub word: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ComparePayload {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EncodeOutput {
    pub word: String,
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CompareOutput {
    pub left: EncodeOutput,
    pub right: EncodeOutput,
    pub matches: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct CommandResponse {
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub meta: ResponseMeta,
}

impl CommandResponse {
    pub fn is_error(&self) -> bool {
        matches!(self.status, CommandStatus::Error)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize, Clone)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Serialize, Default, Clone)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_us: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub code: String,
    pub hint: Option<String>,
}

pub fn classify_error(message: &str, action: Option<CommandAction>) -> ErrorClassification {
    let lower = message.to_ascii_lowercase();

    if lower.contains("non-empty") {
        let hint = match action {
            Some(CommandAction::Compare) => "Both words must contain at least one character",
            _ => "Pass a word with at least one character",
        };
        return ErrorClassification {
            code: "invalid_argument".to_string(),
            hint: Some(hint.to_string()),
        };
    }

    if lower.contains("invalid config") || lower.contains("failed to read config") {
        return ErrorClassification {
            code: "config_error".to_string(),
            hint: Some(format!(
                "Check the TOML file passed via --config or {}, or remove it",
                crate::config::CONFIG_ENV
            )),
        };
    }

    if lower.contains("invalid json")
        || lower.contains("request is empty")
        || lower.contains("failed to read json")
    {
        return ErrorClassification {
            code: "invalid_request".to_string(),
            hint: Some(
                "Expected {\"action\": \"encode\" | \"compare\", \"payload\": {...}}".to_string(),
            ),
        };
    }

    if lower.contains("invalid payload") {
        return ErrorClassification {
            code: "invalid_request".to_string(),
            hint: action.map(|action| match action {
                CommandAction::Encode => "Expected payload {\"word\": \"...\"}".to_string(),
                CommandAction::Compare => {
                    "Expected payload {\"left\": \"...\", \"right\": \"...\"}".to_string()
                }
            }),
        };
    }

    ErrorClassification {
        code: "internal".to_string(),
        hint: None,
    }
}
