use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SeeActError};

/// Raw agent configuration: the top-level object of an agent's `config.json`.
pub type AgentConfig = Map<String, Value>;

pub const DESCRIPTION_FIELD: &str = "description";

pub fn load_agent_config(path: &Path) -> Result<AgentConfig> {
    let raw = fs::read_to_string(path)?;
    let value: Value =
        serde_json::from_str(&raw).map_err(|e| SeeActError::Serialization(e.to_string()))?;
    agent_config_from_value(value)
}

pub fn agent_config_from_value(value: Value) -> Result<AgentConfig> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SeeActError::InvalidField {
            field: "<root>".into(),
            reason: format!("expected an object, found {}", kind_of(&other)),
        }),
    }
}

/// Joins the `description` lines of a config into one prompt string, with no
/// separator. Strings are taken verbatim; numbers and booleans use their JSON
/// text.
pub fn description_text(config: &AgentConfig) -> Result<String> {
    let lines = config
        .get(DESCRIPTION_FIELD)
        .ok_or_else(|| SeeActError::MissingField(DESCRIPTION_FIELD.into()))?;
    let lines = lines.as_array().ok_or_else(|| SeeActError::InvalidField {
        field: DESCRIPTION_FIELD.into(),
        reason: format!("expected an array, found {}", kind_of(lines)),
    })?;

    let mut prompt = String::new();
    for (index, line) in lines.iter().enumerate() {
        match line {
            Value::String(text) => prompt.push_str(text),
            Value::Number(number) => prompt.push_str(&number.to_string()),
            Value::Bool(flag) => prompt.push_str(if *flag { "true" } else { "false" }),
            other => {
                return Err(SeeActError::InvalidField {
                    field: format!("{DESCRIPTION_FIELD}[{index}]"),
                    reason: format!("cannot use {} as text", kind_of(other)),
                })
            }
        }
    }
    Ok(prompt)
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Typed view over the well-known fields of an [`AgentConfig`]. Unknown
/// fields are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(default)]
    pub meta: AgentMeta,
}

impl AgentManifest {
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        serde_json::from_value(Value::Object(config.clone()))
            .map_err(|e| SeeActError::Serialization(e.to_string()))
    }
}
