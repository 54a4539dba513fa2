use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::agent_config::kind_of;
use crate::error::{Result, SeeActError};

/// Lowercased phrase in a prediction's `SAY` text that ends the run early.
pub const PDF_OPEN_MARKER: &str = "pdf is open";

const SAY_KEY: &str = "SAY";

/// One predicted step as returned by the actor, kept as the raw key/value map.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Prediction(pub Map<String, Value>);

impl Prediction {
    /// Builds a prediction from a JSON value; anything but an object yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Free text the model wanted to say alongside the action. An absent key
    /// reads as no text; a present non-string value is an error.
    pub fn say(&self) -> Result<Option<&str>> {
        match self.0.get(SAY_KEY) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text)),
            Some(other) => Err(SeeActError::InvalidField {
                field: SAY_KEY.into(),
                reason: format!("expected a string, found {}", kind_of(other)),
            }),
        }
    }

    pub fn announces_open_pdf(&self) -> Result<bool> {
        Ok(self
            .say()?
            .map(|text| text.to_lowercase().contains(PDF_OPEN_MARKER))
            .unwrap_or(false))
    }
}
