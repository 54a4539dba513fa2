use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
}

impl AgentMessage {
    pub fn new<T: Into<String>>(role: MessageRole, content: T) -> Self {
        Self {
            id: uuid(),
            role,
            content: content.into(),
        }
    }

    pub fn system<T: Into<String>>(content: T) -> Self {
        Self::new(MessageRole::System, content)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
}

pub fn uuid() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("msg-{}-{}", now.as_secs(), now.subsec_nanos())
}
