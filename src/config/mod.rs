pub mod agent_config;
pub mod env;

pub use agent_config::{
    agent_config_from_value, description_text, load_agent_config, AgentConfig, AgentManifest,
    AgentMeta, DESCRIPTION_FIELD,
};
pub use env::EnvConfig;
