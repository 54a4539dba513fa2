pub mod actor;
pub mod agent;
pub mod config;
pub mod error;
pub mod utils;

pub use actor::{
    ActorEvent, ActorFactory, ActorScript, ActorSettings, ActorTrace, Prediction, ScriptedActor,
    WebActor, DEFAULT_MODEL, DEFAULT_WEBSITE, PDF_OPEN_MARKER,
};
pub use agent::{
    register_builtin_agent_factories, save_dir_for, Agent, AgentFactory, AgentFactoryRegistry,
    AgentMessage, AgentSpawn, MessageRole, RunOutcome, RunRecord, RunReport, SeeActAgent,
    WorkflowMode, MAX_ROUNDS, RESULT_TEXT, SAVE_ROOT_DIR, SEEACT_FACTORY,
};
pub use config::{
    agent_config_from_value, description_text, load_agent_config, AgentConfig, AgentManifest,
    AgentMeta, EnvConfig,
};
pub use error::{Result, SeeActError};
pub use utils::logging;
