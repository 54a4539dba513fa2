pub mod agent;
pub mod builtin;
pub mod factory;
pub mod message;
pub mod seeact;

pub use agent::{Agent, RunRecord, WorkflowMode, RESULT_TEXT};
pub use builtin::{register_builtin_agent_factories, SEEACT_FACTORY};
pub use factory::{AgentFactory, AgentFactoryRegistry, AgentSpawn};
pub use message::{AgentMessage, MessageRole};
pub use seeact::{save_dir_for, RunOutcome, RunReport, SeeActAgent, MAX_ROUNDS, SAVE_ROOT_DIR};
