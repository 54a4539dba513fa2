use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Text placed in every [`RunRecord::result`], whatever happened during the run.
pub const RESULT_TEXT: &str = "Task completed";

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowMode {
    #[default]
    Manual,
}

/// Fixed-shape summary handed back to whoever ran an agent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRecord {
    pub agent_name: String,
    pub result: String,
    pub rounds: u32,
    pub result_path: String,
}

impl RunRecord {
    pub fn completed<T: Into<String>>(agent_name: T, rounds: u32, result_path: String) -> Self {
        Self {
            agent_name: agent_name.into(),
            result: RESULT_TEXT.to_string(),
            rounds,
            result_path,
        }
    }
}

/// Contract shared by every runnable agent.
///
/// `run` consumes the agent: per-run state does not outlive the call.
pub trait Agent: Send {
    fn name(&self) -> &str;
    fn build_system_instruction(&mut self) -> Result<()>;
    fn run(self: Box<Self>) -> RunRecord;
}
