use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AgentConfig;
use crate::error::{Result, SeeActError};

use super::agent::Agent;

/// Everything an agent needs at construction time.
#[derive(Clone, Debug)]
pub struct AgentSpawn {
    pub agent_name: String,
    pub task_input: String,
    pub config: AgentConfig,
}

pub type AgentFactory = Arc<dyn Fn(AgentSpawn) -> Result<Box<dyn Agent>> + Send + Sync>;

#[derive(Default)]
pub struct AgentFactoryRegistry {
    factories: HashMap<String, AgentFactory>,
}

impl AgentFactoryRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register_factory<T: Into<String>>(&mut self, name: T, factory: AgentFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn build<N, T>(
        &self,
        factory_name: &str,
        agent_name: N,
        task_input: T,
        config: AgentConfig,
    ) -> Result<Box<dyn Agent>>
    where
        N: Into<String>,
        T: Into<String>,
    {
        let builder = self
            .factories
            .get(factory_name)
            .ok_or_else(|| SeeActError::AgentNotRegistered(factory_name.to_string()))?;
        builder(AgentSpawn {
            agent_name: agent_name.into(),
            task_input: task_input.into(),
            config,
        })
    }

    pub fn has_factory(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}
