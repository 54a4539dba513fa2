use std::path::PathBuf;
use std::sync::Arc;

use crate::actor::ActorFactory;
use crate::agent::{Agent, AgentFactoryRegistry, AgentSpawn, SeeActAgent};

pub const SEEACT_FACTORY: &str = "seeact";

/// Registers the built-in agents. Every `seeact` agent gets its own
/// timestamped save directory under `base_dir` and an actor from
/// `actor_factory`.
pub fn register_builtin_agent_factories(
    registry: &mut AgentFactoryRegistry,
    base_dir: PathBuf,
    actor_factory: ActorFactory,
) {
    registry.register_factory(
        SEEACT_FACTORY,
        Arc::new(move |spawn: AgentSpawn| {
            let agent = SeeActAgent::new(
                spawn.agent_name,
                spawn.task_input,
                spawn.config,
                &base_dir,
                &actor_factory,
            )?;
            Ok(Box::new(agent) as Box<dyn Agent>)
        }),
    );
}
