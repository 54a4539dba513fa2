use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seeact_agent::logging::LoggingConfig;
use seeact_agent::{
    load_agent_config, register_builtin_agent_factories, ActorScript, ActorTrace,
    AgentFactoryRegistry, AgentManifest, EnvConfig, ScriptedActor, SEEACT_FACTORY,
};

#[derive(Parser, Debug)]
#[command(name = "seeact", version, about = "SeeAct agent runner", author)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the agent against a scripted actor and print the result record
    Run {
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        task: String,
        #[arg(long)]
        script: PathBuf,
        #[arg(long, default_value = "seeact_agent")]
        name: String,
        #[arg(long)]
        base_dir: Option<PathBuf>,
        /// Print the record on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Print the manifest fields of an agent config
    Manifest {
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    LoggingConfig::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            config,
            task,
            script,
            name,
            base_dir,
            compact,
        } => handle_run(config, task, script, name, base_dir, compact)?,
        Command::Manifest { config } => handle_manifest(config)?,
    }
    Ok(())
}

fn handle_run(
    config: PathBuf,
    task: String,
    script: PathBuf,
    name: String,
    base_dir: Option<PathBuf>,
    compact: bool,
) -> anyhow::Result<()> {
    let agent_config = load_agent_config(&config)?;
    let script = ActorScript::from_path(&script)?;
    let base_dir = EnvConfig::base_dir(base_dir)?;
    let trace = ActorTrace::new();

    let mut registry = AgentFactoryRegistry::new();
    register_builtin_agent_factories(
        &mut registry,
        base_dir,
        ScriptedActor::factory(script, trace.clone()),
    );
    let agent = registry.build(SEEACT_FACTORY, name, task, agent_config)?;
    let record = agent.run();

    let content = if compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    println!("{content}");
    tracing::info!(
        executed = trace.executed(),
        events = trace.events().len(),
        "scripted actor finished"
    );
    Ok(())
}

fn handle_manifest(config: PathBuf) -> anyhow::Result<()> {
    let agent_config = load_agent_config(&config)?;
    let manifest = AgentManifest::from_config(&agent_config)?;
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn run_output_is_pretty_unless_compact() {
        let base = ["seeact", "run", "--config", "c.json", "--task", "t", "--script", "s.json"];
        match parse(&base) {
            Command::Run { compact, name, .. } => {
                assert!(!compact);
                assert_eq!(name, "seeact_agent");
            }
            other => panic!("unexpected command {other:?}"),
        }

        let mut args = base.to_vec();
        args.push("--compact");
        assert!(matches!(parse(&args), Command::Run { compact: true, .. }));
    }
}
