use std::fs;

use serde_json::json;

use seeact_agent::actor::scripted::TRAJECTORY_FILE;
use seeact_agent::{
    agent_config_from_value, load_agent_config, register_builtin_agent_factories, ActorEvent,
    ActorScript, ActorTrace, AgentFactoryRegistry, AgentManifest, Prediction, ScriptedActor,
    SeeActError, RESULT_TEXT, SEEACT_FACTORY,
};

fn script(values: Vec<serde_json::Value>) -> ActorScript {
    ActorScript::new(values.into_iter().map(Prediction::from_value).collect())
}

#[test]
fn registry_builds_seeact_agent_and_runs_script() {
    let base = tempfile::tempdir().unwrap();
    let trace = ActorTrace::new();
    let mut registry = AgentFactoryRegistry::new();
    register_builtin_agent_factories(
        &mut registry,
        base.path().to_path_buf(),
        ScriptedActor::factory(
            script(vec![
                json!({ "action": "TYPE", "value": "sample pdf" }),
                json!({ "action": "CLICK" }),
                json!({ "action": "NONE", "SAY": "The PDF is open in the viewer" }),
            ]),
            trace.clone(),
        ),
    );
    assert!(registry.has_factory(SEEACT_FACTORY));

    let config = agent_config_from_value(json!({ "description": ["Find a PDF"] })).unwrap();
    let agent = registry
        .build(SEEACT_FACTORY, "seeact_demo_agent", "find pdf", config)
        .unwrap();
    assert_eq!(agent.name(), "seeact_demo_agent");

    let record = agent.run();
    assert_eq!(record.rounds, 2);
    assert_eq!(record.result, RESULT_TEXT);
    assert_eq!(trace.executed(), 2);
    assert_eq!(trace.stopped(), 1);
    assert!(matches!(
        trace.events().first(),
        Some(ActorEvent::Started { task, .. }) if task == "find pdf"
    ));

    let trajectory = std::path::Path::new(&record.result_path).join(TRAJECTORY_FILE);
    assert!(trajectory.starts_with(base.path().join("seeact_agent_files")));
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(trajectory).unwrap()).unwrap();
    assert_eq!(written["settings"]["headless"], json!(true));
}

#[test]
fn exhausted_script_ends_run_as_completed() {
    let base = tempfile::tempdir().unwrap();
    let trace = ActorTrace::new();
    let mut registry = AgentFactoryRegistry::new();
    register_builtin_agent_factories(
        &mut registry,
        base.path().to_path_buf(),
        ScriptedActor::factory(script(vec![json!({ "action": "CLICK" })]), trace.clone()),
    );

    let config = agent_config_from_value(json!({ "description": ["Browse"] })).unwrap();
    let record = registry
        .build(SEEACT_FACTORY, "seeact_demo_agent", "browse", config)
        .unwrap()
        .run();

    // one executed round, then one empty round that exhausts the script
    assert_eq!(record.rounds, 2);
    assert_eq!(trace.executed(), 1);
    assert_eq!(trace.stopped(), 1);
}

#[test]
fn unknown_factory_is_rejected() {
    let registry = AgentFactoryRegistry::new();
    let config = agent_config_from_value(json!({ "description": [] })).unwrap();
    let err = registry
        .build("browser_use", "agent", "task", config)
        .err()
        .unwrap();
    assert!(matches!(err, SeeActError::AgentNotRegistered(name) if name == "browser_use"));
}

#[test]
fn config_file_loads_into_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "name": "seeact_demo_agent",
            "description": ["You are a web agent. ", "Open the requested PDF."],
            "tools": [],
            "meta": { "author": "example", "version": "0.0.1", "license": "CC0" }
        }"#,
    )
    .unwrap();

    let config = load_agent_config(&path).unwrap();
    let manifest = AgentManifest::from_config(&config).unwrap();
    assert_eq!(manifest.name, "seeact_demo_agent");
    assert_eq!(manifest.description.len(), 2);
    assert_eq!(manifest.meta.author.as_deref(), Some("example"));
}
