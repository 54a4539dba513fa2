use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SeeActError};

use super::actor::{ActorFactory, WebActor};
use super::prediction::Prediction;
use super::settings::ActorSettings;

pub const TRAJECTORY_FILE: &str = "trajectory.json";

/// Predictions replayed by a [`ScriptedActor`], in order. `null` entries
/// stand for rounds where the model produced nothing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ActorScript {
    #[serde(default)]
    pub predictions: Vec<Option<Prediction>>,
}

impl ActorScript {
    pub fn new(predictions: Vec<Option<Prediction>>) -> Self {
        Self { predictions }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| SeeActError::Serialization(e.to_string()))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ActorEvent {
    Started { task: String, website: String },
    Predicted { prediction: Option<Prediction> },
    Executed { prediction: Prediction },
    Stopped,
}

/// Shared log of the calls a scripted actor received.
#[derive(Clone, Debug, Default)]
pub struct ActorTrace {
    events: Arc<Mutex<Vec<ActorEvent>>>,
}

impl ActorTrace {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: ActorEvent) {
        self.events.lock().push(event);
    }

    pub fn events(&self) -> Vec<ActorEvent> {
        self.events.lock().clone()
    }

    pub fn executed(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, ActorEvent::Executed { .. }))
            .count()
    }

    pub fn stopped(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, ActorEvent::Stopped))
            .count()
    }
}

#[derive(Serialize)]
struct Trajectory<'a> {
    settings: &'a ActorSettings,
    events: Vec<ActorEvent>,
}

/// Local stand-in for a browser actor: replays canned predictions and writes
/// the resulting trajectory into the save directory when stopped.
pub struct ScriptedActor {
    settings: ActorSettings,
    pending: VecDeque<Option<Prediction>>,
    trace: ActorTrace,
    started: bool,
    complete: bool,
}

impl ScriptedActor {
    pub fn new(settings: ActorSettings, script: ActorScript, trace: ActorTrace) -> Self {
        Self {
            settings,
            pending: script.predictions.into(),
            trace,
            started: false,
            complete: false,
        }
    }

    pub fn factory(script: ActorScript, trace: ActorTrace) -> ActorFactory {
        Arc::new(move |settings: &ActorSettings| {
            Ok(Box::new(ScriptedActor::new(
                settings.clone(),
                script.clone(),
                trace.clone(),
            )) as Box<dyn WebActor>)
        })
    }

    fn write_trajectory(&self) -> Result<()> {
        let dir = &self.settings.save_file_dir;
        fs::create_dir_all(dir)?;
        let payload = Trajectory {
            settings: &self.settings,
            events: self.trace.events(),
        };
        let content = serde_json::to_string_pretty(&payload)
            .map_err(|e| SeeActError::Serialization(e.to_string()))?;
        fs::write(dir.join(TRAJECTORY_FILE), content)?;
        Ok(())
    }
}

#[async_trait]
impl WebActor for ScriptedActor {
    async fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(SeeActError::actor("start", "actor already started"));
        }
        self.started = true;
        self.trace.push(ActorEvent::Started {
            task: self.settings.default_task.clone(),
            website: self.settings.default_website.clone(),
        });
        Ok(())
    }

    async fn predict(&mut self) -> Result<Option<Prediction>> {
        if !self.started {
            return Err(SeeActError::actor("predict", "actor not started"));
        }
        let prediction = match self.pending.pop_front() {
            Some(next) => next,
            None => {
                debug!("script exhausted");
                self.complete = true;
                None
            }
        };
        self.trace.push(ActorEvent::Predicted {
            prediction: prediction.clone(),
        });
        Ok(prediction)
    }

    async fn execute(&mut self, prediction: &Prediction) -> Result<()> {
        if !self.started {
            return Err(SeeActError::actor("execute", "actor not started"));
        }
        self.trace.push(ActorEvent::Executed {
            prediction: prediction.clone(),
        });
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        self.trace.push(ActorEvent::Stopped);
        self.started = false;
        self.write_trajectory()
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn mark_complete(&mut self) {
        self.complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn script(values: Vec<serde_json::Value>) -> ActorScript {
        ActorScript::new(values.into_iter().map(Prediction::from_value).collect())
    }

    #[tokio::test]
    async fn replays_then_reports_completion() {
        let dir = tempfile::tempdir().unwrap();
        let trace = ActorTrace::new();
        let settings = ActorSettings::for_task("find pdf", dir.path().join("run"));
        let mut actor = ScriptedActor::new(
            settings,
            script(vec![json!({ "action": "CLICK" }), serde_json::Value::Null]),
            trace.clone(),
        );

        actor.start().await.unwrap();
        let first = actor.predict().await.unwrap().unwrap();
        actor.execute(&first).await.unwrap();
        assert!(actor.predict().await.unwrap().is_none());
        assert!(!actor.is_complete());
        assert!(actor.predict().await.unwrap().is_none());
        assert!(actor.is_complete());
        actor.stop().await.unwrap();

        assert_eq!(trace.executed(), 1);
        assert_eq!(trace.stopped(), 1);
        let written = fs::read_to_string(dir.path().join("run").join(TRAJECTORY_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["settings"]["default_task"], "find pdf");
        assert_eq!(value["events"][0]["event"], "started");
    }

    #[tokio::test]
    async fn predict_before_start_fails() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ActorSettings::for_task("task", dir.path().to_path_buf());
        let mut actor = ScriptedActor::new(settings, ActorScript::default(), ActorTrace::new());
        let err = actor.predict().await.unwrap_err();
        assert!(matches!(err, SeeActError::Actor { operation: "predict", .. }));
    }

    #[test]
    fn script_parses_nulls_as_empty_rounds() {
        let parsed: ActorScript =
            serde_json::from_value(json!({ "predictions": [null, { "SAY": "hi" }] })).unwrap();
        assert_eq!(parsed.predictions.len(), 2);
        assert!(parsed.predictions[0].is_none());
        assert_eq!(parsed.predictions[1].as_ref().unwrap().say().unwrap(), Some("hi"));
    }
}
