use std::path::{Path, PathBuf};
use std::thread;

use chrono::{DateTime, Local};
use tokio::runtime::{Builder, Handle, Runtime};
use tracing::{debug, info, warn};

use crate::actor::{ActorFactory, ActorSettings, WebActor};
use crate::config::{description_text, AgentConfig};
use crate::error::{Result, SeeActError};

use super::agent::{Agent, RunRecord, WorkflowMode};
use super::message::AgentMessage;

pub const MAX_ROUNDS: u32 = 5;
pub const SAVE_ROOT_DIR: &str = "seeact_agent_files";
const SAVE_DIR_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `<base>/seeact_agent_files/<YYYYMMDD_HHMMSS>`
pub fn save_dir_for(base_dir: &Path, at: &DateTime<Local>) -> PathBuf {
    base_dir
        .join(SAVE_ROOT_DIR)
        .join(at.format(SAVE_DIR_FORMAT).to_string())
}

/// How a run actually ended. Callers of [`SeeActAgent::run`] only ever see
/// the [`RunRecord`]; this is kept for logging and for callers that opt in
/// through [`SeeActAgent::run_with_outcome`].
#[derive(Debug)]
pub enum RunOutcome {
    /// The actor raised its own completion flag.
    Completed,
    /// A prediction announced an open PDF; completion was forced.
    PdfOpened,
    RoundCapReached,
    Failed(SeeActError),
}

impl RunOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failed(_))
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub record: RunRecord,
}

/// Drives a [`WebActor`] through a bounded predict/execute loop and reports
/// the run as a [`RunRecord`], never as an error.
pub struct SeeActAgent {
    agent_name: String,
    task_input: String,
    config: AgentConfig,
    messages: Vec<AgentMessage>,
    workflow_mode: WorkflowMode,
    rounds: u32,
    max_rounds: u32,
    save_dir: PathBuf,
    actor: Box<dyn WebActor>,
    stop_attempted: bool,
}

impl SeeActAgent {
    /// Builds the agent and its actor. The save directory is stamped with the
    /// current local time under `base_dir`. Actor construction errors are
    /// returned as is.
    pub fn new<N, T>(
        agent_name: N,
        task_input: T,
        config: AgentConfig,
        base_dir: &Path,
        actor_factory: &ActorFactory,
    ) -> Result<Self>
    where
        N: Into<String>,
        T: Into<String>,
    {
        let save_dir = save_dir_for(base_dir, &Local::now());
        Self::with_save_dir(agent_name, task_input, config, save_dir, actor_factory)
    }

    pub fn with_save_dir<N, T>(
        agent_name: N,
        task_input: T,
        config: AgentConfig,
        save_dir: PathBuf,
        actor_factory: &ActorFactory,
    ) -> Result<Self>
    where
        N: Into<String>,
        T: Into<String>,
    {
        let agent_name = agent_name.into();
        let task_input = task_input.into();
        let settings = ActorSettings::for_task(task_input.clone(), save_dir.clone());
        let actor = actor_factory(&settings)?;
        debug!(agent = %agent_name, save_dir = %save_dir.display(), "actor constructed");

        Ok(Self {
            agent_name,
            task_input,
            config,
            messages: Vec::new(),
            workflow_mode: WorkflowMode::Manual,
            rounds: 0,
            max_rounds: MAX_ROUNDS,
            save_dir,
            actor,
            stop_attempted: false,
        })
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn task_input(&self) -> &str {
        &self.task_input
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn messages(&self) -> &[AgentMessage] {
        &self.messages
    }

    pub fn workflow_mode(&self) -> WorkflowMode {
        self.workflow_mode
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn build_system_instruction(&mut self) -> Result<()> {
        let prompt = description_text(&self.config)?;
        self.messages.push(AgentMessage::system(prompt));
        Ok(())
    }

    pub fn run(self) -> RunRecord {
        self.run_with_outcome().record
    }

    /// Runs on a fresh current-thread runtime owned by this call. When the
    /// caller is itself on a tokio runtime, that runtime lives on a scoped
    /// thread and the calling thread blocks until it finishes.
    pub fn run_with_outcome(mut self) -> RunReport {
        let result = off_runtime(|| fresh_runtime()?.block_on(self.drive()));

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(agent = %self.agent_name, rounds = self.rounds, error = %err, "run failed");
                if !self.stop_attempted {
                    self.stop_best_effort();
                }
                RunOutcome::Failed(err)
            }
        };
        info!(agent = %self.agent_name, rounds = self.rounds, ?outcome, "run finished");

        let record = RunRecord::completed(
            self.agent_name.clone(),
            self.rounds,
            self.save_dir.display().to_string(),
        );
        RunReport { outcome, record }
    }

    async fn drive(&mut self) -> Result<RunOutcome> {
        let result = self.run_rounds().await;
        self.stop_attempted = true;
        match result {
            Ok(outcome) => {
                self.actor.stop().await?;
                Ok(outcome)
            }
            Err(err) => {
                if let Err(stop_err) = self.actor.stop().await {
                    warn!(error = %stop_err, "stopping actor after failure also failed");
                }
                Err(err)
            }
        }
    }

    async fn run_rounds(&mut self) -> Result<RunOutcome> {
        self.build_system_instruction()?;
        self.actor.start().await?;
        info!(agent = %self.agent_name, task = %self.task_input, "actor started");

        while !self.actor.is_complete() && self.rounds < self.max_rounds {
            let prediction = self.actor.predict().await?;
            if let Some(prediction) = prediction.filter(|p| !p.is_empty()) {
                if prediction.announces_open_pdf()? {
                    info!(round = self.rounds, "prediction reports an open pdf");
                    self.actor.mark_complete();
                    return Ok(RunOutcome::PdfOpened);
                }
                self.actor.execute(&prediction).await?;
            }
            self.rounds += 1;
            debug!(round = self.rounds, max_rounds = self.max_rounds, "round finished");
        }

        if self.actor.is_complete() {
            Ok(RunOutcome::Completed)
        } else {
            Ok(RunOutcome::RoundCapReached)
        }
    }

    fn stop_best_effort(&mut self) {
        self.stop_attempted = true;
        if let Err(err) = off_runtime(|| fresh_runtime()?.block_on(self.actor.stop())) {
            debug!(error = %err, "ignoring stop failure");
        }
    }
}

/// Runs `work` on the current thread, or on a scoped thread when the current
/// thread already belongs to a tokio runtime.
fn off_runtime<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send,
    T: Send,
{
    if Handle::try_current().is_err() {
        return work();
    }
    thread::scope(|scope| {
        scope
            .spawn(work)
            .join()
            .unwrap_or_else(|_| Err(SeeActError::actor("run", "run thread panicked")))
    })
}

fn fresh_runtime() -> Result<Runtime> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

impl Agent for SeeActAgent {
    fn name(&self) -> &str {
        &self.agent_name
    }

    fn build_system_instruction(&mut self) -> Result<()> {
        SeeActAgent::build_system_instruction(self)
    }

    fn run(self: Box<Self>) -> RunRecord {
        let agent = *self;
        agent.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn save_dir_is_timestamped_under_base() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let dir = save_dir_for(Path::new("/data"), &at);
        assert_eq!(dir, PathBuf::from("/data/seeact_agent_files/20240309_070501"));
    }

    #[test]
    fn failure_outcome_is_flagged() {
        assert!(RunOutcome::Failed(SeeActError::MissingField("description".into())).is_failure());
        assert!(!RunOutcome::RoundCapReached.is_failure());
    }
}
