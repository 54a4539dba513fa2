use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_WEBSITE: &str = "https://www.google.com/";

/// Construction parameters handed to an [`ActorFactory`](super::ActorFactory).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActorSettings {
    pub model: String,
    pub default_task: String,
    pub default_website: String,
    pub headless: bool,
    pub save_file_dir: PathBuf,
}

impl ActorSettings {
    /// Fixed model, start page and headless mode; only the task and output
    /// directory vary per agent.
    pub fn for_task<T: Into<String>>(task: T, save_file_dir: PathBuf) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            default_task: task.into(),
            default_website: DEFAULT_WEBSITE.to_string(),
            headless: true,
            save_file_dir,
        }
    }
}
