use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

use super::prediction::Prediction;
use super::settings::ActorSettings;

/// Browser-driving agent that perceives a page, predicts the next action and
/// performs it. The adapter never issues two calls at once.
#[async_trait]
pub trait WebActor: Send {
    async fn start(&mut self) -> Result<()>;
    async fn predict(&mut self) -> Result<Option<Prediction>>;
    async fn execute(&mut self, prediction: &Prediction) -> Result<()>;
    async fn stop(&mut self) -> Result<()>;
    fn is_complete(&self) -> bool;
    fn mark_complete(&mut self);
}

pub type ActorFactory = Arc<dyn Fn(&ActorSettings) -> Result<Box<dyn WebActor>> + Send + Sync>;
