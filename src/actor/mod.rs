pub mod actor;
pub mod prediction;
pub mod scripted;
pub mod settings;

pub use actor::{ActorFactory, WebActor};
pub use prediction::{Prediction, PDF_OPEN_MARKER};
pub use scripted::{ActorEvent, ActorScript, ActorTrace, ScriptedActor};
pub use settings::{ActorSettings, DEFAULT_MODEL, DEFAULT_WEBSITE};
