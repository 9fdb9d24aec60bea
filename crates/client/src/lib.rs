//! Agent client: wires the file-backed collaborators to the decision core
//! and drives it one tick at a time.

pub mod config;
pub mod logging;
pub mod runner;

pub use config::AgentConfig;
pub use runner::{AgentRunner, PlanStep, TickError, TickReport};
