//! Dependency protocol: typed requests raised by objectives and the
//! resolver that turns them into concrete objectives.
//!
//! Objectives never build each other. They emit [`DependencyRequest`]s, and
//! only [`DependencyResolver`] maps a request's kind tag back onto an
//! [`Objective`](crate::objective::Objective) variant.
mod request;
mod resolver;

pub use request::{DependencyParams, DependencyRequest};
pub use resolver::{DependencyResolver, PlannedObjective, ResolutionContext};
