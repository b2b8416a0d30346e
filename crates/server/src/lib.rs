//! Server crate for the FlickMatch recommendation engine.
//!
//! This crate contains the orchestrator that combines similarity ranking
//! with poster resolution.

pub mod orchestrator;

pub use orchestrator::{RecommendationOrchestrator, RecommendedMovie};
