//! Dispatch domain — turning a sampled arc into instantiated objects
//!
//! Содержит:
//! - TemplateSource (single / per-index / builder)
//! - Instantiator + spawn_all (engine-agnostic core)
//! - CommandsInstantiator (bevy Commands backend) + ProjectilePrefab, ArcProjectile

pub mod commands;
pub mod spawner;
pub mod templates;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod dispatch_tests;

pub use commands::*;
pub use spawner::*;
pub use templates::*;
