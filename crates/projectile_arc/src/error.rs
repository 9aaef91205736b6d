//! Recoverable errors.
//!
//! Contract violations (shot count out of range, template list too short) are
//! programmer errors and panic instead of showing up here.

use bevy::prelude::Entity;
use thiserror::Error;

/// Failure reported by an `Instantiator`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("instantiation failed: {reason}")]
pub struct InstantiateError {
    pub reason: String,
}

impl InstantiateError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by arc dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArcError {
    /// The instantiation service failed for one fire point. Points before
    /// `index` were already instantiated.
    #[error("fire point {index}: {source}")]
    Instantiation {
        index: usize,
        #[source]
        source: InstantiateError,
    },

    /// The volley parent has no resolvable world frame (despawned, or no
    /// Transform on it or one of its ancestors). Nothing was instantiated.
    #[error("volley parent {parent:?} has no world frame")]
    MissingParent { parent: Entity },
}
