//! Arc domain — sampling fire points across an angular arc
//!
//! Содержит:
//! - Pose / PoseSource (origin + change signal)
//! - sample_arc (pure math) + FirePoint
//! - ProjectileArc (config + lazily recomputed cache)

pub mod components;
pub mod pose;
pub mod sampling;


pub use components::*;
pub use pose::*;
pub use sampling::*;
