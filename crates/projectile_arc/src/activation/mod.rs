//! Activation domain — lifecycle policy → volley fire
//!
//! Содержит:
//! - ArcActivator (on_start / on_enable / on_disable policy)
//! - ArcVolley (templates + parent, the Activate() target)
//! - ArcLifecycle / ActivateArc / ArcVolleyFired events
//! - systems, chained by ProjectileArcPlugin

pub mod components;
pub mod events;
pub mod systems;


pub use components::*;
pub use events::*;
pub use systems::*;
