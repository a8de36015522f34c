//! Magnets model module
//!
//! Everything the screen simulates lives here. This module has no rendering
//! or platform dependencies:
//! - Observable properties with synchronous notification
//! - Bar magnets with resettable pose
//! - The screen model that owns all magnets

pub mod bar_magnet;
pub mod model;
pub mod property;

pub use bar_magnet::BarMagnet;
pub use model::MagnetsModel;
pub use property::{ListenerId, Property};
