//! Magnets view module
//!
//! Mirrors model magnets into render proxies and hosts the screen's controls.

pub mod bar_magnet_node;
pub mod control_panel;
pub mod input;
pub mod scene;
pub mod screen_view;
pub mod transform;

pub use bar_magnet_node::{BarMagnetNode, NodePose};
pub use control_panel::{MagnetPorts, MagnetsControlPanel, PanelLayout};
pub use input::{Drag, PointerInput};
pub use scene::{Hit, Node, NodeId, NodeKind, Scene};
pub use screen_view::MagnetsScreenView;
pub use transform::ModelViewTransform;

/// A user command issued by pressing one of the screen's buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FlipPolarity,
    MoveMagnet,
    AddMagnet,
    ResetAll,
}
