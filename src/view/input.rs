//! Pointer drag tracking
//!
//! At most one drag is active. `interrupt` abandons it so nothing keeps
//! steering a magnet whose node is about to be removed.

use std::rc::Rc;

use glam::Vec2;

use super::scene::NodeId;
use crate::sim::BarMagnet;

/// An in-progress drag of one magnet
#[derive(Debug, Clone)]
pub struct Drag {
    pub node: NodeId,
    pub magnet: Rc<BarMagnet>,
    /// Magnet position minus the grab point (model space)
    pub grab_offset: Vec2,
}

#[derive(Debug, Default)]
pub struct PointerInput {
    active: Option<Drag>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging `magnet`, grabbed at `model_point`. Replaces any active drag.
    pub fn start_drag(&mut self, node: NodeId, magnet: Rc<BarMagnet>, model_point: Vec2) {
        let grab_offset = magnet.position() - model_point;
        log::debug!("Drag start on magnet {}", magnet.id());
        self.active = Some(Drag {
            node,
            magnet,
            grab_offset,
        });
    }

    /// Move the dragged magnet so it follows `model_point`. Returns false when idle.
    pub fn drag_to(&mut self, model_point: Vec2) -> bool {
        match &self.active {
            Some(drag) => {
                drag.magnet.set_position(model_point + drag.grab_offset);
                true
            }
            None => false,
        }
    }

    /// Finish the active drag normally
    pub fn end_drag(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Abandon the active drag without a final move
    pub fn interrupt(&mut self) -> bool {
        match self.active.take() {
            Some(drag) => {
                log::debug!("Interrupted drag on magnet {}", drag.magnet.id());
                true
            }
            None => false,
        }
    }

    pub fn active_drag(&self) -> Option<&Drag> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::scene::{NodeKind, Scene};

    fn node_id() -> NodeId {
        let mut scene = Scene::new();
        scene.add_child(NodeKind::ResetAllButton {
            center: Vec2::ZERO,
            radius: 1.0,
        })
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let magnet = Rc::new(BarMagnet::new(1, Vec2::new(250.0, 50.0), Vec2::new(10.0, 10.0), 0.0));
        let mut input = PointerInput::new();

        input.start_drag(node_id(), Rc::clone(&magnet), Vec2::new(30.0, 5.0));
        assert!(input.drag_to(Vec2::new(130.0, 105.0)));
        assert_eq!(magnet.position(), Vec2::new(110.0, 110.0));

        assert!(input.end_drag());
        assert!(!input.drag_to(Vec2::ZERO));
        assert_eq!(magnet.position(), Vec2::new(110.0, 110.0));
    }

    #[test]
    fn test_interrupt_releases_magnet() {
        let magnet = Rc::new(BarMagnet::new(1, Vec2::new(250.0, 50.0), Vec2::ZERO, 0.0));
        let mut input = PointerInput::new();
        input.start_drag(node_id(), Rc::clone(&magnet), Vec2::ZERO);
        assert_eq!(Rc::strong_count(&magnet), 2);

        assert!(input.interrupt());
        assert!(!input.is_dragging());
        assert_eq!(Rc::strong_count(&magnet), 1);
        assert!(!input.interrupt());
    }
}
