//! Render proxy for a bar magnet
//!
//! The node links to the magnet's position and orientation properties and
//! keeps a view-space pose in sync. Dropping the node unlinks it.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use super::transform::ModelViewTransform;
use crate::renderer::{Vertex, shapes};
use crate::rotate;
use crate::sim::{BarMagnet, ListenerId};

/// View-space placement of a node
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodePose {
    pub translation: Vec2,
    pub rotation: f32,
}

#[derive(Debug)]
pub struct BarMagnetNode {
    magnet: Rc<BarMagnet>,
    /// Size in view units
    size: Vec2,
    pose: Rc<Cell<NodePose>>,
    position_listener: ListenerId,
    orientation_listener: ListenerId,
}

impl BarMagnetNode {
    pub fn new(magnet: Rc<BarMagnet>, model_view_transform: &ModelViewTransform) -> Self {
        let pose = Rc::new(Cell::new(NodePose::default()));
        let mvt = *model_view_transform;

        let p = Rc::clone(&pose);
        let position_listener = magnet.position.link(move |position, _| {
            p.set(NodePose {
                translation: mvt.model_to_view_position(*position),
                ..p.get()
            });
        });

        let p = Rc::clone(&pose);
        let orientation_listener = magnet.orientation.link(move |orientation, _| {
            p.set(NodePose {
                rotation: *orientation,
                ..p.get()
            });
        });

        Self {
            size: mvt.model_to_view_delta(magnet.size()),
            magnet,
            pose,
            position_listener,
            orientation_listener,
        }
    }

    pub fn magnet(&self) -> &Rc<BarMagnet> {
        &self.magnet
    }

    pub fn pose(&self) -> NodePose {
        self.pose.get()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Whether `point` (view space) is inside the rotated magnet
    pub fn contains(&self, point: Vec2) -> bool {
        let pose = self.pose.get();
        let local = rotate(point - pose.translation, -pose.rotation);
        local.x.abs() <= self.size.x * 0.5 && local.y.abs() <= self.size.y * 0.5
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        let pose = self.pose.get();
        shapes::bar_magnet(pose.translation, self.size, pose.rotation)
    }
}

impl Drop for BarMagnetNode {
    fn drop(&mut self) {
        self.magnet.position.unlink(self.position_listener);
        self.magnet.orientation.unlink(self.orientation_listener);
    }
}
