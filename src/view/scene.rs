//! Flat display list
//!
//! Children are kept back to front: the last child draws on top and is hit
//! first.

use std::rc::Rc;

use glam::Vec2;

use super::Action;
use super::bar_magnet_node::BarMagnetNode;
use super::control_panel::PanelLayout;
use crate::consts::PANEL_LINE_WIDTH;
use crate::renderer::vertex::colors;
use crate::renderer::{Vertex, shapes};
use crate::sim::BarMagnet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug)]
pub enum NodeKind {
    BarMagnet(BarMagnetNode),
    ControlPanel(PanelLayout),
    ResetAllButton { center: Vec2, radius: f32 },
}

#[derive(Debug)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

/// Result of a hit test
#[derive(Debug, Clone)]
pub enum Hit {
    /// A button was pressed
    Action(Action),
    /// A magnet was grabbed
    Magnet(Rc<BarMagnet>),
    /// Non-interactive part of a control (absorbs the press)
    Chrome,
}

#[derive(Debug, Default)]
pub struct Scene {
    children: Vec<Node>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child on top of every existing child
    pub fn add_child(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.children.push(Node { id, kind });
        id
    }

    pub fn remove_child(&mut self, id: NodeId) -> Option<Node> {
        let index = self.index_of(id)?;
        Some(self.children.remove(index))
    }

    /// Swap a child with the one directly behind it. Returns false if it is
    /// already at the back or not present.
    pub fn move_child_backward(&mut self, id: NodeId) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => {
                self.children.swap(index, index - 1);
                true
            }
            _ => false,
        }
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.children.iter().position(|n| n.id == id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.children.iter().find(|n| n.id == id)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Topmost node under `point` (view space)
    pub fn hit_test(&self, point: Vec2) -> Option<(NodeId, Hit)> {
        self.children.iter().rev().find_map(|node| {
            let hit = match &node.kind {
                NodeKind::BarMagnet(magnet_node) => magnet_node
                    .contains(point)
                    .then(|| Hit::Magnet(Rc::clone(magnet_node.magnet()))),
                NodeKind::ControlPanel(layout) => layout
                    .button_at(point)
                    .map(Hit::Action)
                    .or_else(|| layout.bounds.contains(point).then_some(Hit::Chrome)),
                NodeKind::ResetAllButton { center, radius } => {
                    (point.distance(*center) <= *radius).then_some(Hit::Action(Action::ResetAll))
                }
            };
            hit.map(|hit| (node.id, hit))
        })
    }

    /// Triangle list for every child, back to front
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for node in &self.children {
            match &node.kind {
                NodeKind::BarMagnet(magnet_node) => vertices.extend(magnet_node.vertices()),
                NodeKind::ControlPanel(layout) => {
                    vertices.extend(shapes::fill_bounds(&layout.bounds, colors::PANEL_FILL));
                    vertices.extend(shapes::outline_bounds(
                        &layout.bounds,
                        PANEL_LINE_WIDTH,
                        colors::PANEL_STROKE,
                    ));
                    for (_, button) in &layout.buttons {
                        vertices.extend(shapes::fill_bounds(button, colors::CONTROL_BUTTON));
                    }
                }
                NodeKind::ResetAllButton { center, radius } => {
                    vertices.extend(shapes::circle(*center, *radius, colors::RESET_ALL, 32));
                }
            }
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::transform::ModelViewTransform;

    fn reset_button(x: f32) -> NodeKind {
        NodeKind::ResetAllButton {
            center: Vec2::new(x, 0.0),
            radius: 10.0,
        }
    }

    #[test]
    fn test_add_and_remove() {
        let mut scene = Scene::new();
        let a = scene.add_child(reset_button(0.0));
        let b = scene.add_child(reset_button(1.0));
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.index_of(b), Some(1));

        assert!(scene.remove_child(a).is_some());
        assert!(scene.remove_child(a).is_none());
        assert_eq!(scene.index_of(b), Some(0));
    }

    #[test]
    fn test_move_child_backward() {
        let mut scene = Scene::new();
        let a = scene.add_child(reset_button(0.0));
        let b = scene.add_child(reset_button(1.0));
        let c = scene.add_child(reset_button(2.0));

        assert!(scene.move_child_backward(c));
        assert!(scene.move_child_backward(c));
        assert!(!scene.move_child_backward(c));
        let order: Vec<NodeId> = scene.children().iter().map(|n| n.id).collect();
        assert_eq!(order, vec![c, a, b]);
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut scene = Scene::new();
        let mvt = ModelViewTransform::offset_scale(Vec2::ZERO, 1.0);
        let magnet = Rc::new(BarMagnet::new(3, Vec2::new(250.0, 50.0), Vec2::ZERO, 0.0));
        let magnet_id = scene.add_child(NodeKind::BarMagnet(BarMagnetNode::new(magnet, &mvt)));
        let button_id = scene.add_child(reset_button(0.0));

        let (id, hit) = scene.hit_test(Vec2::new(5.0, 0.0)).unwrap();
        assert_eq!(id, button_id);
        assert!(matches!(hit, Hit::Action(Action::ResetAll)));

        let (id, hit) = scene.hit_test(Vec2::new(100.0, 0.0)).unwrap();
        assert_eq!(id, magnet_id);
        assert!(matches!(hit, Hit::Magnet(m) if m.id() == 3));

        assert!(scene.hit_test(Vec2::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_node_ids_wrap_instead_of_overflowing() {
        let mut scene = Scene::new();
        scene.next_id = u32::MAX;
        let last = scene.add_child(reset_button(0.0));
        let wrapped = scene.add_child(reset_button(1.0));
        assert_eq!(last, NodeId(u32::MAX));
        assert_eq!(wrapped, NodeId(0));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_vertices_cover_all_children() {
        let mut scene = Scene::new();
        scene.add_child(reset_button(0.0));
        assert_eq!(scene.vertices().len(), 32 * 3);
    }
}
