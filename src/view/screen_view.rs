//! Top-level view for the Magnets screen
//!
//! Displays the permanent magnet, the control panel and the Reset All
//! button, and materializes a node for every magnet added from the panel.

use std::rc::Rc;

use glam::Vec2;

use super::Action;
use super::bar_magnet_node::BarMagnetNode;
use super::control_panel::{MagnetPorts, MagnetsControlPanel};
use super::input::PointerInput;
use super::scene::{Hit, NodeId, NodeKind, Scene};
use super::transform::ModelViewTransform;
use crate::Bounds;
use crate::consts::*;
use crate::renderer::Vertex;
use crate::sim::{BarMagnet, MagnetsModel};
use crate::strings::{StringKey, Strings};

/// Display list plus the nodes added from the control panel
#[derive(Debug)]
struct Stage {
    scene: Scene,
    model_view_transform: ModelViewTransform,
    /// Nodes created by `materialize`, in creation order
    added_bar_magnet_nodes: Vec<NodeId>,
}

impl Stage {
    /// Create a node for `magnet` and slide it behind the panel and Reset All
    fn materialize(&mut self, magnet: Rc<BarMagnet>) -> NodeId {
        let node = BarMagnetNode::new(magnet, &self.model_view_transform);
        let id = self.scene.add_child(NodeKind::BarMagnet(node));
        self.added_bar_magnet_nodes.push(id);
        self.scene.move_child_backward(id); // behind the Reset All button
        self.scene.move_child_backward(id); // behind the control panel
        id
    }
}

/// The two ports the control panel needs, borrowed for one command
struct ScreenPorts<'a> {
    model: &'a mut MagnetsModel,
    stage: &'a mut Stage,
}

impl MagnetPorts for ScreenPorts<'_> {
    fn create_magnet(&mut self, position: Vec2) -> Rc<BarMagnet> {
        self.model.add_new_magnet_at(position)
    }

    fn request_materialization(&mut self, magnet: Rc<BarMagnet>) {
        self.stage.materialize(magnet);
    }
}

#[derive(Debug)]
pub struct MagnetsScreenView {
    layout_bounds: Bounds,
    stage: Stage,
    control_panel: MagnetsControlPanel,
    input: PointerInput,
    bar_magnet_node: NodeId,
    control_panel_node: NodeId,
    reset_all_node: NodeId,
    reset_all_label: String,
}

impl MagnetsScreenView {
    pub fn new(model: &MagnetsModel, layout_bounds: Bounds, seed: u64, strings: &Strings) -> Self {
        // Model origin at the center of the layout, no scaling
        let model_view_transform = ModelViewTransform::offset_scale(layout_bounds.center(), 1.0);
        let mut scene = Scene::new();

        let bar_magnet_node = scene.add_child(NodeKind::BarMagnet(BarMagnetNode::new(
            Rc::clone(model.bar_magnet()),
            &model_view_transform,
        )));

        let control_panel = MagnetsControlPanel::new(layout_bounds, seed, strings);
        let control_panel_node = scene.add_child(NodeKind::ControlPanel(control_panel.layout().clone()));

        // Lower-right corner
        let reset_all_node = scene.add_child(NodeKind::ResetAllButton {
            center: Vec2::new(
                layout_bounds.max.x - SCREEN_VIEW_X_MARGIN - RESET_ALL_RADIUS,
                layout_bounds.max.y - SCREEN_VIEW_Y_MARGIN - RESET_ALL_RADIUS,
            ),
            radius: RESET_ALL_RADIUS,
        });

        Self {
            layout_bounds,
            stage: Stage {
                scene,
                model_view_transform,
                added_bar_magnet_nodes: Vec::new(),
            },
            control_panel,
            input: PointerInput::new(),
            bar_magnet_node,
            control_panel_node,
            reset_all_node,
            reset_all_label: strings.get(StringKey::ResetAll).to_string(),
        }
    }

    pub fn layout_bounds(&self) -> Bounds {
        self.layout_bounds
    }

    pub fn model_view_transform(&self) -> &ModelViewTransform {
        &self.stage.model_view_transform
    }

    pub fn scene(&self) -> &Scene {
        &self.stage.scene
    }

    pub fn control_panel(&self) -> &MagnetsControlPanel {
        &self.control_panel
    }

    pub fn input(&self) -> &PointerInput {
        &self.input
    }

    pub fn bar_magnet_node(&self) -> NodeId {
        self.bar_magnet_node
    }

    pub fn control_panel_node(&self) -> NodeId {
        self.control_panel_node
    }

    pub fn reset_all_node(&self) -> NodeId {
        self.reset_all_node
    }

    pub fn reset_all_label(&self) -> &str {
        &self.reset_all_label
    }

    /// Nodes materialized for added magnets, in creation order
    pub fn added_bar_magnet_nodes(&self) -> &[NodeId] {
        &self.stage.added_bar_magnet_nodes
    }

    /// Create and display a node for a magnet added to the model
    pub fn create_bar_magnet_node(&mut self, magnet: Rc<BarMagnet>) -> NodeId {
        self.stage.materialize(magnet)
    }

    /// Run the command behind a button
    pub fn apply(&mut self, action: Action, model: &mut MagnetsModel) {
        match action {
            Action::FlipPolarity => self.control_panel.flip_polarity(model),
            Action::MoveMagnet => self.control_panel.move_magnet(model),
            Action::AddMagnet => {
                let mut ports = ScreenPorts {
                    model,
                    stage: &mut self.stage,
                };
                self.control_panel.add_magnet(&mut ports);
            }
            Action::ResetAll => self.reset_all(model),
        }
    }

    /// Tear down every added node and restore the model
    pub fn reset_all(&mut self, model: &mut MagnetsModel) {
        // Interrupt first so no drag outlives the node it is steering
        self.input.interrupt();

        let removed = self.stage.added_bar_magnet_nodes.len();
        for id in self.stage.added_bar_magnet_nodes.drain(..) {
            self.stage.scene.remove_child(id);
        }

        model.reset();
        log::info!("Reset all: removed {} added magnets", removed);
    }

    /// Press at `point` (view space). Returns the button action, if one fired.
    pub fn pointer_down(&mut self, point: Vec2, model: &mut MagnetsModel) -> Option<Action> {
        match self.stage.scene.hit_test(point) {
            Some((_, Hit::Action(action))) => {
                self.apply(action, model);
                Some(action)
            }
            Some((node, Hit::Magnet(magnet))) => {
                let model_point = self.stage.model_view_transform.view_to_model_position(point);
                self.input.start_drag(node, magnet, model_point);
                None
            }
            Some((_, Hit::Chrome)) | None => None,
        }
    }

    /// Pointer moved to `point` (view space). Returns true if a magnet was dragged.
    pub fn pointer_move(&mut self, point: Vec2) -> bool {
        let model_point = self.stage.model_view_transform.view_to_model_position(point);
        self.input.drag_to(model_point)
    }

    pub fn pointer_up(&mut self) {
        self.input.end_drag();
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        self.stage.scene.vertices()
    }
}
