//! The Magnets screen: one model paired with one view
//!
//! Hosts forward button actions and pointer events here; everything runs
//! synchronously on the caller's thread.

use glam::Vec2;

use crate::renderer::Vertex;
use crate::settings::Settings;
use crate::sim::MagnetsModel;
use crate::strings::Strings;
use crate::view::{Action, MagnetsScreenView};

#[derive(Debug)]
pub struct MagnetsScreen {
    model: MagnetsModel,
    view: MagnetsScreenView,
}

impl MagnetsScreen {
    pub fn new(settings: &Settings, strings: &Strings, seed: u64) -> Self {
        let model = MagnetsModel::with_magnet_size(settings.magnet_size);
        let view = MagnetsScreenView::new(&model, settings.layout_bounds(), seed, strings);
        log::info!(
            "Magnets screen created ({}x{} layout, seed {})",
            settings.layout_width,
            settings.layout_height,
            seed
        );
        Self { model, view }
    }

    pub fn model(&self) -> &MagnetsModel {
        &self.model
    }

    pub fn view(&self) -> &MagnetsScreenView {
        &self.view
    }

    pub fn apply(&mut self, action: Action) {
        self.view.apply(action, &mut self.model);
    }

    pub fn pointer_down(&mut self, view_point: Vec2) -> Option<Action> {
        self.view.pointer_down(view_point, &mut self.model)
    }

    pub fn pointer_move(&mut self, view_point: Vec2) -> bool {
        self.view.pointer_move(view_point)
    }

    pub fn pointer_up(&mut self) {
        self.view.pointer_up();
    }

    /// Draw list for the current frame, in view coordinates
    pub fn vertices(&self) -> Vec<Vertex> {
        self.view.vertices()
    }
}
