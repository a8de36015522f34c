//! Control panel for the magnets
//!
//! Three buttons: flip the permanent magnet's polarity, move it to a random
//! spot, and add a new magnet at a random spot. Adding goes through
//! [`MagnetPorts`] so the panel never depends on the concrete view.

use std::f32::consts::PI;
use std::rc::Rc;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Action;
use crate::consts::*;
use crate::sim::{BarMagnet, MagnetsModel};
use crate::strings::{StringKey, Strings};
use crate::Bounds;

/// What the panel needs in order to add a magnet
pub trait MagnetPorts {
    /// Create a magnet in the model at `position`
    fn create_magnet(&mut self, position: Vec2) -> Rc<BarMagnet>;
    /// Ask the view to create and display a node for `magnet`
    fn request_materialization(&mut self, magnet: Rc<BarMagnet>);
}

/// Panel geometry in view space
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub bounds: Bounds,
    pub title: Bounds,
    /// Buttons top to bottom
    pub buttons: Vec<(Action, Bounds)>,
}

impl PanelLayout {
    const BUTTONS: [Action; 3] = [Action::FlipPolarity, Action::MoveMagnet, Action::AddMagnet];

    /// Stack the title and buttons vertically, anchored at the top-right of `layout_bounds`
    pub fn new(layout_bounds: &Bounds) -> Self {
        let rows = Self::BUTTONS.len() as f32;
        let size = Vec2::new(
            CONTROL_BUTTON_WIDTH + 2.0 * PANEL_X_MARGIN,
            2.0 * PANEL_Y_MARGIN + PANEL_TITLE_HEIGHT + rows * (PANEL_SPACING + CONTROL_BUTTON_HEIGHT),
        );
        let corner = Vec2::new(
            layout_bounds.max.x - SCREEN_VIEW_X_MARGIN,
            layout_bounds.min.y + SCREEN_VIEW_Y_MARGIN,
        );
        let bounds = Bounds::from_top_right(corner, size);

        let left = bounds.min.x + PANEL_X_MARGIN;
        let mut y = bounds.min.y + PANEL_Y_MARGIN;
        let title = Bounds::new(
            Vec2::new(left, y),
            Vec2::new(left + CONTROL_BUTTON_WIDTH, y + PANEL_TITLE_HEIGHT),
        );
        y += PANEL_TITLE_HEIGHT;

        let buttons = Self::BUTTONS
            .iter()
            .map(|&action| {
                y += PANEL_SPACING;
                let button = Bounds::new(
                    Vec2::new(left, y),
                    Vec2::new(left + CONTROL_BUTTON_WIDTH, y + CONTROL_BUTTON_HEIGHT),
                );
                y += CONTROL_BUTTON_HEIGHT;
                (action, button)
            })
            .collect();

        Self {
            bounds,
            title,
            buttons,
        }
    }

    pub fn button_at(&self, point: Vec2) -> Option<Action> {
        self.buttons
            .iter()
            .find(|(_, b)| b.contains(point))
            .map(|(action, _)| *action)
    }

    pub fn button_bounds(&self, action: Action) -> Option<Bounds> {
        self.buttons
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, b)| *b)
    }
}

#[derive(Debug)]
pub struct MagnetsControlPanel {
    layout_bounds: Bounds,
    layout: PanelLayout,
    rng: Pcg32,
    title: String,
    labels: Vec<(Action, String)>,
}

impl MagnetsControlPanel {
    pub fn new(layout_bounds: Bounds, seed: u64, strings: &Strings) -> Self {
        let labels = vec![
            (Action::FlipPolarity, strings.get(StringKey::FlipPolarity).to_string()),
            (Action::MoveMagnet, strings.get(StringKey::MoveMagnet).to_string()),
            (Action::AddMagnet, strings.get(StringKey::AddMagnet).to_string()),
        ];
        Self {
            layout: PanelLayout::new(&layout_bounds),
            layout_bounds,
            rng: Pcg32::seed_from_u64(seed),
            title: strings.get(StringKey::MagnetControls).to_string(),
            labels,
        }
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn label(&self, action: Action) -> Option<&str> {
        self.labels
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, label)| label.as_str())
    }

    /// Uniform over the layout's width and height, centered on the model origin
    pub fn random_position(&mut self) -> Vec2 {
        Vec2::new(
            self.layout_bounds.width() * (self.rng.random::<f32>() - 0.5),
            self.layout_bounds.height() * (self.rng.random::<f32>() - 0.5),
        )
    }

    /// Rotate the permanent magnet by π. The angle is not wrapped.
    pub fn flip_polarity(&self, model: &MagnetsModel) {
        let orientation = model.bar_magnet().orientation() + PI;
        model.bar_magnet().set_orientation(orientation);
        log::debug!("Flipped polarity, orientation now {:.4}", orientation);
    }

    /// Move the permanent magnet to a random position
    pub fn move_magnet(&mut self, model: &MagnetsModel) {
        let position = self.random_position();
        model.bar_magnet().set_position(position);
        log::debug!("Moved magnet to ({:.1}, {:.1})", position.x, position.y);
    }

    /// Add a magnet at a random position and have it materialized
    pub fn add_magnet(&mut self, ports: &mut dyn MagnetPorts) -> Rc<BarMagnet> {
        let position = self.random_position();
        let magnet = ports.create_magnet(position);
        ports.request_materialization(Rc::clone(&magnet));
        magnet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn panel(seed: u64) -> MagnetsControlPanel {
        MagnetsControlPanel::new(
            Bounds::from_size(LAYOUT_WIDTH, LAYOUT_HEIGHT),
            seed,
            &Strings::english(),
        )
    }

    /// Records calls so the two-port contract can be checked in isolation
    struct RecordingPorts {
        model: MagnetsModel,
        materialized: Vec<u32>,
    }

    impl MagnetPorts for RecordingPorts {
        fn create_magnet(&mut self, position: Vec2) -> Rc<BarMagnet> {
            self.model.add_new_magnet_at(position)
        }

        fn request_materialization(&mut self, magnet: Rc<BarMagnet>) {
            self.materialized.push(magnet.id());
        }
    }

    #[test]
    fn test_layout_top_right() {
        let p = panel(1);
        let layout = p.layout();
        assert_eq!(layout.bounds.max.x, LAYOUT_WIDTH - SCREEN_VIEW_X_MARGIN);
        assert_eq!(layout.bounds.min.y, SCREEN_VIEW_Y_MARGIN);
        assert_eq!(layout.buttons.len(), 3);
        for (_, b) in &layout.buttons {
            assert!(b.min.x >= layout.bounds.min.x && b.max.x <= layout.bounds.max.x);
            assert!(b.min.y >= layout.title.max.y && b.max.y <= layout.bounds.max.y);
        }
    }

    #[test]
    fn test_button_at() {
        let p = panel(1);
        let add = p.layout().button_bounds(Action::AddMagnet).unwrap();
        assert_eq!(p.layout().button_at(add.center()), Some(Action::AddMagnet));
        assert_eq!(p.layout().button_at(p.layout().title.center()), None);
        assert_eq!(p.layout().button_bounds(Action::ResetAll), None);
    }

    #[test]
    fn test_labels() {
        let p = panel(1);
        assert_eq!(p.title(), "Magnet Controls");
        assert_eq!(p.label(Action::MoveMagnet), Some("Move Magnet"));
        assert_eq!(p.label(Action::ResetAll), None);
    }

    #[test]
    fn test_flip_polarity_accumulates() {
        let p = panel(1);
        let model = MagnetsModel::new();
        p.flip_polarity(&model);
        assert_eq!(model.bar_magnet().orientation(), PI);
        p.flip_polarity(&model);
        p.flip_polarity(&model);
        assert_eq!(model.bar_magnet().orientation(), PI + PI + PI);
    }

    #[test]
    fn test_move_magnet_changes_only_position() {
        let mut p = panel(7);
        let model = MagnetsModel::new();
        p.move_magnet(&model);
        assert_ne!(model.bar_magnet().position(), Vec2::ZERO);
        assert_eq!(model.bar_magnet().orientation(), 0.0);
        assert!(model.added_bar_magnets().is_empty());
    }

    #[test]
    fn test_add_uses_both_ports() {
        let mut p = panel(3);
        let mut ports = RecordingPorts {
            model: MagnetsModel::new(),
            materialized: Vec::new(),
        };

        let first = p.add_magnet(&mut ports);
        let second = p.add_magnet(&mut ports);
        assert_eq!(ports.model.added_bar_magnets().len(), 2);
        assert_eq!(ports.materialized, vec![first.id(), second.id()]);
        assert_eq!(first.orientation(), 0.0);
    }

    #[test]
    fn test_same_seed_same_positions() {
        let mut a = panel(42);
        let mut b = panel(42);
        for _ in 0..5 {
            assert_eq!(a.random_position(), b.random_position());
        }
    }

    proptest! {
        #[test]
        fn prop_random_position_within_half_bounds(seed in any::<u64>()) {
            let mut p = panel(seed);
            for _ in 0..16 {
                let pos = p.random_position();
                prop_assert!(pos.x >= -LAYOUT_WIDTH / 2.0 && pos.x < LAYOUT_WIDTH / 2.0);
                prop_assert!(pos.y >= -LAYOUT_HEIGHT / 2.0 && pos.y < LAYOUT_HEIGHT / 2.0);
            }
        }
    }
}
