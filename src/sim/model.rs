//! Top-level model for the Magnets screen
//!
//! Owns one permanent bar magnet plus the magnets added from the control
//! panel. Added magnets are only ever appended or dropped all at once.

use std::rc::Rc;

use glam::Vec2;

use super::bar_magnet::BarMagnet;
use crate::consts::{BAR_MAGNET_HEIGHT, BAR_MAGNET_WIDTH};

#[derive(Debug)]
pub struct MagnetsModel {
    /// The magnet that exists for the lifetime of the model
    bar_magnet: Rc<BarMagnet>,
    /// Magnets added from the control panel, in insertion order
    added_bar_magnets: Vec<Rc<BarMagnet>>,
    magnet_size: Vec2,
    next_id: u32,
}

impl Default for MagnetsModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MagnetsModel {
    pub fn new() -> Self {
        Self::with_magnet_size(Vec2::new(BAR_MAGNET_WIDTH, BAR_MAGNET_HEIGHT))
    }

    /// Create a model whose magnets all share `magnet_size`
    pub fn with_magnet_size(magnet_size: Vec2) -> Self {
        let bar_magnet = Rc::new(BarMagnet::new(0, magnet_size, Vec2::ZERO, 0.0));
        Self {
            bar_magnet,
            added_bar_magnets: Vec::new(),
            magnet_size,
            next_id: 1,
        }
    }

    /// Add a new magnet at `position` with orientation 0
    ///
    /// The model keeps ownership; the returned handle is for observing and
    /// rendering the magnet.
    pub fn add_new_magnet_at(&mut self, position: Vec2) -> Rc<BarMagnet> {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let magnet = Rc::new(BarMagnet::new(id, self.magnet_size, position, 0.0));
        self.added_bar_magnets.push(Rc::clone(&magnet));
        log::debug!(
            "Added magnet {} at ({:.1}, {:.1}), {} added total",
            id,
            position.x,
            position.y,
            self.added_bar_magnets.len()
        );
        magnet
    }

    /// The permanent magnet
    pub fn bar_magnet(&self) -> &Rc<BarMagnet> {
        &self.bar_magnet
    }

    pub fn added_bar_magnets(&self) -> &[Rc<BarMagnet>] {
        &self.added_bar_magnets
    }

    /// Permanent magnet plus added magnets
    pub fn magnet_count(&self) -> usize {
        1 + self.added_bar_magnets.len()
    }

    /// Restore the permanent magnet and forget every added magnet
    pub fn reset(&mut self) {
        self.bar_magnet.reset();
        self.added_bar_magnets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_new_model() {
        let model = MagnetsModel::new();
        assert!(model.added_bar_magnets().is_empty());
        assert_eq!(model.bar_magnet().position(), Vec2::ZERO);
        assert_eq!(model.bar_magnet().orientation(), 0.0);
        assert_eq!(
            model.bar_magnet().size(),
            Vec2::new(BAR_MAGNET_WIDTH, BAR_MAGNET_HEIGHT)
        );
        assert_eq!(model.magnet_count(), 1);
    }

    #[test]
    fn test_add_twice_at_same_position() {
        let mut model = MagnetsModel::new();
        model.add_new_magnet_at(Vec2::new(5.0, 5.0));
        model.add_new_magnet_at(Vec2::new(5.0, 5.0));

        let added = model.added_bar_magnets();
        assert_eq!(added.len(), 2);
        for magnet in added {
            assert_eq!(magnet.position(), Vec2::new(5.0, 5.0));
            assert_eq!(magnet.orientation(), 0.0);
        }
        assert_ne!(added[0].id(), added[1].id());
    }

    #[test]
    fn test_added_magnet_handle_is_shared() {
        let mut model = MagnetsModel::new();
        let handle = model.add_new_magnet_at(Vec2::new(1.0, 2.0));
        handle.set_position(Vec2::new(-3.0, 4.0));
        assert_eq!(model.added_bar_magnets()[0].position(), Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn test_flip_then_reset() {
        let mut model = MagnetsModel::new();
        let flipped = model.bar_magnet().orientation() + PI;
        model.bar_magnet().set_orientation(flipped);
        assert_eq!(model.bar_magnet().orientation(), PI);

        model.reset();
        assert_eq!(model.bar_magnet().orientation(), 0.0);
    }

    #[test]
    fn test_reset_clears_added_without_resetting_them() {
        let mut model = MagnetsModel::new();
        let kept = model.add_new_magnet_at(Vec2::new(7.0, 7.0));
        kept.set_position(Vec2::new(8.0, 8.0));

        model.reset();
        assert!(model.added_bar_magnets().is_empty());
        // Discarded magnets keep whatever pose they had
        assert_eq!(kept.position(), Vec2::new(8.0, 8.0));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut model = MagnetsModel::new();
        model.add_new_magnet_at(Vec2::new(1.0, 1.0));
        model.bar_magnet().set_position(Vec2::new(40.0, -40.0));

        model.reset();
        let once = (model.bar_magnet().position(), model.bar_magnet().orientation());
        model.reset();
        assert_eq!(
            (model.bar_magnet().position(), model.bar_magnet().orientation()),
            once
        );
        assert!(model.added_bar_magnets().is_empty());
        assert_eq!(once, (Vec2::ZERO, 0.0));
    }

    #[test]
    fn test_ids_keep_increasing_across_reset() {
        let mut model = MagnetsModel::new();
        let first = model.add_new_magnet_at(Vec2::ZERO);
        model.reset();
        let second = model.add_new_magnet_at(Vec2::ZERO);
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_permanent_magnet_survives_adds_and_resets() {
        let mut model = MagnetsModel::new();
        let permanent = Rc::clone(model.bar_magnet());
        model.add_new_magnet_at(Vec2::new(3.0, 3.0));
        model.reset();
        model.reset();
        assert!(Rc::ptr_eq(model.bar_magnet(), &permanent));
        assert_eq!(model.magnet_count(), 1);
    }

    #[test]
    fn test_id_counter_wraps_instead_of_overflowing() {
        let mut model = MagnetsModel::new();
        model.next_id = u32::MAX;
        let last = model.add_new_magnet_at(Vec2::ZERO);
        let wrapped = model.add_new_magnet_at(Vec2::ZERO);
        assert_eq!(last.id(), u32::MAX);
        assert_eq!(wrapped.id(), 0);
        assert_eq!(model.added_bar_magnets().len(), 2);
    }

    proptest! {
        #[test]
        fn prop_added_count_matches_calls(
            positions in proptest::collection::vec((-500.0f32..500.0, -300.0f32..300.0), 0..40)
        ) {
            let mut model = MagnetsModel::new();
            for &(x, y) in &positions {
                model.add_new_magnet_at(Vec2::new(x, y));
            }

            prop_assert_eq!(model.added_bar_magnets().len(), positions.len());
            for (magnet, &(x, y)) in model.added_bar_magnets().iter().zip(&positions) {
                prop_assert_eq!(magnet.position(), Vec2::new(x, y));
                prop_assert_eq!(magnet.orientation(), 0.0);
            }
        }

        #[test]
        fn prop_flips_accumulate_without_wrapping(flips in 0usize..64) {
            let model = MagnetsModel::new();
            let mut expected = model.bar_magnet().initial_orientation();
            for _ in 0..flips {
                model.bar_magnet().set_orientation(model.bar_magnet().orientation() + PI);
                expected += PI;
            }
            prop_assert_eq!(model.bar_magnet().orientation(), expected);
        }
    }
}
