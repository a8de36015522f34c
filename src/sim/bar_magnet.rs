//! Bar magnet model element

use glam::Vec2;

use super::property::Property;

/// A positionable, orientable bar magnet of fixed size
///
/// Position is in model coordinates, orientation in radians. Neither is
/// validated or normalized: repeated flips accumulate past 2π.
#[derive(Debug)]
pub struct BarMagnet {
    id: u32,
    /// Width (long axis) and height
    size: Vec2,
    pub position: Property<Vec2>,
    pub orientation: Property<f32>,
}

impl BarMagnet {
    pub fn new(id: u32, size: Vec2, position: Vec2, orientation: f32) -> Self {
        Self {
            id,
            size,
            position: Property::new(position),
            orientation: Property::new(orientation),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    pub fn set_position(&self, position: Vec2) {
        self.position.set(position);
    }

    pub fn initial_position(&self) -> Vec2 {
        *self.position.initial_value()
    }

    pub fn orientation(&self) -> f32 {
        self.orientation.get()
    }

    pub fn set_orientation(&self, orientation: f32) {
        self.orientation.set(orientation);
    }

    pub fn initial_orientation(&self) -> f32 {
        *self.orientation.initial_value()
    }

    /// Restore initial position and orientation
    pub fn reset(&self) {
        self.position.reset();
        self.orientation.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::f32::consts::PI;
    use std::rc::Rc;

    fn magnet() -> BarMagnet {
        BarMagnet::new(1, Vec2::new(250.0, 50.0), Vec2::new(10.0, -20.0), 0.5)
    }

    #[test]
    fn test_new_magnet_starts_at_initial_pose() {
        let m = magnet();
        assert_eq!(m.position(), Vec2::new(10.0, -20.0));
        assert_eq!(m.initial_position(), Vec2::new(10.0, -20.0));
        assert_eq!(m.orientation(), 0.5);
        assert_eq!(m.initial_orientation(), 0.5);
        assert_eq!(m.size(), Vec2::new(250.0, 50.0));
    }

    #[test]
    fn test_reset_restores_pose() {
        let m = magnet();
        m.set_position(Vec2::new(300.0, 1.0));
        m.set_orientation(4.0 * PI);

        m.reset();
        assert_eq!(m.position(), m.initial_position());
        assert_eq!(m.orientation(), m.initial_orientation());
    }

    #[test]
    fn test_reset_notifies_listeners() {
        let m = magnet();
        let moves = Rc::new(Cell::new(0));
        let turns = Rc::new(Cell::new(0));
        let mv = moves.clone();
        let tn = turns.clone();
        m.position.lazy_link(move |_, _| mv.set(mv.get() + 1));
        m.orientation.lazy_link(move |_, _| tn.set(tn.get() + 1));

        m.reset();
        assert_eq!(moves.get(), 1);
        assert_eq!(turns.get(), 1);
    }

    #[test]
    fn test_orientation_not_normalized() {
        let m = magnet();
        m.set_orientation(-7.5 * PI);
        assert_eq!(m.orientation(), -7.5 * PI);
    }

    proptest! {
        #[test]
        fn prop_position_round_trip(x in -1.0e6f32..1.0e6, y in -1.0e6f32..1.0e6) {
            let m = magnet();
            m.set_position(Vec2::new(x, y));
            prop_assert_eq!(m.position(), Vec2::new(x, y));
        }

        #[test]
        fn prop_orientation_round_trip(theta in -1.0e4f32..1.0e4) {
            let m = magnet();
            m.set_orientation(theta);
            prop_assert_eq!(m.orientation(), theta);
        }
    }
}
