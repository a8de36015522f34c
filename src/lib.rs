//! Magnets - a bar magnet demonstration screen
//!
//! Core modules:
//! - `sim`: Model (observable properties, bar magnets, screen model)
//! - `view`: Render proxies, control panel, reset, pointer input
//! - `screen`: Pairs one model with one view
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Persisted configuration
//! - `strings`: Button and title labels

pub mod renderer;
pub mod screen;
pub mod settings;
pub mod sim;
pub mod strings;
pub mod view;

pub use screen::MagnetsScreen;
pub use settings::Settings;
pub use strings::{StringKey, Strings};

use glam::Vec2;

/// Screen configuration constants
pub mod consts {
    /// Default layout bounds (view units)
    pub const LAYOUT_WIDTH: f32 = 1024.0;
    pub const LAYOUT_HEIGHT: f32 = 618.0;

    /// Margins around the edge of the view
    pub const SCREEN_VIEW_X_MARGIN: f32 = 20.0;
    pub const SCREEN_VIEW_Y_MARGIN: f32 = 20.0;

    /// Bar magnet size (model units)
    pub const BAR_MAGNET_WIDTH: f32 = 250.0;
    pub const BAR_MAGNET_HEIGHT: f32 = 50.0;

    /// Control panel layout
    pub const PANEL_X_MARGIN: f32 = 10.0;
    pub const PANEL_Y_MARGIN: f32 = 10.0;
    pub const PANEL_SPACING: f32 = 10.0;
    pub const PANEL_LINE_WIDTH: f32 = 3.0;
    pub const PANEL_TITLE_HEIGHT: f32 = 24.0;
    pub const CONTROL_BUTTON_WIDTH: f32 = 140.0;
    pub const CONTROL_BUTTON_HEIGHT: f32 = 30.0;

    /// Reset All button radius
    pub const RESET_ALL_RADIUS: f32 = 24.0;
}

/// Axis-aligned rectangle, y grows downward in view space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounds of the given size with the top-left corner at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    /// Bounds of `size` whose top-right corner is at `corner`
    pub fn from_top_right(corner: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(corner.x - size.x, corner.y), Vec2::new(corner.x, corner.y + size.y))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Rotate `v` counter-clockwise by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
