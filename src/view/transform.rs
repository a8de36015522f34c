//! Model/view coordinate mapping

use glam::Vec2;

/// Offset + uniform scale mapping from model space to view space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelViewTransform {
    /// View-space position of the model origin
    pub offset: Vec2,
    pub scale: f32,
}

impl ModelViewTransform {
    pub fn offset_scale(offset: Vec2, scale: f32) -> Self {
        Self { offset, scale }
    }

    #[inline]
    pub fn model_to_view_position(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    #[inline]
    pub fn view_to_model_position(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.scale
    }

    #[inline]
    pub fn model_to_view_delta(&self, d: Vec2) -> Vec2 {
        d * self.scale
    }

    #[inline]
    pub fn view_to_model_delta(&self, d: Vec2) -> Vec2 {
        d / self.scale
    }
}
