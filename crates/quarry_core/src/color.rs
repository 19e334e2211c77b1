//! Linear RGBA colors.
//!
//! Colors are stored as raw `f32` channels. Blending operates on those
//! channels directly, no transfer function is applied.

use glam::{Vec3, Vec4};

/// RGBA color with `f32` channels.
pub type Color = Vec4;

pub const RED: Color = Vec4::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Color = Vec4::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Color = Vec4::new(0.0, 0.0, 1.0, 1.0);
pub const WHITE: Color = Vec4::ONE;
pub const BLACK: Color = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Blends three colors with barycentric weights `(bx, by, bz)`.
///
/// Each channel is blended independently: `c1 * bx + c2 * by + c3 * bz`.
#[inline]
#[must_use]
pub fn blend_barycentric(c1: Color, c2: Color, c3: Color, barycentric: Vec3) -> Color {
    c1 * barycentric.x + c2 * barycentric.y + c3 * barycentric.z
}
