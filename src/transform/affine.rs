//! Affine transform helpers.

use kurbo::{Affine, Point, Vec2};

/// Scale about `anchor` instead of the origin.
#[inline]
pub fn anchor_scale(anchor: Point, scale: Vec2) -> Affine {
    Affine::translate(anchor.to_vec2())
        * Affine::scale_non_uniform(scale.x, scale.y)
        * Affine::translate(-anchor.to_vec2())
}

/// Map a vector through the linear part of `t`, ignoring translation.
#[inline]
pub fn map_vector(t: Affine, v: Vec2) -> Vec2 {
    let [a, b, c, d, _, _] = t.as_coeffs();
    Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
}

#[inline]
pub fn abs_vec(v: Vec2) -> Vec2 {
    Vec2::new(v.x.abs(), v.y.abs())
}

#[inline]
pub fn map_quad(t: Affine, quad: [Point; 4]) -> [Point; 4] {
    quad.map(|p| t * p)
}
