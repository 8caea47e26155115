//! Final output assembly: transform the blurred texture back into the
//! caller's coordinate space.

use crate::foundation::core::{Affine, Vec2};
use crate::render::sampler::SamplerDescriptor;
use crate::render::snapshot::{Snapshot, TextureHandle};

/// Build the output snapshot for the blur chain.
///
/// The composed transform maps output pixel coordinates back to the local
/// space the input snapshot used: scale by `1 / effective_scale` to undo the
/// downsample, then translate by `-padding` to undo the gutter offset, then
/// apply the input's own placement.
///
/// The sampler is linear clamp-to-edge: the tile mode's edge effects were
/// already consumed by the gutter in the downsample pass.
pub fn compose_output(
    blurred: TextureHandle,
    input_transform: Affine,
    padding: Vec2,
    effective_scale: Vec2,
    opacity: f32,
) -> Snapshot {
    let transform = input_transform
        * Affine::translate(-padding)
        * Affine::scale_non_uniform(1.0 / effective_scale.x, 1.0 / effective_scale.y);

    Snapshot {
        texture: blurred,
        transform,
        sampler: SamplerDescriptor::linear_clamp(),
        opacity,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/compose.rs"]
mod tests;
