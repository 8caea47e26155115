//! The downsample pass: reduced-resolution copy of the source with a
//! transparent gutter.

use crate::foundation::core::{ISize, Point, TileMode, Vec2};
use crate::render::sampler::SamplerDescriptor;
use crate::render::snapshot::TextureHandle;
use crate::render::subpass::{QuadVertex, SubpassDraw, SubpassPlan, TextureFillDraw};
use crate::transform::affine::{anchor_scale, map_quad};

pub(crate) const DOWNSAMPLE_LABEL: &str = "gaussian blur downsample";

/// Plan a subpass that renders the scaled-down input plus the transparent
/// gutter required for the blur halo.
///
/// The target is exactly `subpass_size`. The source UV quad is expanded about
/// the unit-square center by `(source + 2 * padding) / source`, so `padding`
/// pixels per edge of the target sample outside the original quad; those
/// samples resolve per `tile_mode`. The gutter compensates for whatever
/// margin the expanded coverage hint could not deliver, and is added in full
/// regardless.
pub fn downsample_plan(
    texture: &TextureHandle,
    sampler: &SamplerDescriptor,
    uvs: [Point; 4],
    subpass_size: ISize,
    padding: Vec2,
    tile_mode: TileMode,
    supports_decal: bool,
) -> SubpassPlan {
    let texture_size = texture.size().to_vec2();
    let gutter_scale = Vec2::new(
        (texture_size.x + 2.0 * padding.x) / texture_size.x,
        (texture_size.y + 2.0 * padding.y) / texture_size.y,
    );
    let guttered_uvs = map_quad(anchor_scale(Point::new(0.5, 0.5), gutter_scale), uvs);

    let sampler = sampler
        .with_tile_mode(tile_mode, supports_decal)
        .with_linear_filtering();

    SubpassPlan {
        label: DOWNSAMPLE_LABEL,
        size: subpass_size,
        draw: SubpassDraw::TextureFill(TextureFillDraw {
            texture: texture.clone(),
            sampler,
            vertices: [
                QuadVertex {
                    position: Point::new(0.0, 0.0),
                    uv: guttered_uvs[0],
                },
                QuadVertex {
                    position: Point::new(1.0, 0.0),
                    uv: guttered_uvs[1],
                },
                QuadVertex {
                    position: Point::new(0.0, 1.0),
                    uv: guttered_uvs[2],
                },
                QuadVertex {
                    position: Point::new(1.0, 1.0),
                    uv: guttered_uvs[3],
                },
            ],
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/downsample.rs"]
mod tests;
