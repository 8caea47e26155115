//! One separable 1-D Gaussian convolution subpass.

use crate::filter::sigma::NEAR_ZERO_SIGMA;
use crate::foundation::core::TileMode;
use crate::foundation::error::HalationResult;
use crate::render::sampler::SamplerDescriptor;
use crate::render::snapshot::TextureHandle;
use crate::render::subpass::{
    BlurInfo, BlurShader, GaussianBlurDraw, SubpassBackend, SubpassDraw, SubpassPlan,
};

pub(crate) const BLUR_LABEL: &str = "gaussian blur filter";

/// Convolve `texture` along the axis selected by `blur.uv_offset`, producing
/// an output of the same pixel size.
///
/// A sub-threshold sigma makes this pass an identity: the input handle comes
/// back unchanged and nothing is recorded or allocated.
pub fn blur_pass(
    backend: &mut dyn SubpassBackend,
    texture: TextureHandle,
    sampler: &SamplerDescriptor,
    tile_mode: TileMode,
    blur: BlurInfo,
) -> HalationResult<TextureHandle> {
    if blur.sigma < NEAR_ZERO_SIGMA {
        return Ok(texture);
    }

    let supports_decal = backend.supports_decal_address_mode();
    let shader = if tile_mode == TileMode::Decal && !supports_decal {
        BlurShader::DecalFallback
    } else {
        BlurShader::Standard
    };

    let sampler = sampler
        .with_tile_mode(tile_mode, supports_decal)
        .with_linear_filtering();

    // TODO(halation): this blurs the whole texture; a known clip region could
    // bound the draw to just the visible part.
    let plan = SubpassPlan {
        label: BLUR_LABEL,
        size: texture.size(),
        draw: SubpassDraw::GaussianBlur(GaussianBlurDraw {
            texture,
            sampler,
            shader,
            blur,
        }),
    };
    backend.render_subpass(&plan)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/blur_pass.rs"]
mod tests;
